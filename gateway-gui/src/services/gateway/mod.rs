pub mod api;
pub mod client;

#[cfg(test)]
pub mod tests;

use async_trait::async_trait;
use rust_decimal::Decimal;

pub use api::*;
pub use client::GatewayClient;

use crate::transaction::TransactionKind;

/// Operations the application needs from the gateway server.
#[async_trait]
pub trait GatewayBackend {
    /// Opens a session and returns the anti-forgery token it was issued, if any.
    async fn csrf_token(&self) -> Result<Option<String>, GatewayError>;

    async fn submit(
        &self,
        kind: TransactionKind,
        form: Vec<(&'static str, String)>,
        csrf_token: &str,
    ) -> Result<Submission, GatewayError>;

    /// Amount the gateway credits for `amount` sent with a transaction of this kind.
    async fn received_amount(
        &self,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Result<Decimal, GatewayError>;

    /// Fetches the state of a transaction from the url returned on submission.
    async fn status(&self, status_url: &str) -> Result<TransactionStatus, GatewayError>;

    async fn page(&self, slug: &str) -> Result<Page, GatewayError>;
}
