use rust_decimal::Decimal;

use crate::{
    app::view,
    services::gateway::{GatewayError, Page, Submission, TransactionStatus},
};

#[derive(Debug, Clone)]
pub enum Message {
    View(view::Message),
    CsrfToken(Result<Option<String>, GatewayError>),
    Submitted(Result<Submission, GatewayError>),
    /// Receive amount computed by the gateway for the typed amount.
    ReceivedAmount(String, Result<Decimal, GatewayError>),
    StatusTick,
    Status(Result<TransactionStatus, GatewayError>),
    Page(Result<Page, GatewayError>),
}

impl From<view::Message> for Message {
    fn from(message: view::Message) -> Self {
        Message::View(message)
    }
}
