use async_trait::async_trait;
use reqwest::{
    header::{COOKIE, REFERER, SET_COOKIE},
    Method, RequestBuilder, StatusCode,
};
use rust_decimal::Decimal;
use url::Url;

use super::{api::*, GatewayBackend};
use crate::{
    services::http::{RequestExt, ResponseExt},
    transaction::TransactionKind,
};

const RECEIVED_AMOUNT_PATH: &str = "/api/v1/get-received-amount/";

/// Gateway API client
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GatewayClient {
    pub fn new(base_url: Url) -> Self {
        tracing::info!("Gateway client initialized for {}", base_url);
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Resolves `path` against the gateway url. Absolute urls are kept as is.
    pub fn url(&self, path: &str) -> Result<Url, GatewayError> {
        Ok(self.base_url.join(path)?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, GatewayError> {
        let url = self.url(path)?;
        tracing::debug!("Gateway API request: {} {}", method, url);
        Ok(self.http.request(method, url).ajax())
    }
}

#[async_trait]
impl GatewayBackend for GatewayClient {
    async fn csrf_token(&self) -> Result<Option<String>, GatewayError> {
        let response = self
            .request(Method::GET, "/")?
            .send()
            .await?
            .check_success()
            .await?;

        let token = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(csrf_from_set_cookie)
            .map(str::to_string);

        if token.is_none() {
            tracing::warn!("Gateway did not issue an anti-forgery token");
        }
        Ok(token)
    }

    async fn submit(
        &self,
        kind: TransactionKind,
        form: Vec<(&'static str, String)>,
        csrf_token: &str,
    ) -> Result<Submission, GatewayError> {
        let response = self
            .request(Method::POST, kind.submit_path())?
            .header(CSRF_HEADER, csrf_token)
            .header(COOKIE, format!("{}={}", CSRF_COOKIE_NAME, csrf_token))
            .header(REFERER, self.base_url.as_str())
            .form(&form)
            .send()
            .await?;

        if response.status() == StatusCode::BAD_REQUEST {
            let rejected: FormErrorsResponse = response.json().await?;
            tracing::info!(
                "Gateway rejected the {} form: {:?}",
                kind,
                rejected.form_errors
            );
            return Ok(Submission::Rejected(rejected.form_errors));
        }

        let accepted: SubmitResponse = response.check_success().await?.json().await?;
        tracing::info!("{} accepted, status at {}", kind, accepted.status_url);
        Ok(Submission::Accepted {
            status_url: accepted.status_url,
        })
    }

    async fn received_amount(
        &self,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Result<Decimal, GatewayError> {
        let response: ReceivedAmountResponse = self
            .request(Method::GET, RECEIVED_AMOUNT_PATH)?
            .query(&[
                ("amount", amount.normalize().to_string()),
                ("transaction_type", kind.as_str().to_string()),
            ])
            .send()
            .await?
            .check_success()
            .await?
            .json()
            .await?;
        Ok(response.received_amount)
    }

    async fn status(&self, status_url: &str) -> Result<TransactionStatus, GatewayError> {
        let status: TransactionStatus = self
            .request(Method::GET, status_url)?
            .send()
            .await?
            .check_success()
            .await?
            .json()
            .await?;
        tracing::debug!(
            "Transaction {} state: {}",
            status.transaction_id,
            status.state
        );
        Ok(status)
    }

    async fn page(&self, slug: &str) -> Result<Page, GatewayError> {
        let response: PageResponse = self
            .request(Method::GET, &format!("/api/v1/page/{}/", slug))?
            .send()
            .await?
            .check_success()
            .await?
            .json()
            .await?;
        Ok(response.page)
    }
}
