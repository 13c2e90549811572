use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};

/// Header the gateway server checks to tell API calls from page loads.
pub const X_REQUESTED_WITH: &str = "X-Requested-With";

/// Information about an unsuccessful response.
#[derive(Debug, Clone)]
pub struct NotSuccessResponseInfo {
    pub status_code: u16,
    pub text: String,
}

impl NotSuccessResponseInfo {
    pub fn is_not_found(&self) -> bool {
        self.status_code == StatusCode::NOT_FOUND.as_u16()
    }
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo> {
        let status = self.status();
        if !status.is_success() {
            return Err(NotSuccessResponseInfo {
                status_code: status.as_u16(),
                text: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}

pub trait RequestExt {
    /// Marks the request as an asynchronous API call so the server answers with JSON.
    fn ajax(self) -> Self;
}

impl RequestExt for RequestBuilder {
    fn ajax(self) -> Self {
        self.header(X_REQUESTED_WITH, "XMLHttpRequest")
    }
}
