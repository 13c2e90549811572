use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::services::http::NotSuccessResponseInfo;

/// Name of the cookie holding the anti-forgery token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
/// Hidden form field carrying the anti-forgery token.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";
/// Header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Gateway API errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    Http(Option<u16>, String),
    InvalidResponse(String),
    InvalidUrl(String),
    MissingCsrfToken,
    NotFound,
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Http(code, msg) => write!(f, "HTTP error [{:?}]: {}", code, msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            Self::InvalidUrl(msg) => write!(f, "Invalid url: {}", msg),
            Self::MissingCsrfToken => write!(f, "No anti-forgery token for this session"),
            Self::NotFound => write!(f, "Resource not found"),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::InvalidResponse(error.to_string())
        } else {
            Self::Http(error.status().map(|s| s.as_u16()), error.to_string())
        }
    }
}

impl From<NotSuccessResponseInfo> for GatewayError {
    fn from(value: NotSuccessResponseInfo) -> Self {
        if value.is_not_found() {
            Self::NotFound
        } else {
            Self::Http(Some(value.status_code), value.text)
        }
    }
}

impl From<url::ParseError> for GatewayError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error.to_string())
    }
}

/// Body of an accepted transaction submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status_url: String,
}

/// Body of a submission rejected by the server form validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormErrorsResponse {
    pub form_errors: HashMap<String, Vec<String>>,
}

/// Amount credited on the destination side, computed by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedAmountResponse {
    pub received_amount: Decimal,
}

/// Outcome of a transaction submission that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted { status_url: String },
    /// Error messages per submitted field name.
    Rejected(HashMap<String, Vec<String>>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateChange {
    Message(String),
    Change {
        #[serde(alias = "current_state")]
        state: String,
        #[serde(default)]
        datetime: Option<String>,
    },
}

impl std::fmt::Display for StateChange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Message(state) => write!(f, "{}", state),
            Self::Change {
                state,
                datetime: Some(datetime),
            } => write!(f, "{}: {}", datetime, state),
            Self::Change {
                state,
                datetime: None,
            } => write!(f, "{}", state),
        }
    }
}

/// State of a submitted transaction as served by its status url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatus {
    #[serde(rename = "transactionId")]
    pub transaction_id: u64,
    pub state: String,
    #[serde(rename = "stateHistory", default)]
    pub state_history: Vec<StateChange>,
}

impl TransactionStatus {
    /// The gateway stops tracking a transaction once it is processed, expired or failed.
    pub fn is_final(&self) -> bool {
        self.state.starts_with("Transaction is processed")
            || self.state.contains("no longer tracked")
            || self.state.starts_with("Transaction failed")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse {
    pub page: Page,
}

/// Extracts the anti-forgery token from a `Set-Cookie` header value.
pub fn csrf_from_set_cookie(header: &str) -> Option<&str> {
    let pair = header.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    if name.trim() == CSRF_COOKIE_NAME && !value.is_empty() {
        Some(value.trim())
    } else {
        None
    }
}
