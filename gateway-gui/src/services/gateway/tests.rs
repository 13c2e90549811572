use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::{dec, Decimal};
use serde_json::json;

use super::*;
use crate::transaction::TransactionKind;

/// Backend answering with canned responses and recording submissions.
#[derive(Default)]
pub struct MockBackend {
    csrf_token: Option<String>,
    submission: Mutex<Option<Result<Submission, GatewayError>>>,
    statuses: Mutex<Vec<Result<TransactionStatus, GatewayError>>>,
    page: Option<Page>,
    received_amount: Option<Decimal>,
    #[allow(clippy::type_complexity)]
    submitted: Mutex<Vec<(TransactionKind, Vec<(&'static str, String)>, String)>>,
}

impl MockBackend {
    pub fn with_csrf_token(mut self, token: &str) -> Self {
        self.csrf_token = Some(token.to_string());
        self
    }

    pub fn with_submission(self, submission: Result<Submission, GatewayError>) -> Self {
        *self.submission.lock().expect("poisoned") = Some(submission);
        self
    }

    /// Statuses are served in order, the last one repeatedly.
    pub fn with_statuses(self, statuses: Vec<Result<TransactionStatus, GatewayError>>) -> Self {
        *self.statuses.lock().expect("poisoned") = statuses;
        self
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_received_amount(mut self, amount: Decimal) -> Self {
        self.received_amount = Some(amount);
        self
    }

    #[allow(clippy::type_complexity)]
    pub fn submitted(&self) -> Vec<(TransactionKind, Vec<(&'static str, String)>, String)> {
        self.submitted.lock().expect("poisoned").clone()
    }
}

#[async_trait]
impl GatewayBackend for MockBackend {
    async fn csrf_token(&self) -> Result<Option<String>, GatewayError> {
        Ok(self.csrf_token.clone())
    }

    async fn submit(
        &self,
        kind: TransactionKind,
        form: Vec<(&'static str, String)>,
        csrf_token: &str,
    ) -> Result<Submission, GatewayError> {
        self.submitted
            .lock()
            .expect("poisoned")
            .push((kind, form, csrf_token.to_string()));
        self.submission
            .lock()
            .expect("poisoned")
            .clone()
            .unwrap_or(Err(GatewayError::Http(Some(500), "no answer".to_string())))
    }

    async fn received_amount(
        &self,
        _amount: Decimal,
        _kind: TransactionKind,
    ) -> Result<Decimal, GatewayError> {
        self.received_amount.ok_or(GatewayError::NotFound)
    }

    async fn status(&self, _status_url: &str) -> Result<TransactionStatus, GatewayError> {
        let mut statuses = self.statuses.lock().expect("poisoned");
        match statuses.len() {
            0 => Err(GatewayError::NotFound),
            1 => statuses[0].clone(),
            _ => statuses.remove(0),
        }
    }

    async fn page(&self, _slug: &str) -> Result<Page, GatewayError> {
        self.page.clone().ok_or(GatewayError::NotFound)
    }
}

#[test]
fn test_client_url() {
    let client = GatewayClient::new(url::Url::parse("https://gateway.example.com/").unwrap());
    assert_eq!(
        client.url(TransactionKind::Deposit.submit_path()).unwrap().as_str(),
        "https://gateway.example.com/api/v1/deposit/"
    );
    assert_eq!(
        client.url("/transaction/42/status/").unwrap().as_str(),
        "https://gateway.example.com/transaction/42/status/"
    );
    assert_eq!(
        client
            .url("https://other.example.com/transaction/42/status/")
            .unwrap()
            .as_str(),
        "https://other.example.com/transaction/42/status/"
    );
}

#[test]
fn test_csrf_from_set_cookie() {
    assert_eq!(
        csrf_from_set_cookie("csrftoken=abc123; expires=Thu, 01 Jan 2099 00:00:00 GMT; Path=/"),
        Some("abc123")
    );
    assert_eq!(csrf_from_set_cookie("csrftoken=abc123"), Some("abc123"));
    assert_eq!(csrf_from_set_cookie("sessionid=xyz; Path=/"), None);
    assert_eq!(csrf_from_set_cookie("csrftoken=; Path=/"), None);
    assert_eq!(csrf_from_set_cookie(""), None);
}

#[test]
fn test_submission_responses_parsing() {
    let accepted: SubmitResponse =
        serde_json::from_value(json!({ "status_url": "/transaction/42/status/" })).unwrap();
    assert_eq!(accepted.status_url, "/transaction/42/status/");

    let rejected: FormErrorsResponse = serde_json::from_value(json!({
        "form_errors": {
            "ripple_address": ["The Ripple address is not valid."],
            "dash_to_transfer": ["This field is required."],
        }
    }))
    .unwrap();
    assert_eq!(
        rejected.form_errors["ripple_address"],
        vec!["The Ripple address is not valid.".to_string()]
    );
    assert_eq!(
        rejected.form_errors["dash_to_transfer"],
        vec!["This field is required.".to_string()]
    );
}

#[test]
fn test_status_parsing() {
    let status: TransactionStatus = serde_json::from_value(json!({
        "transactionId": 42,
        "state": "Received an incoming transaction (hash - ab12). Waiting for 6 confirmations",
        "stateHistory": [
            "Initiated",
            { "current_state": "Received an incoming transaction", "datetime": "2018-01-09T19:45:00Z" },
        ],
    }))
    .unwrap();
    assert_eq!(status.transaction_id, 42);
    assert!(!status.is_final());
    assert_eq!(status.state_history.len(), 2);
    assert_eq!(status.state_history[0].to_string(), "Initiated");
    assert_eq!(
        status.state_history[1].to_string(),
        "2018-01-09T19:45:00Z: Received an incoming transaction"
    );

    let status: TransactionStatus = serde_json::from_value(json!({
        "transactionId": 42,
        "state": "Transaction is processed. Hash of a Ripple transaction is CD34",
    }))
    .unwrap();
    assert!(status.state_history.is_empty());
    assert!(status.is_final());

    for state in [
        "Received 0 Dash transactions. Transactions to the address Xek are no longer tracked",
        "Transaction failed. Please contact our support team",
    ] {
        let status = TransactionStatus {
            transaction_id: 1,
            state: state.to_string(),
            state_history: Vec::new(),
        };
        assert!(status.is_final());
    }
}

#[test]
fn test_page_parsing() {
    let response: PageResponse = serde_json::from_value(json!({
        "page": { "title": "How to deposit", "description": "Send DASH to the address." }
    }))
    .unwrap();
    assert_eq!(response.page.title, "How to deposit");
}

#[test]
fn test_received_amount_parsing() {
    let response: ReceivedAmountResponse =
        serde_json::from_value(json!({ "received_amount": "99" })).unwrap();
    assert_eq!(response.received_amount, dec!(99));

    let response: ReceivedAmountResponse =
        serde_json::from_value(json!({ "received_amount": "9.95000000" })).unwrap();
    assert_eq!(response.received_amount, dec!(9.95));

    assert!(serde_json::from_value::<ReceivedAmountResponse>(json!({})).is_err());
}

#[test]
fn test_error_conversion() {
    use crate::services::http::NotSuccessResponseInfo;
    assert_eq!(
        GatewayError::from(NotSuccessResponseInfo {
            status_code: 404,
            text: "".to_string()
        }),
        GatewayError::NotFound
    );
    assert_eq!(
        GatewayError::from(NotSuccessResponseInfo {
            status_code: 403,
            text: "CSRF verification failed".to_string()
        }),
        GatewayError::Http(Some(403), "CSRF verification failed".to_string())
    );
}
