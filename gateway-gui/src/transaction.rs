//! Submission logic shared by the transaction forms.
//!
//! A form composes a [`TransactionFormBehavior`] instead of inheriting it: the behavior owns the
//! per-field validation outcomes and the in-flight request, the form only reads them back when
//! rendering.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use iced::Task;
use rust_decimal::Decimal;

use crate::{
    app::{error::Error, message::Message},
    services::gateway::{GatewayBackend, GatewayError, Submission, CSRF_FORM_FIELD},
};

/// Number of decimal places of a DASH amount.
pub const AMOUNT_DECIMALS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
        }
    }

    /// Endpoint accepting the form of this kind of transaction.
    pub fn submit_path(&self) -> &'static str {
        match self {
            Self::Deposit => "/api/v1/deposit/",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Submitted fields of a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RippleAddress,
    DashToTransfer,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::RippleAddress, Field::DashToTransfer];

    pub fn name(&self) -> &'static str {
        match self {
            Self::RippleAddress => "ripple_address",
            Self::DashToTransfer => "dash_to_transfer",
        }
    }
}

impl FromStr for Field {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("Unknown field '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing,
    /// An amount that is not a non-negative decimal with at most 8 places.
    InvalidAmount,
    BelowMinimum(Decimal),
    ServerRejected(String),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "This field is required."),
            Self::InvalidAmount => write!(
                f,
                "Enter an amount with at most {} decimal places.",
                AMOUNT_DECIMALS
            ),
            Self::BelowMinimum(min) => {
                write!(f, "Ensure this value is greater than or equal to {}.", min)
            }
            Self::ServerRejected(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValidation {
    #[default]
    Unvalidated,
    Valid,
    Invalid(FieldError),
}

impl FieldValidation {
    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Parses a user typed amount, tolerating a leading or trailing decimal point.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    let s = s.strip_suffix('.').unwrap_or(s);
    if s.is_empty() {
        return None;
    }
    let s = if s.starts_with('.') {
        format!("0{}", s)
    } else {
        s.to_string()
    };
    Decimal::from_str(&s)
        .ok()
        .filter(|amount| !amount.is_sign_negative() && amount.scale() <= AMOUNT_DECIMALS)
}

/// The field set a form hands over on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFields {
    pub ripple_address: String,
    pub dash_to_transfer: String,
    pub min_amount: Decimal,
    pub csrf_token: Option<String>,
}

impl TransactionFields {
    /// Client side checks run before anything is sent.
    pub fn validate(&self) -> HashMap<Field, FieldValidation> {
        let mut validations = HashMap::new();
        validations.insert(
            Field::RippleAddress,
            if self.ripple_address.trim().is_empty() {
                FieldValidation::Invalid(FieldError::Missing)
            } else {
                FieldValidation::Valid
            },
        );
        validations.insert(
            Field::DashToTransfer,
            match parse_amount(&self.dash_to_transfer) {
                None if self.dash_to_transfer.trim().is_empty() => {
                    FieldValidation::Invalid(FieldError::Missing)
                }
                None => FieldValidation::Invalid(FieldError::InvalidAmount),
                Some(amount) if amount < self.min_amount => {
                    FieldValidation::Invalid(FieldError::BelowMinimum(self.min_amount))
                }
                Some(_) => FieldValidation::Valid,
            },
        );
        validations
    }

    /// Url-encoded body of the submission, anti-forgery token included when known.
    pub fn form_data(&self) -> Vec<(&'static str, String)> {
        let mut data = vec![
            (
                Field::RippleAddress.name(),
                self.ripple_address.trim().to_string(),
            ),
            (
                Field::DashToTransfer.name(),
                parse_amount(&self.dash_to_transfer)
                    .map(|a| a.normalize().to_string())
                    .unwrap_or_else(|| self.dash_to_transfer.clone()),
            ),
        ];
        if let Some(token) = &self.csrf_token {
            data.push((CSRF_FORM_FIELD, token.clone()));
        }
        data
    }
}

pub trait TransactionFormBehavior {
    fn field_validation(&self, field: Field) -> FieldValidation;
    /// The user changed the field, its previous outcome no longer applies.
    fn field_edited(&mut self, field: Field);
    fn submit(&mut self, fields: TransactionFields, kind: TransactionKind) -> Task<Message>;
    /// Records the submission result and returns the status url on success.
    fn submitted(&mut self, result: Result<Submission, GatewayError>) -> Option<String>;
    fn warning(&self) -> Option<&Error>;
    fn is_processing(&self) -> bool;
}

pub struct Transaction {
    backend: Arc<dyn GatewayBackend + Sync + Send>,
    validations: HashMap<Field, FieldValidation>,
    warning: Option<Error>,
    processing: bool,
}

impl Transaction {
    pub fn new(backend: Arc<dyn GatewayBackend + Sync + Send>) -> Self {
        Self {
            backend,
            validations: HashMap::new(),
            warning: None,
            processing: false,
        }
    }
}

impl TransactionFormBehavior for Transaction {
    fn field_validation(&self, field: Field) -> FieldValidation {
        self.validations.get(&field).cloned().unwrap_or_default()
    }

    fn field_edited(&mut self, field: Field) {
        self.validations.remove(&field);
    }

    fn submit(&mut self, fields: TransactionFields, kind: TransactionKind) -> Task<Message> {
        if self.processing {
            tracing::debug!("A {} submission is already in flight", kind);
            return Task::none();
        }

        self.validations = fields.validate();
        if self.validations.values().any(FieldValidation::is_invalid) {
            tracing::debug!("{} form did not pass client side validation", kind);
            return Task::none();
        }

        self.warning = None;
        self.processing = true;
        let backend = self.backend.clone();
        Task::perform(
            async move { submit_transaction(backend.as_ref(), kind, &fields).await },
            Message::Submitted,
        )
    }

    fn submitted(&mut self, result: Result<Submission, GatewayError>) -> Option<String> {
        self.processing = false;
        match result {
            Ok(Submission::Accepted { status_url }) => {
                self.warning = None;
                for field in Field::ALL {
                    self.validations.insert(field, FieldValidation::Valid);
                }
                Some(status_url).filter(|url| !url.is_empty())
            }
            Ok(Submission::Rejected(errors)) => {
                for field in Field::ALL {
                    self.validations.insert(field, FieldValidation::Valid);
                }
                for (name, messages) in errors {
                    match Field::from_str(&name) {
                        Ok(field) => {
                            self.validations.insert(
                                field,
                                FieldValidation::Invalid(FieldError::ServerRejected(
                                    messages.join(" "),
                                )),
                            );
                        }
                        Err(e) => tracing::warn!("Ignoring server form error: {}", e),
                    }
                }
                None
            }
            Err(e) => {
                tracing::error!("Transaction submission failed: {}", e);
                self.warning = Some(e.into());
                None
            }
        }
    }

    fn warning(&self) -> Option<&Error> {
        self.warning.as_ref()
    }

    fn is_processing(&self) -> bool {
        self.processing
    }
}

/// Sends the form to the gateway. Fails early without an anti-forgery token since the server
/// would refuse the request anyway.
pub async fn submit_transaction(
    backend: &(dyn GatewayBackend + Sync + Send),
    kind: TransactionKind,
    fields: &TransactionFields,
) -> Result<Submission, GatewayError> {
    let token = fields
        .csrf_token
        .as_deref()
        .ok_or(GatewayError::MissingCsrfToken)?;
    tracing::info!("Submitting {} transaction", kind);
    backend.submit(kind, fields.form_data(), token).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::gateway::tests::MockBackend;
    use rust_decimal::dec;

    fn fields(address: &str, amount: &str) -> TransactionFields {
        TransactionFields {
            ripple_address: address.to_string(),
            dash_to_transfer: amount.to_string(),
            min_amount: dec!(0.5),
            csrf_token: Some("token".to_string()),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10"), Some(dec!(10)));
        assert_eq!(parse_amount("10."), Some(dec!(10)));
        assert_eq!(parse_amount(".5"), Some(dec!(0.5)));
        assert_eq!(parse_amount("0.00000001"), Some(dec!(0.00000001)));
        assert_eq!(parse_amount("0.000000001"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::from_str("ripple_address"), Ok(Field::RippleAddress));
        assert_eq!(Field::from_str("dash_to_transfer"), Ok(Field::DashToTransfer));
        assert!(Field::from_str("dash_to_receive_input").is_err());
    }

    #[test]
    fn test_client_side_validation() {
        let validations = fields("", "").validate();
        assert_eq!(
            validations[&Field::RippleAddress],
            FieldValidation::Invalid(FieldError::Missing)
        );
        assert_eq!(
            validations[&Field::DashToTransfer],
            FieldValidation::Invalid(FieldError::Missing)
        );

        let validations = fields("rp2PaYDxVwDvaZVLEQv7bHhoFQEyX1mEx7", "0.4").validate();
        assert_eq!(validations[&Field::RippleAddress], FieldValidation::Valid);
        assert_eq!(
            validations[&Field::DashToTransfer],
            FieldValidation::Invalid(FieldError::BelowMinimum(dec!(0.5)))
        );

        let validations = fields("rp2PaYDxVwDvaZVLEQv7bHhoFQEyX1mEx7", "0.5").validate();
        assert!(validations.values().all(|v| *v == FieldValidation::Valid));
    }

    #[test]
    fn test_unparsable_amount_is_not_reported_missing() {
        for amount in ["0.000000001", "-1", "1.2.3"] {
            let validations = fields("rp2PaYDxVwDvaZVLEQv7bHhoFQEyX1mEx7", amount).validate();
            assert_eq!(
                validations[&Field::DashToTransfer],
                FieldValidation::Invalid(FieldError::InvalidAmount)
            );
        }
        assert_eq!(
            fields("r", "  ").validate()[&Field::DashToTransfer],
            FieldValidation::Invalid(FieldError::Missing)
        );
        assert_ne!(
            FieldError::InvalidAmount.to_string(),
            FieldError::Missing.to_string()
        );
    }

    #[test]
    fn test_form_data() {
        let data = fields(" rp2PaYDxVwDvaZVLEQv7bHhoFQEyX1mEx7 ", "10.").form_data();
        assert_eq!(
            data,
            vec![
                ("ripple_address", "rp2PaYDxVwDvaZVLEQv7bHhoFQEyX1mEx7".to_string()),
                ("dash_to_transfer", "10".to_string()),
                ("csrfmiddlewaretoken", "token".to_string()),
            ]
        );

        let mut without_token = fields("r", "1");
        without_token.csrf_token = None;
        assert!(without_token
            .form_data()
            .iter()
            .all(|(name, _)| *name != CSRF_FORM_FIELD));
    }

    #[test]
    fn test_invalid_fields_are_not_submitted() {
        let backend = Arc::new(MockBackend::default());
        let mut transaction = Transaction::new(backend.clone());
        let _ = transaction.submit(fields("", "1"), TransactionKind::Deposit);
        assert!(!transaction.is_processing());
        assert_eq!(
            transaction.field_validation(Field::RippleAddress),
            FieldValidation::Invalid(FieldError::Missing)
        );
        assert_eq!(
            transaction.field_validation(Field::DashToTransfer),
            FieldValidation::Valid
        );

        transaction.field_edited(Field::RippleAddress);
        assert_eq!(
            transaction.field_validation(Field::RippleAddress),
            FieldValidation::Unvalidated
        );
    }

    #[test]
    fn test_submitted_results() {
        let mut transaction = Transaction::new(Arc::new(MockBackend::default()));

        let mut errors = HashMap::new();
        errors.insert(
            "ripple_address".to_string(),
            vec!["The Ripple address is not valid.".to_string()],
        );
        errors.insert("unknown".to_string(), vec!["ignored".to_string()]);
        assert_eq!(transaction.submitted(Ok(Submission::Rejected(errors))), None);
        assert_eq!(
            transaction.field_validation(Field::RippleAddress),
            FieldValidation::Invalid(FieldError::ServerRejected(
                "The Ripple address is not valid.".to_string()
            ))
        );
        assert_eq!(
            transaction.field_validation(Field::DashToTransfer),
            FieldValidation::Valid
        );

        assert_eq!(
            transaction.submitted(Err(GatewayError::Http(Some(500), "boom".to_string()))),
            None
        );
        assert!(transaction.warning().is_some());

        assert_eq!(
            transaction.submitted(Ok(Submission::Accepted {
                status_url: "".to_string()
            })),
            None
        );
        assert_eq!(
            transaction.submitted(Ok(Submission::Accepted {
                status_url: "/transaction/42/status/".to_string()
            })),
            Some("/transaction/42/status/".to_string())
        );
        assert!(transaction.warning().is_none());
    }

    #[tokio::test]
    async fn test_submit_transaction() {
        let backend = MockBackend::default().with_submission(Ok(Submission::Accepted {
            status_url: "/transaction/42/status/".to_string(),
        }));
        let res = submit_transaction(
            &backend,
            TransactionKind::Deposit,
            &fields("rp2PaYDxVwDvaZVLEQv7bHhoFQEyX1mEx7", "1"),
        )
        .await;
        assert_eq!(
            res,
            Ok(Submission::Accepted {
                status_url: "/transaction/42/status/".to_string()
            })
        );
        let submitted = backend.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].0, TransactionKind::Deposit);
        assert_eq!(submitted[0].2, "token");
    }

    #[tokio::test]
    async fn test_submit_transaction_without_token() {
        let backend = MockBackend::default();
        let mut f = fields("rp2PaYDxVwDvaZVLEQv7bHhoFQEyX1mEx7", "1");
        f.csrf_token = None;
        let res = submit_transaction(&backend, TransactionKind::Deposit, &f).await;
        assert_eq!(res, Err(GatewayError::MissingCsrfToken));
        assert!(backend.submitted().is_empty());
    }
}
