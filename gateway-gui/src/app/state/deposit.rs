use std::sync::Arc;

use gateway_ui::widget::*;
use iced::Task;
use rust_decimal::Decimal;

use crate::{
    app::{message::Message, route::DEPOSIT_HOW_TO_PATH, state::State, view},
    convert::ReceiveAmount,
    services::gateway::{GatewayBackend, GatewayError, Submission, CSRF_FORM_FIELD},
    session::SecurityContext,
    transaction::{
        parse_amount, Field, FieldValidation, TransactionFields, TransactionFormBehavior,
        TransactionKind,
    },
};

/// Granularity of the amount input, one hundred millionth of a DASH.
pub const AMOUNT_STEP: &str = "0.00000001";
/// Display-only field, never submitted.
pub const RECEIVE_AMOUNT_FIELD: &str = "dash_to_receive_input";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    /// Terminal: the transaction was accepted and its status lives at this url.
    Redirecting(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number { step: &'static str, min: String },
    Display,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMarkup {
    pub name: &'static str,
    pub label: String,
    pub kind: InputKind,
    pub value: String,
    pub required: bool,
    pub disabled: bool,
    pub validation: FieldValidation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMarkup {
    pub heading: &'static str,
    pub fields: Vec<FieldMarkup>,
    pub submit_label: &'static str,
    pub help_link: &'static str,
    pub processing: bool,
}

impl FormMarkup {
    pub fn field(&self, name: &str) -> Option<&FieldMarkup> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// What the deposit form displays for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    Redirect(String),
    Form(FormMarkup),
}

pub struct DepositForm {
    min_amount: Decimal,
    phase: Phase,
    ripple_address: String,
    dash_to_transfer: String,
    dash_to_receive: String,
    converter: Arc<dyn ReceiveAmount + Send + Sync>,
    /// Gateway refining the local receive amount estimate, if enabled.
    quotes: Option<Arc<dyn GatewayBackend + Sync + Send>>,
    transaction: Box<dyn TransactionFormBehavior>,
}

impl DepositForm {
    pub fn new(
        min_amount: Decimal,
        converter: Arc<dyn ReceiveAmount + Send + Sync>,
        transaction: Box<dyn TransactionFormBehavior>,
    ) -> Self {
        Self {
            min_amount: min_amount.normalize(),
            phase: Phase::Editing,
            ripple_address: String::new(),
            dash_to_transfer: String::new(),
            dash_to_receive: String::new(),
            converter,
            quotes: None,
            transaction,
        }
    }

    pub fn with_gateway_quotes(mut self, backend: Arc<dyn GatewayBackend + Sync + Send>) -> Self {
        self.quotes = Some(backend);
        self
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn render(&self, security: &dyn SecurityContext) -> Render {
        if let Phase::Redirecting(url) = &self.phase {
            return Render::Redirect(url.clone());
        }

        Render::Form(FormMarkup {
            heading: "Deposit DASH to Ripple",
            fields: vec![
                FieldMarkup {
                    name: CSRF_FORM_FIELD,
                    label: String::new(),
                    kind: InputKind::Hidden,
                    value: security.csrf_token().unwrap_or_default().to_string(),
                    required: false,
                    disabled: false,
                    validation: FieldValidation::Unvalidated,
                },
                FieldMarkup {
                    name: Field::RippleAddress.name(),
                    label: "Your Ripple Address:".to_string(),
                    kind: InputKind::Text,
                    value: self.ripple_address.clone(),
                    required: true,
                    disabled: false,
                    validation: self.transaction.field_validation(Field::RippleAddress),
                },
                FieldMarkup {
                    name: Field::DashToTransfer.name(),
                    label: format!("Deposit Amount (Min. {} DASH):", self.min_amount),
                    kind: InputKind::Number {
                        step: AMOUNT_STEP,
                        min: self.min_amount.to_string(),
                    },
                    value: self.dash_to_transfer.clone(),
                    required: true,
                    disabled: false,
                    validation: self.transaction.field_validation(Field::DashToTransfer),
                },
                FieldMarkup {
                    name: RECEIVE_AMOUNT_FIELD,
                    label: "Receive Amount:".to_string(),
                    kind: InputKind::Display,
                    value: self.dash_to_receive.clone(),
                    required: false,
                    disabled: true,
                    validation: FieldValidation::Unvalidated,
                },
            ],
            submit_label: "Start",
            help_link: DEPOSIT_HOW_TO_PATH,
            processing: self.transaction.is_processing(),
        })
    }

    pub fn on_address_input(&mut self, value: String) {
        if self.phase != Phase::Editing {
            return;
        }
        self.ripple_address = value;
        self.transaction.field_edited(Field::RippleAddress);
    }

    /// Keeps the typed amount as is and derives the receive amount from it. The local estimate
    /// is shown at once, the gateway answer replaces it if it arrives before the next input.
    pub fn on_amount_input(&mut self, value: String) -> Task<Message> {
        // Rejected keystrokes come back with the current value.
        if self.phase != Phase::Editing || value == self.dash_to_transfer {
            return Task::none();
        }
        let amount = parse_amount(&value);
        self.dash_to_receive = amount
            .and_then(|amount| self.converter.receive_amount(amount))
            .map(|amount| amount.to_string())
            .unwrap_or_default();
        self.dash_to_transfer = value.clone();
        self.transaction.field_edited(Field::DashToTransfer);

        match (amount, &self.quotes) {
            (Some(amount), Some(backend)) => {
                let backend = backend.clone();
                Task::perform(
                    async move {
                        backend
                            .received_amount(amount, TransactionKind::Deposit)
                            .await
                    },
                    move |res| Message::ReceivedAmount(value.clone(), res),
                )
            }
            _ => Task::none(),
        }
    }

    pub fn on_received_amount(&mut self, value: String, result: Result<Decimal, GatewayError>) {
        if self.phase != Phase::Editing || value != self.dash_to_transfer {
            return;
        }
        match result {
            Ok(amount) => self.dash_to_receive = amount.normalize().to_string(),
            Err(e) => tracing::debug!("Keeping the local receive amount for {}: {}", value, e),
        }
    }

    pub fn on_submit(&mut self, security: &dyn SecurityContext) -> Task<Message> {
        if self.phase != Phase::Editing {
            return Task::none();
        }
        self.transaction.submit(
            TransactionFields {
                ripple_address: self.ripple_address.clone(),
                dash_to_transfer: self.dash_to_transfer.clone(),
                min_amount: self.min_amount,
                csrf_token: security.csrf_token().map(str::to_string),
            },
            TransactionKind::Deposit,
        )
    }

    pub fn on_submitted(&mut self, result: Result<Submission, GatewayError>) {
        if let Some(url) = self.transaction.submitted(result) {
            self.redirect_to(url);
        }
    }

    fn redirect_to(&mut self, url: String) {
        if self.phase == Phase::Editing && !url.is_empty() {
            tracing::info!("Deposit submitted, redirecting to {}", url);
            self.phase = Phase::Redirecting(url);
        }
    }
}

impl State for DepositForm {
    fn view<'a>(&'a self, security: &'a dyn SecurityContext) -> Element<'a, view::Message> {
        match self.render(security) {
            Render::Redirect(url) => view::deposit::redirecting(url),
            Render::Form(form) => {
                view::dashboard(self.transaction.warning(), view::deposit::deposit_form(form))
            }
        }
    }

    fn update(&mut self, security: &dyn SecurityContext, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::FieldEdited(Field::RippleAddress, value)) => {
                self.on_address_input(value);
                Task::none()
            }
            Message::View(view::Message::FieldEdited(Field::DashToTransfer, value)) => {
                self.on_amount_input(value)
            }
            Message::ReceivedAmount(value, res) => {
                self.on_received_amount(value, res);
                Task::none()
            }
            Message::View(view::Message::Submit) => self.on_submit(security),
            Message::Submitted(res) => {
                self.on_submitted(res);
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn redirect(&self) -> Option<&str> {
        match &self.phase {
            Phase::Redirecting(url) => Some(url),
            Phase::Editing => None,
        }
    }
}
