use std::convert::From;

use gateway_ui::{component::notification, widget::*};
use iced::Length;

use crate::{app::error::Error, services::gateway::GatewayError};

/// Simple warning message displayed to non technical user.
pub struct WarningMessage(String);

impl From<&Error> for WarningMessage {
    fn from(error: &Error) -> WarningMessage {
        match error {
            Error::Gateway(e) => match e {
                GatewayError::Http(Some(code), _) => {
                    WarningMessage(format!("The gateway answered with an error ({})", code))
                }
                GatewayError::Http(None, _) => {
                    WarningMessage("Communication with the gateway failed".to_string())
                }
                GatewayError::InvalidResponse(_) => {
                    WarningMessage("The gateway sent an unexpected answer".to_string())
                }
                GatewayError::InvalidUrl(_) => WarningMessage("Invalid gateway url".to_string()),
                GatewayError::MissingCsrfToken => WarningMessage(
                    "Session with the gateway is not ready, please retry in a moment".to_string(),
                ),
                GatewayError::NotFound => WarningMessage("Page not found".to_string()),
            },
        }
    }
}

impl std::fmt::Display for WarningMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn warn<'a, T: 'a + Clone>(error: Option<&Error>) -> Container<'a, T> {
    if let Some(w) = error {
        let message: WarningMessage = w.into();
        notification::warning(message.to_string(), w.to_string()).width(Length::Fill)
    } else {
        Container::new(Column::new()).width(Length::Fill)
    }
}
