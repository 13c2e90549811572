use std::convert::From;

use crate::services::gateway::GatewayError;

#[derive(Debug, Clone)]
pub enum Error {
    Gateway(GatewayError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Gateway(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<GatewayError> for Error {
    fn from(error: GatewayError) -> Self {
        Error::Gateway(error)
    }
}
