use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::filter;
use url::Url;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Url of the gateway server, for example "https://gateway.example.com/".
    pub gateway_url: String,
    /// Minimum amount of DASH accepted by the deposit form.
    #[serde(default)]
    pub min_amount: Decimal,
    /// Percentage of the deposited amount kept by the gateway.
    #[serde(default)]
    pub deposit_fee_percent: Decimal,
    /// Ask the gateway for the receive amount instead of relying on the local fee only.
    #[serde(default = "default_receive_amount_from_gateway")]
    pub receive_amount_from_gateway: bool,
    /// Seconds between two refreshes of a transaction status page.
    #[serde(default = "default_status_poll_interval_secs")]
    pub status_poll_interval_secs: u64,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use debug log level if true.
    pub debug: Option<bool>,
}

fn default_status_poll_interval_secs() -> u64 {
    10
}

fn default_receive_amount_from_gateway() -> bool {
    true
}

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

impl Config {
    pub fn new(gateway_url: String) -> Self {
        Self {
            gateway_url,
            min_amount: Decimal::ZERO,
            deposit_fee_percent: Decimal::ZERO,
            receive_amount_from_gateway: default_receive_amount_from_gateway(),
            status_poll_interval_secs: default_status_poll_interval_secs(),
            log_level: None,
            debug: None,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        config.check()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing gui configuration file");
        Ok(())
    }

    fn check(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        self.gateway_url()?;
        if self.min_amount.is_sign_negative() {
            return Err(ConfigError::InvalidField(
                "min_amount",
                "Must not be negative".to_string(),
            ));
        }
        if self.deposit_fee_percent.is_sign_negative()
            || self.deposit_fee_percent > Decimal::ONE_HUNDRED
        {
            return Err(ConfigError::InvalidField(
                "deposit_fee_percent",
                "Must be between 0 and 100".to_string(),
            ));
        }
        if self.status_poll_interval_secs == 0 {
            return Err(ConfigError::InvalidField(
                "status_poll_interval_secs",
                "Must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn gateway_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.gateway_url)
            .map_err(|e| ConfigError::InvalidField("gateway_url", e.to_string()))
    }

    pub fn status_poll_interval(&self) -> Duration {
        Duration::from_secs(self.status_poll_interval_secs)
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
