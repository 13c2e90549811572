pub mod app;
pub mod args;
pub mod convert;
pub mod dir;
pub mod logger;
pub mod services;
pub mod session;
pub mod transaction;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
