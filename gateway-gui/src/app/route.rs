pub const DEPOSIT_PATH: &str = "/deposit/";
pub const DEPOSIT_HOW_TO_PATH: &str = "/deposit/how-to/";

/// Screens of the application, addressed by the same paths as the gateway web pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Deposit,
    HowTo,
    /// Status page of a submitted transaction, the url is opaque.
    Status(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "" | "/" | DEPOSIT_PATH => Route::Deposit,
            DEPOSIT_HOW_TO_PATH => Route::HowTo,
            url => Route::Status(url.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Deposit => DEPOSIT_PATH,
            Route::HowTo => DEPOSIT_HOW_TO_PATH,
            Route::Status(url) => url,
        }
    }
}
