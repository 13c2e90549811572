/// Source of the anti-forgery token included in every submitted form.
pub trait SecurityContext {
    fn csrf_token(&self) -> Option<&str>;
}

/// Session opened with the gateway at startup.
#[derive(Debug, Clone, Default)]
pub struct Session {
    csrf_token: Option<String>,
}

impl Session {
    pub fn set_csrf_token(&mut self, token: Option<String>) {
        self.csrf_token = token.filter(|t| !t.is_empty());
    }
}

impl SecurityContext for Session {
    fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }
}
