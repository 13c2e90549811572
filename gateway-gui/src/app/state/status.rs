use std::sync::Arc;
use std::time::Duration;

use gateway_ui::widget::*;
use iced::{Subscription, Task};

use crate::{
    app::{error::Error, message::Message, state::State, view},
    services::gateway::{GatewayBackend, TransactionStatus},
    session::SecurityContext,
};

/// Follows a submitted transaction by polling its status url.
pub struct StatusPanel {
    backend: Arc<dyn GatewayBackend + Sync + Send>,
    status_url: String,
    poll_interval: Duration,
    status: Option<TransactionStatus>,
    warning: Option<Error>,
    processing: bool,
}

impl StatusPanel {
    pub fn new(
        backend: Arc<dyn GatewayBackend + Sync + Send>,
        status_url: String,
        poll_interval: Duration,
    ) -> Self {
        Self {
            backend,
            status_url,
            poll_interval,
            status: None,
            warning: None,
            processing: false,
        }
    }

    pub fn status(&self) -> Option<&TransactionStatus> {
        self.status.as_ref()
    }

    /// Polling goes on until the gateway reports a final state.
    pub fn is_polling(&self) -> bool {
        !self.status.as_ref().map(|s| s.is_final()).unwrap_or(false)
    }
}

impl State for StatusPanel {
    fn view<'a>(&'a self, _security: &'a dyn SecurityContext) -> Element<'a, view::Message> {
        view::dashboard(
            self.warning.as_ref(),
            view::status::status(&self.status_url, self.status.as_ref()),
        )
    }

    fn update(&mut self, _security: &dyn SecurityContext, message: Message) -> Task<Message> {
        match message {
            Message::StatusTick => {
                // Skip the tick if the previous request did not come back yet.
                if self.processing || !self.is_polling() {
                    Task::none()
                } else {
                    self.reload()
                }
            }
            Message::Status(res) => {
                self.processing = false;
                match res {
                    Ok(status) => {
                        self.warning = None;
                        if status.is_final() {
                            tracing::info!(
                                "Transaction {} reached a final state: {}",
                                status.transaction_id,
                                status.state
                            );
                        }
                        self.status = Some(status);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to poll {}: {}", self.status_url, e);
                        self.warning = Some(e.into());
                    }
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.is_polling() {
            iced::time::every(self.poll_interval).map(|_| Message::StatusTick)
        } else {
            Subscription::none()
        }
    }

    fn reload(&mut self) -> Task<Message> {
        self.processing = true;
        let backend = self.backend.clone();
        let url = self.status_url.clone();
        Task::perform(
            async move { backend.status(&url).await },
            Message::Status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        services::gateway::{tests::MockBackend, GatewayError},
        session::Session,
    };

    fn status(state: &str) -> TransactionStatus {
        TransactionStatus {
            transaction_id: 42,
            state: state.to_string(),
            state_history: Vec::new(),
        }
    }

    #[test]
    fn test_status_updates() {
        let session = Session::default();
        let mut panel = StatusPanel::new(
            Arc::new(MockBackend::default()),
            "/transaction/42/status/".to_string(),
            Duration::from_secs(10),
        );
        assert!(panel.is_polling());
        assert!(panel.status().is_none());

        let _ = panel.update(&session, Message::Status(Err(GatewayError::NotFound)));
        assert!(panel.warning.is_some());
        assert!(panel.is_polling());

        let _ = panel.update(&session, Message::Status(Ok(status("Initiated"))));
        assert!(panel.warning.is_none());
        assert_eq!(panel.status().unwrap().state, "Initiated");
        assert!(panel.is_polling());

        let _ = panel.update(
            &session,
            Message::Status(Ok(status(
                "Transaction is processed. Hash of a Ripple transaction is CD34",
            ))),
        );
        assert!(!panel.is_polling());
    }

    #[test]
    fn test_status_ticks() {
        let session = Session::default();
        let mut panel = StatusPanel::new(
            Arc::new(MockBackend::default()),
            "/transaction/42/status/".to_string(),
            Duration::from_secs(10),
        );

        let _ = panel.reload();
        assert!(panel.processing);

        // The reply of the first request did not come back yet.
        let _ = panel.update(&session, Message::StatusTick);
        assert!(panel.processing);
        assert!(panel.status().is_none());

        let _ = panel.update(&session, Message::Status(Ok(status("Initiated"))));
        assert!(!panel.processing);

        let _ = panel.update(&session, Message::StatusTick);
        assert!(panel.processing);

        let _ = panel.update(
            &session,
            Message::Status(Ok(status(
                "Transaction failed. Please contact our support team",
            ))),
        );
        assert!(!panel.processing);
        assert!(!panel.is_polling());

        // Final state: ticks no longer send requests.
        let _ = panel.update(&session, Message::StatusTick);
        assert!(!panel.processing);
    }

    #[tokio::test]
    async fn test_polling_with_backend() {
        let session = Session::default();
        let backend = Arc::new(MockBackend::default().with_statuses(vec![
            Ok(status("Initiated")),
            Err(GatewayError::Http(None, "connection reset".to_string())),
            Ok(status("Transaction is processed. Hash of a Ripple transaction is CD34")),
        ]));
        let mut panel = StatusPanel::new(
            backend.clone(),
            "/transaction/42/status/".to_string(),
            Duration::from_secs(10),
        );

        for _ in 0..3 {
            assert!(panel.is_polling());
            let _ = panel.update(&session, Message::StatusTick);
            assert!(panel.processing);
            let res = backend.status("/transaction/42/status/").await;
            let _ = panel.update(&session, Message::Status(res));
        }

        assert!(!panel.is_polling());
        assert!(panel.warning.is_none());
        assert_eq!(
            panel.status().unwrap().state,
            "Transaction is processed. Hash of a Ripple transaction is CD34"
        );
    }
}
