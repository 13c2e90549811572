use std::sync::Arc;

use gateway_ui::widget::*;
use iced::Task;

use crate::{
    app::{error::Error, message::Message, state::State, view},
    services::gateway::{GatewayBackend, Page},
    session::SecurityContext,
};

/// Slug of the gateway page explaining deposits.
pub const HOW_TO_SLUG: &str = "deposit-how-to";

pub struct HowToPanel {
    backend: Arc<dyn GatewayBackend + Sync + Send>,
    page: Option<Page>,
    warning: Option<Error>,
}

impl HowToPanel {
    pub fn new(backend: Arc<dyn GatewayBackend + Sync + Send>) -> Self {
        Self {
            backend,
            page: None,
            warning: None,
        }
    }
}

impl State for HowToPanel {
    fn view<'a>(&'a self, _security: &'a dyn SecurityContext) -> Element<'a, view::Message> {
        view::dashboard(self.warning.as_ref(), view::howto::how_to(self.page.as_ref()))
    }

    fn update(&mut self, _security: &dyn SecurityContext, message: Message) -> Task<Message> {
        if let Message::Page(res) = message {
            match res {
                Ok(page) => {
                    self.warning = None;
                    self.page = Some(page);
                }
                Err(e) => {
                    tracing::warn!("Failed to load page '{}': {}", HOW_TO_SLUG, e);
                    self.warning = Some(e.into());
                }
            }
        }
        Task::none()
    }

    fn reload(&mut self) -> Task<Message> {
        let backend = self.backend.clone();
        Task::perform(async move { backend.page(HOW_TO_SLUG).await }, Message::Page)
    }
}
