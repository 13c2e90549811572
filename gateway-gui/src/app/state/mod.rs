mod deposit;
mod howto;
mod status;

use iced::{Subscription, Task};
use gateway_ui::widget::*;

use super::{message::Message, view};
use crate::session::SecurityContext;

pub use deposit::{DepositForm, FieldMarkup, FormMarkup, InputKind, Phase, Render};
pub use howto::HowToPanel;
pub use status::StatusPanel;

pub trait State {
    fn view<'a>(&'a self, security: &'a dyn SecurityContext) -> Element<'a, view::Message>;
    fn update(&mut self, _security: &dyn SecurityContext, _message: Message) -> Task<Message> {
        Task::none()
    }
    fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }
    /// Loads whatever the panel needs from the gateway when it is shown.
    fn reload(&mut self) -> Task<Message> {
        Task::none()
    }
    /// Path the application must navigate to instead of showing this panel.
    fn redirect(&self) -> Option<&str> {
        None
    }
}
