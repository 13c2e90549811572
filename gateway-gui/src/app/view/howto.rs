use gateway_ui::{
    component::{button, text},
    widget::*,
};
use iced::Length;

use super::{panel, Message};
use crate::{app::route::DEPOSIT_PATH, services::gateway::Page};

pub fn how_to<'a>(page: Option<&Page>) -> Element<'a, Message> {
    let back = button::primary("Back")
        .width(Length::Fixed(150.0))
        .on_press(Message::Navigate(DEPOSIT_PATH.to_string()));
    match page {
        Some(page) => panel(
            &page.title,
            Column::new()
                .push(text::p1_regular(&page.description))
                .push(back)
                .spacing(20),
        ),
        None => panel(
            "Need help?",
            Column::new()
                .push(text::p2_regular("Loading..."))
                .push(back)
                .spacing(20),
        ),
    }
    .into()
}
