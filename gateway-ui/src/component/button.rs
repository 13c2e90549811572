use iced::{alignment::Horizontal, widget::container, Length};

use super::text::text;
use crate::{theme, widget::*};

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(
        container(text(t))
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .padding(5),
    )
    .style(theme::button::primary)
}

/// A borderless button rendered as a hyperlink.
pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(text(t)).style(theme::button::link)
}
