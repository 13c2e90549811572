use iced::Length;

use super::text;
use crate::{theme, widget::*};

/// Banner with a short message for the user and the technical cause below it.
pub fn warning<'a, T: 'a>(message: String, error: String) -> Container<'a, T> {
    Container::new(
        Column::new()
            .push(text::p1_regular(message))
            .push_maybe(if error.is_empty() {
                None
            } else {
                Some(text::caption(error))
            })
            .spacing(5),
    )
    .padding(15)
    .width(Length::Fill)
    .style(theme::container::warning)
}
