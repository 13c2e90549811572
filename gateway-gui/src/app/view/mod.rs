mod message;
mod warning;

pub mod deposit;
pub mod howto;
pub mod status;

pub use message::*;
use warning::warn;

use gateway_ui::{theme, widget::*};
use iced::{
    widget::{column, row, scrollable, Space},
    Length,
};

use crate::app::error::Error;

/// Frames a panel content with the warning banner above it.
pub fn dashboard<'a, T: Into<Element<'a, Message>>>(
    warning: Option<&Error>,
    content: T,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = content.into();
    Column::new()
        .push(warn(warning))
        .push(
            Container::new(scrollable(row!(
                Space::with_width(Length::FillPortion(1)),
                column!(Space::with_height(Length::Fixed(30.0)), content)
                    .width(Length::FillPortion(8))
                    .max_width(800),
                Space::with_width(Length::FillPortion(1)),
            )))
            .center_x(Length::Fill)
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Rounded card holding a heading and its content.
pub fn panel<'a, T: Into<Element<'a, Message>>>(
    heading: impl std::fmt::Display,
    content: T,
) -> Container<'a, Message> {
    Container::new(
        Column::new()
            .push(gateway_ui::component::text::h3(heading))
            .push(content)
            .spacing(20),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::container::panel)
}
