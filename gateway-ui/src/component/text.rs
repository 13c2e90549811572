use iced::advanced::text::Shaping;
use std::fmt::Display;

use crate::{color, widget::Text};

pub const H3_SIZE: u16 = 24;
pub const H4_SIZE: u16 = 20;
pub const P1_SIZE: u16 = 16;
pub const P2_SIZE: u16 = 14;
pub const CAPTION_SIZE: u16 = 12;

pub fn h3<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .size(H3_SIZE)
}

pub fn h4<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .size(H4_SIZE)
}

pub fn p1_regular<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .size(P1_SIZE)
}

pub fn p2_regular<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .size(P2_SIZE)
        .color(color::GREY_2)
}

pub fn caption<'a>(content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .size(CAPTION_SIZE)
}

pub fn text<'a>(content: impl Display) -> Text<'a> {
    p1_regular(content)
}
