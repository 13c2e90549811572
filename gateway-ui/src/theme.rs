//! Style functions layered over iced's built-in [`iced::Theme`].

pub mod text_input {
    use iced::{
        widget::text_input::{self, Status, Style},
        Border, Theme,
    };

    use crate::color;

    pub fn primary(theme: &Theme, status: Status) -> Style {
        text_input::default(theme, status)
    }

    pub fn invalid(theme: &Theme, status: Status) -> Style {
        outlined(text_input::default(theme, status), color::RED)
    }

    pub fn valid(theme: &Theme, status: Status) -> Style {
        outlined(text_input::default(theme, status), color::GREEN)
    }

    fn outlined(style: Style, color: iced::Color) -> Style {
        Style {
            border: Border {
                color,
                width: 1.0,
                ..style.border
            },
            ..style
        }
    }
}

pub mod container {
    use iced::{
        widget::container::Style,
        Background, Border, Color, Theme,
    };

    use crate::color;

    pub fn warning(_theme: &Theme) -> Style {
        banner(color::ORANGE)
    }

    pub fn panel(theme: &Theme) -> Style {
        let palette = theme.extended_palette();
        Style {
            background: Some(Background::Color(palette.background.weak.color)),
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: palette.background.strong.color,
            },
            ..Style::default()
        }
    }

    fn banner(color: Color) -> Style {
        Style {
            background: Some(Background::Color(color)),
            text_color: Some(color::WHITE),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..Style::default()
        }
    }
}

pub mod button {
    use iced::{
        widget::button::{self, Status, Style},
        Theme,
    };

    use crate::color;

    pub fn primary(theme: &Theme, status: Status) -> Style {
        button::primary(theme, status)
    }

    pub fn link(theme: &Theme, status: Status) -> Style {
        let style = button::text(theme, status);
        Style {
            text_color: match status {
                Status::Hovered | Status::Pressed => color::BLUE,
                _ => style.text_color,
            },
            ..style
        }
    }
}
