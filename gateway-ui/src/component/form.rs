use iced::Length;

use crate::{color, component::text, theme, widget::*};

#[derive(Debug, Clone)]
pub struct Value<T> {
    pub value: T,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            valid: true,
        }
    }
}

/// Returns true if `s` is a partial or complete non-negative decimal amount
/// with at most `decimals` fractional digits. The empty string is accepted so
/// the user can clear the field.
pub fn is_amount_input(s: &str, decimals: u32) -> bool {
    let mut parts = s.splitn(2, '.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();
    if !integer.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match fraction {
        None => true,
        Some(f) => {
            f.chars().all(|c| c.is_ascii_digit()) && f.len() <= decimals as usize
        }
    }
}

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    warning: Option<String>,
    valid: bool,
    checked: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            input: TextInput::new(placeholder, &value.value).on_input(on_change),
            warning: None,
            valid: value.valid,
            checked: false,
        }
    }

    /// Creates a new [`Form`] that has a disabled input.
    pub fn new_disabled(placeholder: &str, value: &Value<String>) -> Self {
        Self {
            input: TextInput::new(placeholder, &value.value),
            warning: None,
            valid: value.valid,
            checked: false,
        }
    }

    /// Creates a new [`Form`] that only lets through non-negative decimal amounts with at most
    /// `decimals` fractional digits. Rejected keystrokes re-emit the current value.
    pub fn new_amount<F>(
        placeholder: &str,
        value: &Value<String>,
        decimals: u32,
        on_change: F,
    ) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        let current = value.value.clone();
        Self {
            input: TextInput::new(placeholder, &value.value).on_input(move |s| {
                if is_amount_input(&s, decimals) {
                    on_change(s)
                } else {
                    log::debug!("Rejected amount input '{}'", s);
                    on_change(current.clone())
                }
            }),
            warning: None,
            valid: value.valid,
            checked: false,
        }
    }

    /// Sets the [`Form`] with a warning message
    pub fn maybe_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }

    /// Marks a valid [`Form`] as checked, drawing it with a success outline.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        let input = if !form.valid {
            form.input.style(theme::text_input::invalid)
        } else if form.checked {
            form.input.style(theme::text_input::valid)
        } else {
            form.input.style(theme::text_input::primary)
        };
        Container::new(
            Column::new()
                .push(input)
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).color(color::RED))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
