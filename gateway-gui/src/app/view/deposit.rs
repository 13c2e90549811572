use std::str::FromStr;

use gateway_ui::{
    component::{button, form, text},
    widget::*,
};
use iced::{alignment::Horizontal, Length};

use super::{panel, Message};
use crate::{
    app::state::{FieldMarkup, FormMarkup, InputKind},
    transaction::{Field, FieldValidation},
};

/// Number of fractional digits allowed by an input step such as `0.00000001`.
fn step_decimals(step: &str) -> u32 {
    step.split_once('.')
        .map(|(_, fraction)| fraction.len() as u32)
        .unwrap_or(0)
}

fn field_input<'a>(field: FieldMarkup) -> Option<Element<'a, Message>> {
    let checked = field.validation == FieldValidation::Valid;
    let warning = field.validation.error().map(|e| e.to_string());
    let value = form::Value {
        value: field.value,
        valid: !field.validation.is_invalid(),
    };

    let input: Element<'a, Message> = match field.kind {
        InputKind::Hidden => return None,
        InputKind::Display => form::Form::new_disabled("", &value).padding(10).into(),
        InputKind::Text => {
            let edited = Field::from_str(field.name).ok()?;
            form::Form::new("", &value, move |s| Message::FieldEdited(edited, s))
                .maybe_warning(warning)
                .checked(checked)
                .padding(10)
                .into()
        }
        InputKind::Number { step, min } => {
            let edited = Field::from_str(field.name).ok()?;
            form::Form::new_amount(&min, &value, step_decimals(step), move |s| {
                Message::FieldEdited(edited, s)
            })
            .maybe_warning(warning)
            .checked(checked)
            .padding(10)
            .into()
        }
    };

    Some(
        Column::new()
            .push(text::p1_regular(if field.required {
                format!("{} *", field.label)
            } else {
                field.label
            }))
            .push(input)
            .spacing(5)
            .into(),
    )
}

pub fn deposit_form<'a>(form: FormMarkup) -> Element<'a, Message> {
    let help_link = form.help_link.to_string();
    let submit = button::primary(form.submit_label)
        .width(Length::Fill)
        .on_press_maybe(if form.processing {
            None
        } else {
            Some(Message::Submit)
        });

    let fields = form
        .fields
        .into_iter()
        .filter_map(field_input)
        .fold(Column::new().spacing(20), |col, input| col.push(input));

    panel(
        form.heading,
        Column::new()
            .push(fields)
            .push(submit)
            .push(
                Container::new(button::link("Need help?").on_press(Message::Navigate(help_link)))
                    .align_x(Horizontal::Center)
                    .width(Length::Fill),
            )
            .spacing(20),
    )
    .into()
}

pub fn redirecting<'a>(url: String) -> Element<'a, Message> {
    Container::new(text::p2_regular(format!("Redirecting to {}...", url)))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
