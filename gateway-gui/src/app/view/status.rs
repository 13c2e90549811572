use gateway_ui::{
    color,
    component::{button, text},
    widget::*,
};
use iced::Length;

use super::{panel, Message};
use crate::{app::route::DEPOSIT_PATH, services::gateway::TransactionStatus};

pub fn status<'a>(status_url: &str, status: Option<&TransactionStatus>) -> Element<'a, Message> {
    let content = match status {
        None => Column::new().push(text::p2_regular(format!("Loading {}...", status_url))),
        Some(status) => Column::new()
            .push(text::p1_regular(format!("Transaction #{}", status.transaction_id)))
            .push(text::h4(&status.state).color(if status.is_final() {
                color::GREEN
            } else {
                color::ORANGE
            }))
            .push_maybe(if status.state_history.is_empty() {
                None
            } else {
                Some(
                    status
                        .state_history
                        .iter()
                        .fold(
                            Column::new().push(text::p1_regular("History:")).spacing(5),
                            |col, change| col.push(text::caption(change)),
                        ),
                )
            })
            .push_maybe(if status.is_final() {
                Some(
                    button::primary("New deposit")
                        .width(Length::Fill)
                        .on_press(Message::Navigate(DEPOSIT_PATH.to_string())),
                )
            } else {
                None
            }),
    };

    panel("Transaction status", content.spacing(15)).into()
}
