//! Widget builders for the two panels and the shared chrome.

pub mod decoder;
pub mod encoder;

use iced::widget::{button, row, text};
use iced::{Element, Length, Theme};

use crate::codec::error::CodecError;
use crate::state::Tab;
use crate::Message;

/// The two-button tab strip. Exactly one tab renders as active.
pub fn tab_bar(active: Tab) -> Element<'static, Message> {
    row![
        tab_button("Image to Base64", Tab::Encoder, active),
        tab_button("Base64 to Image", Tab::Decoder, active),
    ]
    .spacing(8)
    .into()
}

fn tab_button(label: &'static str, target: Tab, active: Tab) -> Element<'static, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if target == active {
        button::primary
    } else {
        button::secondary
    };

    button(
        text(label)
            .size(14)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .style(style)
    .width(Length::Fill)
    .padding(10)
    .on_press(Message::TabSelected(target))
    .into()
}

/// A standard action button; `None` renders it disabled.
pub fn action_button(label: &'static str, on_press: Option<Message>) -> Element<'static, Message> {
    button(text(label).size(14))
        .padding(10)
        .on_press_maybe(on_press)
        .into()
}

/// Inline error line inside a panel.
pub fn error_line(error: &CodecError) -> Element<'static, Message> {
    text(error.to_string()).style(text::danger).size(14).into()
}

/// Progress line shown while an operation is pending.
pub fn loading_line(label: &'static str) -> Element<'static, Message> {
    text(label).size(14).into()
}
