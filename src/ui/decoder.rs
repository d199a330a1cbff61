//! Decoder panel: paste Base64 text, validate it as an image, save it.

use iced::widget::{column, image, row, text, text_editor};
use iced::Element;

use crate::state::decoder::DecodeSession;
use crate::ui;
use crate::Message;

/// Build the decoder tab.
pub fn view(session: &DecodeSession) -> Element<'_, Message> {
    let input = text_editor(&session.input)
        .placeholder("Paste your Base64 code here...")
        .on_action(Message::DecodeInputEdited)
        .height(160);

    let actions = row![
        ui::action_button(
            "Decode Image",
            session.can_decode().then_some(Message::DecodePressed),
        ),
        ui::action_button("Clear", Some(Message::ClearPressed)),
        ui::action_button(
            "Download Image",
            session.can_download().then_some(Message::DownloadPressed),
        ),
    ]
    .spacing(8);

    let result: Element<'_, Message> = match &session.decoded {
        Some(artifact) => column![
            image(artifact.handle.clone()).height(220),
            text(format!(
                "Decoded image ({} × {})",
                artifact.width, artifact.height
            ))
            .size(14),
        ]
        .spacing(8)
        .into(),
        None => text("No image decoded yet").size(14).into(),
    };

    let mut panel = column![input, actions].spacing(12);

    if session.decoding {
        panel = panel.push(ui::loading_line("Decoding Base64 data..."));
    }
    if let Some(error) = &session.error {
        panel = panel.push(ui::error_line(error));
    }

    panel = panel.push(result);

    if let Some(path) = &session.saved_to {
        panel = panel.push(
            text(format!("Saved to {}", path.display()))
                .style(text::success)
                .size(12),
        );
    }

    panel.into()
}
