//! Encoder panel: pick or drop an image, generate its data-URL, copy it.

use iced::widget::{column, container, image, mouse_area, row, scrollable, text};
use iced::{mouse, Border, Element, Length, Theme};

use crate::format::format_file_size;
use crate::state::encoder::EncodeSession;
use crate::ui;
use crate::Message;

/// Build the encoder tab.
pub fn view(session: &EncodeSession) -> Element<'_, Message> {
    let drop_hover = session.drop_hover;

    // The drop zone doubles as the click-to-browse surface.
    let zone_content: Element<'_, Message> = match &session.selected {
        Some(file) => image(file.preview.clone()).height(180).into(),
        None => text("Drag & drop an image here, or click to browse")
            .size(14)
            .into(),
    };

    let drop_zone = mouse_area(
        container(zone_content)
            .width(Length::Fill)
            .height(200)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(move |theme: &Theme| drop_zone_style(theme, drop_hover)),
    )
    .interaction(mouse::Interaction::Pointer)
    .on_press(Message::PickFile);

    let file_info = match &session.selected {
        Some(file) => text(format!("{} ({})", file.name, format_file_size(file.size))).size(14),
        None => text("No file selected").size(14),
    };

    let actions = row![
        ui::action_button(
            "Generate Base64",
            session.can_generate().then_some(Message::GeneratePressed),
        ),
        ui::action_button(
            "Copy to Clipboard",
            session.can_copy().then_some(Message::CopyPressed),
        ),
        ui::action_button("Reset", Some(Message::ResetPressed)),
    ]
    .spacing(8);

    let output: Element<'_, Message> = match &session.artifact {
        Some(artifact) => scrollable(
            text(artifact.data_url.as_str())
                .size(12)
                .font(iced::Font::MONOSPACE)
                .wrapping(text::Wrapping::Glyph),
        )
        .height(140)
        .into(),
        None => container(text("Your Base64 encoded image will appear here...").size(12))
            .height(140)
            .into(),
    };

    let length_label = match &session.artifact {
        Some(artifact) => format!("Length: {} characters", artifact.char_count()),
        None => String::from("Length: 0 characters"),
    };
    let size_label = match &session.selected {
        Some(file) => format!("Size: {}", format_file_size(file.size)),
        None => String::from("Size: 0 KB"),
    };
    let counters = row![text(length_label).size(12), text(size_label).size(12)].spacing(20);

    let mut panel = column![drop_zone, file_info, actions].spacing(12);

    if session.generating {
        panel = panel.push(ui::loading_line("Converting image to Base64..."));
    }
    if session.copied {
        panel = panel.push(text("Copied to clipboard!").style(text::success).size(14));
    }
    if let Some(error) = &session.error {
        panel = panel.push(ui::error_line(error));
    }

    panel.push(output).push(counters).into()
}

/// Bordered zone that lights up while a file hovers over the window.
fn drop_zone_style(theme: &Theme, hover: bool) -> container::Style {
    let palette = theme.extended_palette();
    let accent = if hover {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };

    container::Style {
        background: hover.then(|| palette.primary.weak.color.into()),
        border: Border {
            color: accent,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}
