use std::path::PathBuf;
use std::time::Duration;

use iced::widget::{column, container, text, text_editor};
use iced::{window, Element, Event, Length, Subscription, Task, Theme};
use rfd::FileDialog;

mod codec;
mod format;
mod state;
mod ui;

use codec::decode::{self, DecodedArtifact};
use codec::encode::{self, EncodedArtifact, SelectedFile};
use codec::error::CodecError;
use state::decoder::DecodeSession;
use state::encoder::EncodeSession;
use state::Tab;

/// How long the "copied" banner stays up.
const COPY_BANNER_DURATION: Duration = Duration::from_secs(3);

/// Extensions offered by the native picker; anything else is still
/// selectable through drag-and-drop and gets rejected by validation.
const PICKER_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

/// Main application state
struct Base64Studio {
    /// Which panel is visible
    tab: Tab,
    /// Encoder-tab session
    encoder: EncodeSession,
    /// Decoder-tab session
    decoder: DecodeSession,
    /// Created lazily on first copy and kept alive afterwards, so X11
    /// selections outlive the call that set them.
    clipboard: Option<arboard::Clipboard>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked a tab button
    TabSelected(Tab),

    // Encoder
    /// User clicked the drop zone; open the native picker
    PickFile,
    /// A file is hovering over the window
    FileHovered,
    /// The hovering file left the window
    FileHoverLeft,
    /// A file was dropped on the window
    FileDropped(PathBuf),
    /// Background validation of the chosen file completed
    FileInspected(Result<SelectedFile, CodecError>),
    /// User clicked "Generate Base64"
    GeneratePressed,
    /// Background generation completed
    Generated(Result<EncodedArtifact, CodecError>),
    /// User clicked "Copy to Clipboard"
    CopyPressed,
    /// The 3 second "copied" banner timer fired
    CopyBannerExpired,
    /// User clicked "Reset"
    ResetPressed,

    // Decoder
    /// Edit inside the Base64 input editor
    DecodeInputEdited(text_editor::Action),
    /// User clicked "Decode Image"
    DecodePressed,
    /// Background decode completed
    Decoded(Result<DecodedArtifact, CodecError>),
    /// User clicked "Clear"
    ClearPressed,
    /// User clicked "Download Image"
    DownloadPressed,
    /// Background save completed
    Saved(Result<PathBuf, CodecError>),
}

impl Base64Studio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🎨 Base64 Image Studio initialized");

        (
            Base64Studio {
                tab: Tab::default(),
                encoder: EncodeSession::default(),
                decoder: DecodeSession::default(),
                clipboard: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                // Purely presentational; neither session is touched.
                self.tab = tab;
                Task::none()
            }

            Message::PickFile => {
                let file = FileDialog::new()
                    .set_title("Select an Image")
                    .add_filter("Images", PICKER_EXTENSIONS)
                    .pick_file();

                match file {
                    Some(path) => Task::perform(encode::inspect(path), Message::FileInspected),
                    None => Task::none(),
                }
            }

            Message::FileHovered => {
                if self.tab == Tab::Encoder {
                    self.encoder.drop_hover = true;
                }
                Task::none()
            }
            Message::FileHoverLeft => {
                self.encoder.drop_hover = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                self.encoder.drop_hover = false;

                // The drop zone lives on the encoder tab; drops elsewhere
                // are ignored.
                if self.tab == Tab::Encoder {
                    return Task::perform(encode::inspect(path), Message::FileInspected);
                }
                Task::none()
            }

            Message::FileInspected(Ok(file)) => {
                println!(
                    "📂 Selected {} ({})",
                    file.name,
                    format::format_file_size(file.size)
                );
                self.encoder.selected = Some(file);
                self.encoder.error = None;
                Task::none()
            }
            Message::FileInspected(Err(error)) => {
                eprintln!("⚠️  File rejected: {}", error);
                // The previous selection, if any, stays untouched.
                self.encoder.error = Some(error);
                Task::none()
            }

            Message::GeneratePressed => {
                let Some((path, mime)) = self
                    .encoder
                    .selected
                    .as_ref()
                    .map(|file| (file.path.clone(), file.mime))
                else {
                    return Task::none();
                };
                if self.encoder.generating {
                    return Task::none();
                }

                self.encoder.generating = true;
                self.encoder.copied = false;
                self.encoder.error = None;

                Task::perform(encode::generate(path, mime), Message::Generated)
            }
            Message::Generated(Ok(artifact)) => {
                self.encoder.generating = false;
                self.encoder.artifact = Some(artifact);
                Task::none()
            }
            Message::Generated(Err(error)) => {
                eprintln!("⚠️  Generation failed: {}", error);
                self.encoder.generating = false;
                self.encoder.error = Some(error);
                Task::none()
            }

            Message::CopyPressed => {
                let Some(data_url) = self
                    .encoder
                    .artifact
                    .as_ref()
                    .map(|artifact| artifact.data_url.clone())
                else {
                    return Task::none();
                };

                match self.copy_to_clipboard(data_url) {
                    Ok(()) => {
                        self.encoder.copied = true;
                        self.encoder.error = None;
                        Task::perform(
                            async { tokio::time::sleep(COPY_BANNER_DURATION).await },
                            |_| Message::CopyBannerExpired,
                        )
                    }
                    Err(error) => {
                        eprintln!("⚠️  {}", error);
                        self.encoder.error = Some(error);
                        Task::none()
                    }
                }
            }
            Message::CopyBannerExpired => {
                self.encoder.copied = false;
                Task::none()
            }

            Message::ResetPressed => {
                self.encoder.reset();
                Task::none()
            }

            Message::DecodeInputEdited(action) => {
                self.decoder.input.perform(action);
                Task::none()
            }

            Message::DecodePressed => {
                if self.decoder.decoding {
                    return Task::none();
                }

                let input = self.decoder.input.text();
                if input.trim().is_empty() {
                    // No loading indicator for an empty attempt.
                    self.decoder.error = Some(CodecError::EmptyDecodeInput);
                    return Task::none();
                }

                self.decoder.decoding = true;
                self.decoder.error = None;

                Task::perform(decode::decode(input), Message::Decoded)
            }
            Message::Decoded(Ok(artifact)) => {
                self.decoder.decoding = false;
                self.decoder.decoded = Some(artifact);
                self.decoder.error = None;
                Task::none()
            }
            Message::Decoded(Err(error)) => {
                eprintln!("⚠️  Decode failed: {}", error);
                self.decoder.decoding = false;
                // The previously decoded artifact, if any, stays visible.
                self.decoder.error = Some(error);
                Task::none()
            }

            Message::ClearPressed => {
                self.decoder.clear();
                Task::none()
            }

            Message::DownloadPressed => {
                let Some(artifact) = &self.decoder.decoded else {
                    return Task::none();
                };

                let target = FileDialog::new()
                    .set_title("Save Decoded Image")
                    .set_file_name("decoded-image.png")
                    .save_file();

                match target {
                    Some(path) => {
                        Task::perform(decode::save(artifact.bytes.clone(), path), Message::Saved)
                    }
                    None => Task::none(),
                }
            }
            Message::Saved(Ok(path)) => {
                self.decoder.saved_to = Some(path);
                Task::none()
            }
            Message::Saved(Err(error)) => {
                eprintln!("⚠️  {}", error);
                self.decoder.error = Some(error);
                Task::none()
            }
        }
    }

    /// Write text to the system clipboard, creating the handle on first use.
    fn copy_to_clipboard(&mut self, contents: String) -> Result<(), CodecError> {
        if self.clipboard.is_none() {
            self.clipboard = arboard::Clipboard::new().ok();
        }

        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or(CodecError::ClipboardWriteFailed)?;

        clipboard
            .set_text(contents)
            .map_err(|_| CodecError::ClipboardWriteFailed)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let panel = match self.tab {
            Tab::Encoder => ui::encoder::view(&self.encoder),
            Tab::Decoder => ui::decoder::view(&self.decoder),
        };

        let content = column![
            text("Base64 Image Studio").size(32),
            ui::tab_bar(self.tab),
            panel,
        ]
        .spacing(20)
        .padding(30)
        .max_width(760);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Window-level drag-and-drop events feed the encoder's drop zone.
    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Base64 Image Studio",
        Base64Studio::update,
        Base64Studio::view,
    )
    .subscription(Base64Studio::subscription)
    .theme(Base64Studio::theme)
    .centered()
    .run_with(Base64Studio::new)
}
