//! Decoder-tab session state.

use std::path::PathBuf;

use iced::widget::text_editor;

use crate::codec::decode::DecodedArtifact;
use crate::codec::error::CodecError;

/// Everything the decoder tab tracks for the current run.
#[derive(Default)]
pub struct DecodeSession {
    /// The Base64 input editor.
    pub input: text_editor::Content,
    /// Last successfully decoded image. A failed attempt leaves this in
    /// place; only clear() or a new success replaces it.
    pub decoded: Option<DecodedArtifact>,
    /// A decode is in flight; the trigger control stays disabled.
    pub decoding: bool,
    /// Where the last download landed, if any.
    pub saved_to: Option<PathBuf>,
    /// Last inline error, replaced or cleared by the next action.
    pub error: Option<CodecError>,
}

impl DecodeSession {
    pub fn can_decode(&self) -> bool {
        !self.decoding
    }

    pub fn can_download(&self) -> bool {
        self.decoded.is_some()
    }

    /// Empty the input and drop the decoded artifact.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    fn dummy_artifact() -> DecodedArtifact {
        DecodedArtifact {
            bytes: vec![1, 2, 3],
            width: 4,
            height: 5,
            handle: Handle::from_bytes(vec![1, 2, 3]),
        }
    }

    #[test]
    fn initial_state_has_nothing_decoded() {
        let session = DecodeSession::default();
        assert!(session.can_decode());
        assert!(!session.can_download());
        assert!(session.error.is_none());
    }

    #[test]
    fn decoding_serializes_attempts() {
        let mut session = DecodeSession::default();
        session.decoding = true;
        assert!(!session.can_decode());
    }

    #[test]
    fn clear_drops_the_artifact_and_input() {
        let mut session = DecodeSession {
            input: text_editor::Content::with_text("data:image/png;base64,QUJD"),
            decoded: Some(dummy_artifact()),
            decoding: false,
            saved_to: Some(PathBuf::from("/tmp/decoded-image.png")),
            error: Some(CodecError::InvalidImageData),
        };

        session.clear();

        assert_eq!(session.input.text().trim(), "");
        assert!(session.decoded.is_none());
        assert!(session.saved_to.is_none());
        assert!(session.error.is_none());
        assert!(!session.can_download());
    }
}
