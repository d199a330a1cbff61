//! Encoder-tab session state.

use crate::codec::encode::{EncodedArtifact, SelectedFile};
use crate::codec::error::CodecError;

/// Everything the encoder tab tracks for the current run.
///
/// One instance lives on the application struct; nothing here is persisted.
#[derive(Debug, Default)]
pub struct EncodeSession {
    /// The validated file, if any.
    pub selected: Option<SelectedFile>,
    /// The generated data-URL. Created only by the explicit generate action,
    /// never implicitly on selection.
    pub artifact: Option<EncodedArtifact>,
    /// A generation is in flight; the trigger control stays disabled.
    pub generating: bool,
    /// The transient "copied" banner is showing.
    pub copied: bool,
    /// A file is hovering over the window; highlight the drop zone.
    pub drop_hover: bool,
    /// Last inline error, replaced or cleared by the next action.
    pub error: Option<CodecError>,
}

impl EncodeSession {
    pub fn can_generate(&self) -> bool {
        self.selected.is_some() && !self.generating
    }

    pub fn can_copy(&self) -> bool {
        self.artifact.is_some()
    }

    /// Back to the exact initial state: nothing selected, nothing generated,
    /// all indicators hidden.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
