//! Error taxonomy for both flows.

use thiserror::Error;

/// Everything that can go wrong while encoding or decoding.
///
/// The `Display` strings are the exact messages shown inline in the UI.
/// `Clone` because errors travel back into `update` inside `Task::perform`
/// results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The chosen file's extension does not map to a known image format.
    #[error("Please select an image file (JPG, PNG, GIF, WEBP)")]
    InvalidFileType,

    /// The chosen file is over the 5 MiB boundary.
    #[error("File size exceeds 5MB limit. Please choose a smaller image.")]
    FileTooLarge,

    /// Decode was attempted with blank or whitespace-only input.
    #[error("Please enter Base64 data to decode.")]
    EmptyDecodeInput,

    /// The input could not be materialized as an image.
    #[error("Invalid Base64 image data. Please check your input.")]
    InvalidImageData,

    /// Clipboard unavailable or the write was refused.
    #[error("Failed to copy to clipboard. Please try again.")]
    ClipboardWriteFailed,

    /// File read/write failure surfaced by the OS.
    #[error("{0}")]
    Io(String),
}
