//! Application state module
//!
//! This module holds the per-flow session objects:
//! - Encoder session: selected file + generated artifact (encoder.rs)
//! - Decoder session: input text + decoded artifact (decoder.rs)
//!
//! The two sessions share nothing; switching tabs never touches either one.

pub mod decoder;
pub mod encoder;

/// Which panel is visible. Exactly one tab is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Encoder,
    Decoder,
}
