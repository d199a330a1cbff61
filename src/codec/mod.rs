//! Conversion layer shared by both flows.
//!
//! This module handles:
//! - The error taxonomy (error.rs)
//! - Building and parsing data-URL strings (data_url.rs)
//! - Encoder-side file validation and generation (encode.rs)
//! - Decoder-side validation by actually decoding the image (decode.rs)

pub mod data_url;
pub mod decode;
pub mod encode;
pub mod error;
