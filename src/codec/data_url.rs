//! Building and parsing `data:<mime>;base64,<payload>` strings.

use base64::engine::general_purpose::STANDARD;
use base64::{alphabet, engine, Engine as _};

use super::error::CodecError;

/// MIME type assumed for bare Base64 input that carries no `data:` prefix.
const DEFAULT_MIME: &str = "image/jpeg";

/// Decoder that tolerates missing padding. Pasted Base64 is frequently
/// stripped or re-wrapped by whatever produced it.
const PAYLOAD_DECODER: engine::GeneralPurpose = engine::GeneralPurpose::new(
    &alphabet::STANDARD,
    engine::GeneralPurposeConfig::new()
        .with_decode_padding_mode(engine::DecodePaddingMode::Indifferent),
);

/// Encode raw bytes as a full data-URL.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Resolve user input into a declared MIME type plus decoded payload bytes.
///
/// Input without a `data:` scheme is treated as bare Base64 and given the
/// `image/jpeg` default, matching the most common encoder output. The
/// declared MIME is informational only; the image decoder sniffs the real
/// format from the bytes.
pub fn resolve(input: &str) -> Result<(String, Vec<u8>), CodecError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CodecError::EmptyDecodeInput);
    }

    let (mime, payload) = match trimmed.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .ok_or(CodecError::InvalidImageData)?,
        None => (DEFAULT_MIME, trimmed),
    };

    // Line breaks and indentation inside the payload are noise, not data.
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = PAYLOAD_DECODER
        .decode(compact.as_bytes())
        .map_err(|_| CodecError::InvalidImageData)?;

    Ok((mime.to_string(), bytes))
}
