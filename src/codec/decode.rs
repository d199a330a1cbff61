//! Decoder-side validation: Base64 text to a verified in-memory image.

use std::path::PathBuf;

use iced::widget::image::Handle;
use tokio::task;

use super::data_url;
use super::encode::PROCESSING_DELAY;
use super::error::CodecError;

/// A successfully decoded image: the original payload bytes plus the
/// dimensions sniffed while validating them.
#[derive(Debug, Clone)]
pub struct DecodedArtifact {
    /// Raw payload bytes, written verbatim on download.
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

/// Decode and validate user input.
pub async fn decode(input: String) -> Result<DecodedArtifact, CodecError> {
    tokio::time::sleep(PROCESSING_DELAY).await;

    task::spawn_blocking(move || decode_blocking(&input))
        .await
        .map_err(|e| CodecError::Io(format!("Task join error: {}", e)))?
}

/// Blocking implementation: payload extraction, then validation by decoding.
///
/// The declared MIME from a data-URL prefix is ignored here; the image
/// decoder sniffs the actual format from the payload bytes, so a PNG pasted
/// without a prefix still decodes despite the `image/jpeg` default.
pub fn decode_blocking(input: &str) -> Result<DecodedArtifact, CodecError> {
    let (_mime, bytes) = data_url::resolve(input)?;

    let img = image::load_from_memory(&bytes).map_err(|_| CodecError::InvalidImageData)?;

    let artifact = DecodedArtifact {
        width: img.width(),
        height: img.height(),
        handle: Handle::from_bytes(bytes.clone()),
        bytes,
    };

    println!(
        "🖼️  Decoded image ({} × {})",
        artifact.width, artifact.height
    );

    Ok(artifact)
}

/// Write the artifact's bytes to the chosen location, unconverted.
pub async fn save(bytes: Vec<u8>, path: PathBuf) -> Result<PathBuf, CodecError> {
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| CodecError::Io(format!("Failed to save image: {}", e)))?;

    println!("💾 Saved decoded image to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use image::ImageFormat;
    use std::io::Cursor;

    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 100, 50, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .expect("failed to encode fixture");
        buf
    }

    #[test]
    fn bare_base64_decodes_with_sniffed_dimensions() {
        // No data: prefix; the jpeg default applies but the sniffer still
        // recognizes the PNG bytes.
        let input = STANDARD.encode(png_fixture(3, 5));

        let artifact = decode_blocking(&input).unwrap();
        assert_eq!((artifact.width, artifact.height), (3, 5));
    }

    #[test]
    fn full_data_url_round_trips_dimensions() {
        let bytes = png_fixture(7, 2);
        let url = data_url::encode("image/png", &bytes);

        let artifact = decode_blocking(&url).unwrap();
        assert_eq!((artifact.width, artifact.height), (7, 2));
        assert_eq!(artifact.bytes, bytes);
    }

    #[test]
    fn garbage_input_is_invalid_image_data() {
        // Valid Base64, but the payload is not an image.
        let input = STANDARD.encode(b"definitely not pixels");
        assert_eq!(
            decode_blocking(&input).unwrap_err(),
            CodecError::InvalidImageData
        );

        // Not even valid Base64.
        assert_eq!(
            decode_blocking("%%%%").unwrap_err(),
            CodecError::InvalidImageData
        );
    }

    #[test]
    fn empty_input_is_reported_before_decoding() {
        assert_eq!(
            decode_blocking("   ").unwrap_err(),
            CodecError::EmptyDecodeInput
        );
    }

    #[tokio::test]
    async fn generated_artifact_decodes_back_to_the_same_dimensions() {
        let bytes = png_fixture(9, 4);
        let path = std::env::temp_dir().join("b64studio-roundtrip.png");
        std::fs::write(&path, &bytes).unwrap();

        let artifact = crate::codec::encode::generate(path.clone(), "image/png")
            .await
            .unwrap();
        assert!(artifact.data_url.starts_with("data:"));
        assert!(artifact.data_url.contains(";base64,"));

        let decoded = decode_blocking(&artifact.data_url).unwrap();
        assert_eq!((decoded.width, decoded.height), (9, 4));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn async_decode_matches_the_blocking_path() {
        let input = STANDARD.encode(png_fixture(2, 2));
        let artifact = decode(input).await.unwrap();
        assert_eq!((artifact.width, artifact.height), (2, 2));
    }

    #[tokio::test]
    async fn save_writes_bytes_verbatim() {
        let bytes = png_fixture(2, 3);
        let path = std::env::temp_dir().join("b64studio-saved.png");

        let written = save(bytes.clone(), path.clone()).await.unwrap();
        assert_eq!(written, path);
        assert_eq!(std::fs::read(&path).unwrap(), bytes);

        let _ = std::fs::remove_file(path);
    }
}
