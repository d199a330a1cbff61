//! Encoder-side file handling.
//!
//! Validates a chosen file (image type by extension, 5 MiB cap), builds the
//! preview, and turns the file bytes into a Base64 data-URL on demand.

use std::path::{Path, PathBuf};
use std::time::Duration;

use iced::widget::image::Handle;
use image::ImageFormat;
use tokio::task;

use super::data_url;
use super::error::CodecError;

/// Hard upper bound on accepted files: 5 MiB, inclusive.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Cosmetic pause before a conversion resolves, so small files still give
/// perceptible feedback.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(800);

/// A validated image file chosen by the user.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// Filename only (e.g. "photo.png")
    pub name: String,
    /// MIME type derived from the extension
    pub mime: &'static str,
    /// Size in bytes
    pub size: u64,
    /// Preview built from the file bytes at selection time, independent of
    /// the later Base64 generation step.
    pub preview: Handle,
}

/// The generated Base64 data-URL.
#[derive(Debug, Clone)]
pub struct EncodedArtifact {
    pub data_url: String,
}

impl EncodedArtifact {
    /// Character count shown under the output area.
    pub fn char_count(&self) -> usize {
        self.data_url.len()
    }
}

/// Map a path to its image MIME type by extension, the way a browser derives
/// `file.type`. Unknown or missing extensions are not image files.
pub fn image_mime(path: &Path) -> Result<&'static str, CodecError> {
    let ext = path.extension().ok_or(CodecError::InvalidFileType)?;
    let format = ImageFormat::from_extension(ext).ok_or(CodecError::InvalidFileType)?;
    Ok(format.to_mime_type())
}

/// Validate and load a chosen file into a [`SelectedFile`].
///
/// Type is checked before size so each rejection carries its own message.
/// Either rejection leaves the caller's previous selection untouched.
pub async fn inspect(path: PathBuf) -> Result<SelectedFile, CodecError> {
    let mime = image_mime(&path)?;

    let meta = tokio::fs::metadata(&path)
        .await
        .map_err(|e| CodecError::Io(format!("Failed to read file: {}", e)))?;

    if meta.len() > MAX_FILE_SIZE {
        return Err(CodecError::FileTooLarge);
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| CodecError::Io(format!("Failed to read file: {}", e)))?;

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(SelectedFile {
        name,
        mime,
        size: meta.len(),
        preview: Handle::from_bytes(bytes),
        path,
    })
}

/// Generate the data-URL for a previously selected file.
///
/// Re-reads the file from disk, so the artifact reflects the bytes at
/// generation time.
pub async fn generate(path: PathBuf, mime: &'static str) -> Result<EncodedArtifact, CodecError> {
    tokio::time::sleep(PROCESSING_DELAY).await;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| CodecError::Io(format!("Failed to read file: {}", e)))?;

    // Encoding a few megabytes is cheap but not free; keep it off the UI path.
    let artifact = task::spawn_blocking(move || EncodedArtifact {
        data_url: data_url::encode(mime, &bytes),
    })
    .await
    .map_err(|e| CodecError::Io(format!("Task join error: {}", e)))?;

    println!(
        "🧬 Encoded {} ({} characters)",
        path.display(),
        artifact.char_count()
    );

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    /// A tiny valid PNG, built in memory.
    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .expect("failed to encode fixture");
        buf
    }

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, bytes).expect("failed to write temp file");
        path
    }

    #[test]
    fn mime_is_derived_from_the_extension() {
        assert_eq!(image_mime(Path::new("a/photo.png")).unwrap(), "image/png");
        assert_eq!(image_mime(Path::new("photo.JPG")).unwrap(), "image/jpeg");
        assert_eq!(
            image_mime(Path::new("notes.txt")).unwrap_err(),
            CodecError::InvalidFileType
        );
        assert_eq!(
            image_mime(Path::new("no-extension")).unwrap_err(),
            CodecError::InvalidFileType
        );
    }

    #[tokio::test]
    async fn inspect_accepts_a_valid_image() {
        let bytes = png_fixture(4, 4);
        let path = temp_file("b64studio-inspect-ok.png", &bytes);

        let file = inspect(path.clone()).await.unwrap();
        assert_eq!(file.name, "b64studio-inspect-ok.png");
        assert_eq!(file.mime, "image/png");
        assert_eq!(file.size, bytes.len() as u64);

        let _ = fs::remove_file(path);
    }

    #[tokio::test]
    async fn inspect_rejects_non_image_extensions() {
        // Rejected on extension alone; the path never needs to exist.
        let err = inspect(PathBuf::from("/nonexistent/document.pdf"))
            .await
            .unwrap_err();
        assert_eq!(err, CodecError::InvalidFileType);
    }

    #[tokio::test]
    async fn inspect_enforces_the_size_boundary() {
        let over = temp_file(
            "b64studio-too-large.jpg",
            &vec![0u8; (MAX_FILE_SIZE + 1) as usize],
        );
        let err = inspect(over.clone()).await.unwrap_err();
        assert_eq!(err, CodecError::FileTooLarge);
        let _ = fs::remove_file(over);

        // Exactly 5 MiB is inside the boundary; only type and size are
        // validated at selection time.
        let at_limit = temp_file("b64studio-at-limit.jpg", &vec![0u8; MAX_FILE_SIZE as usize]);
        let file = inspect(at_limit.clone()).await.unwrap();
        assert_eq!(file.size, MAX_FILE_SIZE);
        let _ = fs::remove_file(at_limit);
    }

    #[tokio::test]
    async fn inspect_surfaces_read_failures() {
        let err = inspect(PathBuf::from("/nonexistent/photo.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, CodecError::Io(_)));
    }

    #[tokio::test]
    async fn generate_produces_a_prefixed_data_url() {
        let bytes = png_fixture(2, 2);
        let path = temp_file("b64studio-generate.png", &bytes);

        let artifact = generate(path.clone(), "image/png").await.unwrap();
        assert!(artifact.data_url.starts_with("data:image/png;base64,"));
        assert!(artifact.data_url.contains(";base64,"));
        assert_eq!(artifact.char_count(), artifact.data_url.len());

        let _ = fs::remove_file(path);
    }
}
