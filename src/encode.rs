// SPDX-License-Identifier: MIT

//! Image loading and data-URL encoding for vision input

use base64::{engine::general_purpose, Engine as _};
use std::path::Path;

use crate::Result;

/// Media type used when the extension gives no better answer
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// An image loaded into memory, ready to embed in a request payload
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// MIME type inferred from the file extension
    pub media_type: String,
    /// Base64-encoded file bytes
    pub data: String,
}

impl EncodedImage {
    /// Read a file and encode it for vision input.
    ///
    /// Media type inference never fails: unknown extensions get a generic
    /// binary type. I/O errors reading the file propagate.
    pub fn from_path(path: &Path) -> Result<Self> {
        let media_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(FALLBACK_MEDIA_TYPE)
            .to_string();

        let bytes = std::fs::read(path)?;
        let data = general_purpose::STANDARD.encode(&bytes);

        Ok(Self { media_type, data })
    }

    /// Render as a self-contained data URL
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_png_media_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"\x89PNG\r\n")
            .unwrap();

        let encoded = EncodedImage::from_path(&path).unwrap();
        assert_eq!(encoded.media_type, "image/png");
        assert!(encoded.data_url().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mystery.zzz9");
        std::fs::write(&path, b"bytes").unwrap();

        let encoded = EncodedImage::from_path(&path).unwrap();
        assert_eq!(encoded.media_type, "application/octet-stream");
    }

    #[test]
    fn test_payload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.jpg");
        std::fs::write(&path, b"hello").unwrap();

        let encoded = EncodedImage::from_path(&path).unwrap();
        let decoded = general_purpose::STANDARD.decode(&encoded.data).unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.png");
        assert!(EncodedImage::from_path(&path).is_err());
    }
}
