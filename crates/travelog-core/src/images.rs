//! Photo attachments as data URIs.
//!
//! Files are read concurrently, one task per file. The combined result is
//! only produced once every read has resolved, and keeps the order in which
//! the files were selected.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, TravelogError};

/// MIME type for an image file, judged by extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "heic" => "image/heic",
        "tif" | "tiff" => "image/tiff",
        _ => return None,
    };
    Some(mime)
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Split a base64 data URI into its MIME type and payload bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| TravelogError::InvalidInput("Not a data URI".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| TravelogError::InvalidInput("Data URI has no payload".to_string()))?;
    let mime = header.strip_suffix(";base64").ok_or_else(|| {
        TravelogError::InvalidInput("Only base64 data URIs are supported".to_string())
    })?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| TravelogError::InvalidInput(format!("Invalid base64 payload: {}", e)))?;
    Ok((mime.to_string(), bytes))
}

/// Read one image file into a data URI.
pub async fn load_image(path: PathBuf) -> Result<String> {
    let mime = mime_for_path(&path).ok_or_else(|| {
        TravelogError::InvalidInput(format!("Not an image file: {}", path.display()))
    })?;
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        TravelogError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(encode_data_uri(mime, &bytes))
}

/// Read several image files concurrently.
///
/// # Errors
///
/// Waits for every read, then returns the first failure in selection order.
pub async fn load_images(paths: &[PathBuf]) -> Result<Vec<String>> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(load_image(path)))
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle
            .await
            .map_err(|e| TravelogError::Other(format!("Image read task failed: {}", e)))
            .and_then(|inner| inner);
        results.push(result);
    }

    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a/b.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("x.webp")), Some("image/webp"));
        assert_eq!(mime_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_for_path(Path::new("README")), None);
    }

    #[test]
    fn test_data_uri_decode() {
        let uri = encode_data_uri("image/png", b"\x89PNG");
        assert!(uri.starts_with("data:image/png;base64,"));

        let (mime, bytes) = decode_data_uri(&uri).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, b"\x89PNG");
        assert!(decode_data_uri("https://example.com/a.png").is_err());
    }

    #[tokio::test]
    async fn test_load_images_keeps_selection_order() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.gif");
        std::fs::write(&first, b"one").unwrap();
        std::fs::write(&second, b"two").unwrap();

        let images = load_images(&[first, second]).await.unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(decode_data_uri(&images[0]).unwrap().1, b"one");
        assert!(images[1].starts_with("data:image/gif;base64,"));
    }

    #[tokio::test]
    async fn test_load_images_fails_on_any_bad_file() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.png");
        std::fs::write(&good, b"ok").unwrap();
        let missing = dir.path().join("missing.png");

        let err = load_images(&[good, missing]).await.unwrap_err();
        assert!(matches!(err, TravelogError::InvalidInput(_)));
    }
}
