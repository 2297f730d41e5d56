//! Data URI encoding for resolved resources
//!
//! Reads happen here and only here. A read that fails after resolution
//! succeeded (file removed, permissions changed) is reported as an
//! [`EncodeFailure`] so callers can keep the original reference.

use std::fs;

use base64::Engine;

use super::mime;
use super::types::{EncodeFailure, ResolvedResource};

/// Encode a resolved resource as `data:<mime>;base64,<payload>`
pub fn encode(resolved: &ResolvedResource) -> Result<String, EncodeFailure> {
    encode_with_limit(resolved, None)
}

/// Encode a resolved resource, refusing files larger than `max_bytes`
pub fn encode_with_limit(
    resolved: &ResolvedResource,
    max_bytes: Option<u64>,
) -> Result<String, EncodeFailure> {
    let bytes = read_resource(resolved, max_bytes)?;
    Ok(to_data_uri(mime::infer_path(&resolved.path), &bytes))
}

/// Read the full content of a resolved resource with the size limit applied
pub fn read_resource(
    resolved: &ResolvedResource,
    max_bytes: Option<u64>,
) -> Result<Vec<u8>, EncodeFailure> {
    if let Some(limit) = max_bytes
        && resolved.size > limit
    {
        return Err(EncodeFailure::TooLarge {
            size: resolved.size,
            limit,
        });
    }

    let bytes = fs::read(&resolved.path).map_err(|e| EncodeFailure::Read(e.to_string()))?;

    // The file may have grown since resolution
    if let Some(limit) = max_bytes
        && bytes.len() as u64 > limit
    {
        return Err(EncodeFailure::TooLarge {
            size: bytes.len() as u64,
            limit,
        });
    }

    Ok(bytes)
}

/// Format bytes as a base64 data URI
#[must_use]
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    let encoded_capacity = base64::encoded_len(bytes.len(), true).unwrap_or(0);
    let mut encoded = String::with_capacity(encoded_capacity + 13 + mime.len());

    encoded.push_str("data:");
    encoded.push_str(mime);
    encoded.push_str(";base64,");

    // STANDARD (padded) alphabet for renderer compatibility
    base64::engine::general_purpose::STANDARD.encode_string(bytes, &mut encoded);

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline_resources::resolver::resolve;
    use crate::inline_resources::types::BaseDirectory;
    use tempfile::TempDir;

    #[test]
    fn test_encodes_with_inferred_mime() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.png"), b"\x89PNG").unwrap();
        fs::write(dir.path().join("data.xyz"), b"hello").unwrap();
        let base = BaseDirectory::new(dir.path()).unwrap();

        let png = resolve("a.png", &base).unwrap();
        assert_eq!(encode(&png).unwrap(), "data:image/png;base64,iVBORw==");

        let unknown = resolve("data.xyz", &base).unwrap();
        assert_eq!(
            encode(&unknown).unwrap(),
            "data:application/octet-stream;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_size_limit() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("big.png"), vec![0u8; 64]).unwrap();
        let base = BaseDirectory::new(dir.path()).unwrap();
        let big = resolve("big.png", &base).unwrap();

        assert_eq!(
            encode_with_limit(&big, Some(16)),
            Err(EncodeFailure::TooLarge { size: 64, limit: 16 })
        );
        assert!(encode_with_limit(&big, Some(64)).is_ok());
    }

    #[test]
    fn test_vanished_file_is_a_read_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("gone.png"), b"x").unwrap();
        let base = BaseDirectory::new(dir.path()).unwrap();
        let resolved = resolve("gone.png", &base).unwrap();

        fs::remove_file(dir.path().join("gone.png")).unwrap();

        assert!(matches!(encode(&resolved), Err(EncodeFailure::Read(_))));
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(to_data_uri("font/woff2", b""), "data:font/woff2;base64,");
    }
}
