//! Shared fixtures for the docpack test suite

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use docpack::BaseDirectory;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A converter-style output directory holding resource files
pub struct ResourceDir {
    dir: TempDir,
    base: BaseDirectory,
}

#[allow(dead_code)]
impl ResourceDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let base = BaseDirectory::new(dir.path()).expect("temp dir is a directory");
        Self { dir, base }
    }

    /// Write `bytes` to `relative`, creating parent directories
    pub fn write(&self, relative: &str, bytes: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create resource subdirectory");
        }
        fs::write(&path, bytes).expect("write resource file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn base(&self) -> &BaseDirectory {
        &self.base
    }
}

/// Every `data:<mime>;base64,<payload>` in `html`, decoded
#[allow(dead_code)]
pub fn decode_data_uris(html: &str) -> Vec<(String, Vec<u8>)> {
    let re = Regex::new(r"data:([a-z0-9.+-]+/[a-z0-9.+-]+);base64,([A-Za-z0-9+/=]*)")
        .expect("valid regex");

    re.captures_iter(html)
        .map(|caps| {
            let bytes = STANDARD
                .decode(&caps[2])
                .expect("embedded payload is valid base64");
            (caps[1].to_string(), bytes)
        })
        .collect()
}

/// Ten bytes of a PNG-like payload
#[allow(dead_code)]
pub const IMG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x01";

/// A woff2-like payload
#[allow(dead_code)]
pub const FONT_BYTES: &[u8] = b"wOF2\x00\x01\x00\x00fontdata";
