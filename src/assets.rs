//! Static asset table
//!
//! Maps logical asset names to files under the configured assets
//! directory. The table is resolved once at startup; file contents are
//! read from disk on every matching request so edits show up without a
//! restart.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::http::mime;

/// A single asset entry: resolved path plus its content type.
#[derive(Debug, Clone)]
pub struct Asset {
    pub path: PathBuf,
    pub content_type: &'static str,
}

impl Asset {
    fn new(assets_dir: &Path, file_name: &str) -> Self {
        let path = assets_dir.join(file_name);
        let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
        Self { path, content_type }
    }

    /// Read the asset from disk. Opens, reads and closes the file in one
    /// scoped call.
    pub async fn read(&self) -> std::io::Result<Vec<u8>> {
        fs::read(&self.path).await
    }
}

/// Fixed set of assets the agent serves.
#[derive(Debug, Clone)]
pub struct AssetTable {
    pub favicon: Asset,
    pub logo: Asset,
    pub page: Asset,
}

impl AssetTable {
    pub fn new(assets_dir: &str) -> Self {
        let dir = Path::new(assets_dir);
        Self {
            favicon: Asset::new(dir, "favicon.ico"),
            logo: Asset::new(dir, "logo.png"),
            page: Asset::new(dir, "page.html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_follow_extensions() {
        let table = AssetTable::new("assets");
        assert_eq!(table.favicon.content_type, "image/x-icon");
        assert_eq!(table.logo.content_type, "image/png");
        assert_eq!(table.page.content_type, "text/html; charset=utf-8");
    }

    #[test]
    fn test_paths_are_rooted_in_assets_dir() {
        let table = AssetTable::new("public");
        assert_eq!(table.logo.path, Path::new("public").join("logo.png"));
    }

    #[tokio::test]
    async fn test_read_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let table = AssetTable::new(dir.path().to_str().unwrap());
        assert!(table.favicon.read().await.is_err());
    }

    #[tokio::test]
    async fn test_read_returns_file_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), b"<html></html>").unwrap();
        let table = AssetTable::new(dir.path().to_str().unwrap());
        assert_eq!(table.page.read().await.unwrap(), b"<html></html>");
    }
}
