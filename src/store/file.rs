//! JSON-file [`ContactStore`] implementation.
//!
//! The backing file holds a single JSON array of contacts, pretty-printed
//! with 2-space indentation and a trailing newline. A missing file reads as
//! an empty collection and is not created until the first successful write.
//!
//! Content that is empty, whitespace-only, or parses to something other
//! than an array of contacts is normalized to an empty collection with a
//! warning rather than surfaced as an error. The normalization silently
//! discards malformed data on the next write; see DESIGN.md.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::models::Contact;

use super::ContactStore;

/// Contact store backed by a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContactStore for FileStore {
    async fn read_all(&self) -> Result<Vec<Contact>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read contacts file: {}", self.path.display())
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<Contact>>(&raw) {
            Ok(contacts) => Ok(contacts),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "contacts file is not a JSON array of contacts; treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_all(&self, contacts: &[Contact]) -> Result<()> {
        let mut data = serde_json::to_string_pretty(contacts)
            .context("Failed to serialize contacts")?;
        data.push('\n');
        tokio::fs::write(&self.path, data).await.with_context(|| {
            format!("Failed to write contacts file: {}", self.path.display())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn contact(id: &str, name: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            phone: "555-1".to_string(),
            email: String::new(),
            address: String::new(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("contacts.json"));
        assert_eq!(store.read_all().await.unwrap(), vec![]);
        // The read must not have created the file
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_blank_file_reads_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contacts.json");
        std::fs::write(&path, "  \n\t\n").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.read_all().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_non_array_content_normalized_to_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contacts.json");
        std::fs::write(&path, "\"not-an-array\"").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.read_all().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_unparseable_content_normalized_to_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contacts.json");
        std::fs::write(&path, "{oops").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.read_all().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_write_then_read_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("contacts.json"));
        let contacts = vec![contact("k1", "Ada"), contact("k2", "Grace")];
        store.write_all(&contacts).await.unwrap();
        assert_eq!(store.read_all().await.unwrap(), contacts);
    }

    #[tokio::test]
    async fn test_write_is_pretty_printed_with_trailing_newline() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contacts.json");
        let store = FileStore::new(&path);
        store.write_all(&[contact("k1", "Ada")]).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"id\""), "got: {raw}");
        assert!(raw.ends_with("\n]\n"), "got: {raw}");
    }

    #[tokio::test]
    async fn test_write_empty_collection() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contacts.json");
        let store = FileStore::new(&path);
        store.write_all(&[]).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[tokio::test]
    async fn test_read_error_propagates() {
        let tmp = TempDir::new().unwrap();
        // Pointing at a directory makes read_to_string fail with a non-NotFound error
        let store = FileStore::new(tmp.path());
        assert!(store.read_all().await.is_err());
    }
}
