//! Storage abstraction for the contact book.
//!
//! The [`ContactStore`] trait is the persistence boundary between the API
//! and durable storage, enabling pluggable backends (JSON file, in-memory
//! for tests).
//!
//! The contract is deliberately small: read the whole collection, write the
//! whole collection. Every mutation re-serializes the full collection
//! (full-replace write) rather than appending or patching.
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod file;
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Contact;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Abstract storage backend for the contact collection.
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`read_all`](ContactStore::read_all) | Load the full stored collection |
/// | [`write_all`](ContactStore::write_all) | Overwrite the stored collection in full |
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Load the full stored collection.
    ///
    /// Absent or empty backing storage yields an empty collection, not an
    /// error. Content that parses but is not an array is normalized to an
    /// empty collection. Genuine I/O failures propagate.
    async fn read_all(&self) -> Result<Vec<Contact>>;

    /// Overwrite the stored collection in full.
    async fn write_all(&self, contacts: &[Contact]) -> Result<()>;
}
