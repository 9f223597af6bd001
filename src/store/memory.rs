//! In-memory [`ContactStore`] implementation for tests.
//!
//! Holds the collection in a `Vec` behind `std::sync::RwLock`. Both
//! operations return immediately-ready futures.

use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Contact;

use super::ContactStore;

/// In-memory store used as a test double for the file-backed store.
pub struct MemoryStore {
    contacts: RwLock<Vec<Contact>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            contacts: RwLock::new(Vec::new()),
        }
    }

    /// Pre-seed the store with an initial collection.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn read_all(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.read().unwrap().clone())
    }

    async fn write_all(&self, contacts: &[Contact]) -> Result<()> {
        *self.contacts.write().unwrap() = contacts.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_replaces_collection() {
        let a = Contact {
            id: "k1".to_string(),
            name: "Ada".to_string(),
            phone: "555-1".to_string(),
            email: String::new(),
            address: String::new(),
        };
        let store = MemoryStore::with_contacts(vec![a.clone()]);
        store.write_all(&[]).await.unwrap();
        assert!(store.read_all().await.unwrap().is_empty());
        store.write_all(std::slice::from_ref(&a)).await.unwrap();
        assert_eq!(store.read_all().await.unwrap(), vec![a]);
    }
}
