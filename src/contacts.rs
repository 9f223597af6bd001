//! Contact CRUD operations shared by the HTTP server and the CLI.
//!
//! Each operation performs one read (and, for mutations, one write) against
//! a [`ContactStore`]; nothing is cached between calls, so the store owns
//! the canonical collection at all times.
//!
//! Outcomes are reported through [`ContactError`], which the HTTP layer maps
//! to status codes by variant: validation failures never touch storage,
//! lookups that miss report the id after a single read, and storage failures
//! carry the underlying error for server-side logging only.

use std::fmt;

use crate::models::{generate_id, Contact, ContactInput};
use crate::store::ContactStore;

/// Error taxonomy for contact operations.
#[derive(Debug)]
pub enum ContactError {
    /// A required field is missing or empty; no storage access was attempted.
    Validation(String),
    /// No contact with the given id exists; no write was attempted.
    NotFound(String),
    /// The underlying store failed to read or write.
    Storage(anyhow::Error),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::Validation(msg) => write!(f, "{msg}"),
            ContactError::NotFound(id) => write!(f, "Contact not found: {id}"),
            ContactError::Storage(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ContactError {}

impl From<anyhow::Error> for ContactError {
    fn from(e: anyhow::Error) -> Self {
        ContactError::Storage(e)
    }
}

/// Trimmed and validated request fields.
struct ValidInput {
    name: String,
    phone: String,
    email: String,
    address: String,
}

/// Trim all fields and require non-empty `name` and `phone`.
///
/// Whitespace-only values count as empty, so a persisted record can never
/// carry an empty `name` or `phone`.
fn validate(input: &ContactInput) -> Result<ValidInput, ContactError> {
    let name = input.name.as_deref().unwrap_or("").trim().to_string();
    let phone = input.phone.as_deref().unwrap_or("").trim().to_string();

    if name.is_empty() || phone.is_empty() {
        return Err(ContactError::Validation(
            "Name and phone are required.".to_string(),
        ));
    }

    Ok(ValidInput {
        name,
        phone,
        email: input.email.as_deref().unwrap_or("").trim().to_string(),
        address: input.address.as_deref().unwrap_or("").trim().to_string(),
    })
}

/// Return the full stored collection, newest first.
pub async fn list_contacts(store: &dyn ContactStore) -> Result<Vec<Contact>, ContactError> {
    Ok(store.read_all().await?)
}

/// Create a contact with a freshly generated unique id and prepend it to the
/// collection (newest first).
pub async fn create_contact(
    store: &dyn ContactStore,
    input: &ContactInput,
) -> Result<Contact, ContactError> {
    let valid = validate(input)?;

    let mut contacts = store.read_all().await?;
    let contact = Contact {
        id: generate_id(&contacts),
        name: valid.name,
        phone: valid.phone,
        email: valid.email,
        address: valid.address,
    };

    contacts.insert(0, contact.clone());
    store.write_all(&contacts).await?;

    Ok(contact)
}

/// Replace every field except `id` on the contact with the given id.
///
/// Fields absent from the request become empty strings, not the previously
/// stored values; there is no partial update.
pub async fn update_contact(
    store: &dyn ContactStore,
    id: &str,
    input: &ContactInput,
) -> Result<Contact, ContactError> {
    let valid = validate(input)?;

    let mut contacts = store.read_all().await?;
    let slot = contacts
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| ContactError::NotFound(id.to_string()))?;

    slot.name = valid.name;
    slot.phone = valid.phone;
    slot.email = valid.email;
    slot.address = valid.address;
    let updated = slot.clone();

    store.write_all(&contacts).await?;

    Ok(updated)
}

/// Remove the contact with the given id, returning the removed id.
pub async fn delete_contact(store: &dyn ContactStore, id: &str) -> Result<String, ContactError> {
    let mut contacts = store.read_all().await?;
    let index = contacts
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| ContactError::NotFound(id.to_string()))?;

    let removed = contacts.remove(index);
    store.write_all(&contacts).await?;

    Ok(removed.id)
}
