//! Core data types for the contact book.
//!
//! A [`Contact`] is the persisted record; a [`ContactInput`] is the shape of
//! an incoming create/update request before trimming and validation.
//! Identifiers are the creation time in Unix milliseconds rendered in
//! base-36, bumped forward until unique within the stored collection.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A persisted contact record.
///
/// `name` and `phone` are never empty for a stored record; `email` and
/// `address` default to the empty string. All string fields are stored
/// trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

/// Request body for create and update operations.
///
/// All fields are optional at the wire level; validation of `name` and
/// `phone` happens in [`crate::contacts`]. Absent `email`/`address` default
/// to the empty string, never to a previously stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Generate a fresh id that is unique within `existing`.
///
/// Starts from the current time and bumps by one millisecond on collision,
/// so two contacts created within the same millisecond still get distinct
/// ids.
pub fn generate_id(existing: &[Contact]) -> String {
    generate_id_from(Utc::now().timestamp_millis().max(0) as u64, existing)
}

fn generate_id_from(mut millis: u64, existing: &[Contact]) -> String {
    loop {
        let id = to_base36(millis);
        if !existing.iter().any(|c| c.id == id) {
            return id;
        }
        millis += 1;
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: "Ada".to_string(),
            phone: "555-1".to_string(),
            email: String::new(),
            address: String::new(),
        }
    }

    #[test]
    fn test_base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(9), "9");
        assert_eq!(to_base36(10), "a");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36), "100");
    }

    #[test]
    fn test_generate_id_no_collision() {
        let existing = vec![contact("zzzz")];
        assert_eq!(generate_id_from(1000, &existing), to_base36(1000));
    }

    #[test]
    fn test_generate_id_bumps_past_collisions() {
        let existing = vec![contact(&to_base36(1000)), contact(&to_base36(1001))];
        assert_eq!(generate_id_from(1000, &existing), to_base36(1002));
    }

    #[test]
    fn test_contact_deserialize_defaults_optional_fields() {
        let c: Contact =
            serde_json::from_str(r#"{"id":"k1","name":"Ada","phone":"555-1"}"#).unwrap();
        assert_eq!(c.email, "");
        assert_eq!(c.address, "");
    }
}
