//! # Contact Book
//!
//! A small contact-management service: a REST API that persists contacts to
//! a flat JSON file, plus a companion CLI over the same store.
//!
//! ```text
//! ┌──────────┐      ┌───────────────┐      ┌───────────────┐
//! │ Browser  │─────▶│  HTTP (axum)  │─────▶│  ContactStore  │
//! │ UI / CLI │      │ /api/contacts │      │ contacts.json  │
//! └──────────┘      └───────────────┘      └───────────────┘
//! ```
//!
//! Every request re-reads the collection from the store and every mutation
//! rewrites it in full; the store owns the canonical collection at all
//! times.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Contact record and request types |
//! | [`store`] | Storage trait, JSON-file and in-memory backends |
//! | [`contacts`] | CRUD operations and error taxonomy |
//! | [`server`] | HTTP server |

pub mod config;
pub mod contacts;
pub mod models;
pub mod server;
pub mod store;
