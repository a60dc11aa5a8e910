//! Bilingual (English/Amharic) content API for teachings, articles, FAQs and
//! eBooks, with a templated question responder and an admin CRUD surface.
//!
//! The heart of the crate is [`content`]: pure field resolution, filtering,
//! grouping and category derivation that every list view runs through. The
//! rest is plumbing around an embedded SQLite store.

pub mod admin;
pub mod answers;
pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod i18n;
pub mod models;
pub mod routes;
pub mod security;
