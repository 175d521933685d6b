//! Hand-rolled parsing for the legacy SQL seed file.
//!
//! The legacy catalog ships as a plain-text dump of `INSERT ... VALUES (...) ON CONFLICT`
//! statements. No SQL library is used: [`tokenizer`] splits a single value tuple with a
//! character-level scan, and [`normalizer`] maps the positional fields into a
//! [`crate::types::CatalogRecord`] with tolerant defaults.

pub mod normalizer;
pub mod tokenizer;
