//! # matchjson-core — Foundational Types for match-json
//!
//! Defines the document model shared by the matcher and the loader.
//! Every other crate in the workspace depends on `matchjson-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Object-only documents.** A [`Document`] can only be constructed from
//!    a JSON object. Top-level strings, numbers, arrays and `null` are
//!    rejected at construction, so the comparison never has to guess.
//!
//! 2. **Source key order.** `serde_json` is built with `preserve_order`, so
//!    key iteration follows the document text. Mismatch reports inherit
//!    that order.
//!
//! 3. **Coarse type tags.** [`TypeTag`] is a closed enumeration. `null`,
//!    arrays and objects all classify as `object`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `matchjson-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod tag;

pub use document::Document;
pub use error::DocumentError;
pub use tag::TypeTag;
