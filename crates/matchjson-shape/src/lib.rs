//! # matchjson-shape — Shape Comparison
//!
//! Compares the top-level shape of a candidate document against a
//! reference ("etalon") document.
//!
//! ## Matching (`matcher`)
//!
//! [`compare`] walks the reference keys in order, recording keys the
//! candidate lacks and keys whose coarse type differs, then optionally walks
//! the candidate keys to record keys the reference lacks. It never stops at
//! the first mismatch.
//!
//! ## Reporting (`report`)
//!
//! [`MismatchReport`] holds the three categories, gives the verdict via
//! [`MismatchReport::is_match`], and renders human-readable blocks via
//! [`MismatchReport::format_message`].
//!
//! ## Crate Policy
//!
//! - Depends only on `matchjson-core` internally.
//! - Comparison is one level deep. Nested values are compared by coarse
//!   type only; array elements are never inspected.

pub mod matcher;
pub mod report;

pub use matcher::{compare, MatchOptions};
pub use report::{MismatchReport, TypeMismatch};
