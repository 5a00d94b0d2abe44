//! # Error Types
//!
//! Errors raised while turning raw JSON into a [`Document`](crate::Document).

use thiserror::Error;

use crate::tag::TypeTag;

/// Error constructing a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The text is not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The value parsed, but its top level is not an object.
    #[error("top-level value must be an object, got {found}")]
    NotAnObject {
        /// Coarse type of the rejected value. `object` here means
        /// `null` or an array.
        found: TypeTag,
    },
}
