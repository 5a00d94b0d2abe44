//! # Mismatch Report
//!
//! Structured result of a shape comparison, plus the pass/fail verdict and
//! the text blocks used in failure messages.

use std::fmt;

use matchjson_core::TypeTag;
use serde::Serialize;

/// A key present in both documents whose coarse types differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeMismatch {
    /// The key in question.
    pub key: String,
    /// Type of the reference value.
    pub expected: TypeTag,
    /// Type of the candidate value.
    pub actual: TypeTag,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} expected to be {}, but got {}",
            self.key, self.expected, self.actual
        )
    }
}

/// Categorized differences between a reference and a candidate.
///
/// `absent_keys` and `type_mismatches` are in reference key order;
/// `excess_keys` is in candidate key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchReport {
    /// Reference keys the candidate does not have.
    pub absent_keys: Vec<String>,
    /// Keys whose coarse types differ.
    pub type_mismatches: Vec<TypeMismatch>,
    /// Candidate keys the reference does not have.
    pub excess_keys: Vec<String>,
}

impl MismatchReport {
    /// True iff no category has any entry.
    pub fn is_match(&self) -> bool {
        self.absent_keys.is_empty() && self.type_mismatches.is_empty() && self.excess_keys.is_empty()
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.absent_keys.len() + self.type_mismatches.len() + self.excess_keys.len()
    }

    /// Same as [`is_match`](Self::is_match).
    pub fn is_empty(&self) -> bool {
        self.is_match()
    }

    /// Render one text block per non-empty category.
    ///
    /// Blocks come in the fixed order absent, type mismatches, excess. Each
    /// is a header line followed by one line per entry.
    pub fn format_message(&self) -> Vec<String> {
        let mut messages = Vec::with_capacity(3);

        if !self.absent_keys.is_empty() {
            messages.push(format!("absent keys:\n{}", self.absent_keys.join("\n")));
        }

        if !self.type_mismatches.is_empty() {
            let list: Vec<String> = self
                .type_mismatches
                .iter()
                .map(ToString::to_string)
                .collect();
            messages.push(format!("type mismatches:\n{}", list.join("\n")));
        }

        if !self.excess_keys.is_empty() {
            messages.push(format!("excess keys:\n{}", self.excess_keys.join("\n")));
        }

        messages
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_message().join("\n"))
    }
}
