//! # Loader Errors
//!
//! Every failure the loader can raise. All of them abort the transform
//! step; none are retried or downgraded. Messages start with
//! [`ERROR_TAG`] so they can be picked out of build logs.

use std::path::PathBuf;

use matchjson_core::DocumentError;
use matchjson_shape::MismatchReport;
use thiserror::Error;

/// Fixed tag at the start of every loader error message.
pub const ERROR_TAG: &str = "[match-json-loader]";

/// Failure category, for callers that branch on the kind of error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or malformed options.
    Config,
    /// The etalon could not be found or read.
    Resource,
    /// One of the documents is not a JSON object.
    Format,
    /// The shapes differ.
    Mismatch,
}

/// Error raised by the loader.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The `etalon` option is missing or empty.
    #[error("[match-json-loader]: etalon is mandatory parameter and should be valid file name")]
    MissingEtalon,

    /// The `etalon` option has an extension other than `.json`.
    #[error("[match-json-loader]: etalon should be a json file name")]
    NotJsonEtalon {
        /// The rejected option value.
        etalon: String,
    },

    /// The options could not be parsed or contain unknown keys.
    #[error("[match-json-loader]: invalid options: {reason}")]
    InvalidOptions {
        /// Reason the options were rejected.
        reason: String,
    },

    /// No etalon exists at the resolved location.
    #[error("[match-json-loader]: can not find etalon in \"{}\"", .path.display())]
    EtalonNotFound {
        /// Resolved etalon location.
        path: PathBuf,
    },

    /// A file exists but could not be read.
    #[error("[match-json-loader]: can not read \"{}\": {source}", .path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A document is not valid JSON or is not an object.
    #[error("[match-json-loader]: invalid JSON in \"{}\": {source}", .path.display())]
    InvalidJson {
        /// Location of the offending document.
        path: PathBuf,
        /// Underlying parse failure.
        source: DocumentError,
    },

    /// The candidate's shape does not match the etalon.
    #[error(
        "[match-json-loader]:\nresource {}\netalon {}\nmatch failed due to:\n{report}",
        .resource.display(),
        .etalon.display()
    )]
    Mismatch {
        /// Document being processed.
        resource: PathBuf,
        /// Etalon it was compared against.
        etalon: PathBuf,
        /// Structured differences.
        report: MismatchReport,
    },
}

impl LoaderError {
    /// The failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingEtalon | Self::NotJsonEtalon { .. } | Self::InvalidOptions { .. } => {
                ErrorKind::Config
            }
            Self::EtalonNotFound { .. } | Self::Read { .. } => ErrorKind::Resource,
            Self::InvalidJson { .. } => ErrorKind::Format,
            Self::Mismatch { .. } => ErrorKind::Mismatch,
        }
    }

    /// The mismatch report, when this is a shape mismatch.
    pub fn report(&self) -> Option<&MismatchReport> {
        match self {
            Self::Mismatch { report, .. } => Some(report),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_message_carries_the_tag() {
        let errors = [
            LoaderError::MissingEtalon,
            LoaderError::NotJsonEtalon {
                etalon: "base.yaml".into(),
            },
            LoaderError::InvalidOptions {
                reason: "unknown field".into(),
            },
            LoaderError::EtalonNotFound {
                path: PathBuf::from("/data/base.json"),
            },
            LoaderError::Mismatch {
                resource: PathBuf::from("/data/en.json"),
                etalon: PathBuf::from("/data/base.json"),
                report: MismatchReport::default(),
            },
        ];
        for err in &errors {
            assert!(err.to_string().starts_with(ERROR_TAG), "untagged: {err}");
        }
    }

    #[test]
    fn kinds_are_categorized() {
        assert_eq!(LoaderError::MissingEtalon.kind(), ErrorKind::Config);
        assert_eq!(
            LoaderError::EtalonNotFound {
                path: PathBuf::from("x.json")
            }
            .kind(),
            ErrorKind::Resource
        );
        let parse = matchjson_core::Document::parse("[]").unwrap_err();
        assert_eq!(
            LoaderError::InvalidJson {
                path: PathBuf::from("x.json"),
                source: parse,
            }
            .kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn not_found_message_quotes_path() {
        let err = LoaderError::EtalonNotFound {
            path: PathBuf::from("/data/base.json"),
        };
        assert_eq!(
            err.to_string(),
            "[match-json-loader]: can not find etalon in \"/data/base.json\""
        );
    }

    #[test]
    fn mismatch_message_embeds_locations_and_blocks() {
        let err = LoaderError::Mismatch {
            resource: PathBuf::from("/data/en.json"),
            etalon: PathBuf::from("/data/base.json"),
            report: MismatchReport {
                absent_keys: vec!["title".into()],
                excess_keys: vec!["extra".into()],
                ..Default::default()
            },
        };
        assert_eq!(
            err.to_string(),
            "[match-json-loader]:\n\
             resource /data/en.json\n\
             etalon /data/base.json\n\
             match failed due to:\n\
             absent keys:\ntitle\n\
             excess keys:\nextra"
        );
        assert_eq!(err.report().map(MismatchReport::len), Some(2));
    }
}
