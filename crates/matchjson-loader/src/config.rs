//! # Loader Configuration
//!
//! Options arrive from the host pipeline as a loader query string, as a
//! JSON/YAML config file, or are set programmatically. Every source
//! produces a [`MatchConfig`] whose fields are all optional, so sources can
//! be layered with [`MatchConfig::merge`] before defaults are applied.
//!
//! Unknown option names are rejected.

use std::path::Path;

use matchjson_shape::MatchOptions;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LoaderError;
use crate::etalon::etalon_file_name;

/// Options recognized by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MatchConfig {
    /// Etalon file name, extension optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etalon: Option<String>,
    /// Compare coarse value types. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_types: Option<bool>,
    /// Report candidate keys missing from the etalon. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excess_keys: Option<bool>,
}

impl MatchConfig {
    /// Configuration naming only the etalon.
    pub fn new(etalon: impl Into<String>) -> Self {
        Self {
            etalon: Some(etalon.into()),
            ..Default::default()
        }
    }

    /// Set `matchTypes`.
    pub fn with_match_types(mut self, enabled: bool) -> Self {
        self.match_types = Some(enabled);
        self
    }

    /// Set `excessKeys`.
    pub fn with_excess_keys(mut self, enabled: bool) -> Self {
        self.excess_keys = Some(enabled);
        self
    }

    /// Build a configuration from a JSON object of options.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::InvalidOptions`] for non-object input, unknown
    /// keys, or wrongly typed values.
    pub fn from_value(value: Value) -> Result<Self, LoaderError> {
        serde_json::from_value(value).map_err(|e| LoaderError::InvalidOptions {
            reason: e.to_string(),
        })
    }

    /// Parse a loader query string.
    ///
    /// The empty string yields an empty configuration. Otherwise the query
    /// must start with `?`. `?{...}` is read as a JSON object. Any other
    /// query is split on `&` and `,` into arguments:
    ///
    /// - `name=value` sets a string, except `true`/`false` which set booleans
    ///   and `null` which leaves the option unset;
    /// - `name` and `+name` set `true`;
    /// - `-name` sets `false`.
    ///
    /// Names and values are percent-decoded. A `+` is kept as is.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::InvalidOptions`] for a missing `?`, malformed
    /// JSON, or options [`MatchConfig`] does not accept.
    pub fn from_query(query: &str) -> Result<Self, LoaderError> {
        if query.is_empty() {
            return Ok(Self::default());
        }

        let Some(body) = query.strip_prefix('?') else {
            return Err(LoaderError::InvalidOptions {
                reason: format!("query should begin with '?', got {query:?}"),
            });
        };

        if body.trim_start().starts_with('{') {
            let value: Value = serde_json::from_str(body).map_err(|e| LoaderError::InvalidOptions {
                reason: format!("invalid JSON query: {e}"),
            })?;
            return Self::from_value(value);
        }

        let mut options = Map::new();
        for arg in body.split(['&', ',']).filter(|arg| !arg.is_empty()) {
            let (name, value) = match arg.split_once('=') {
                Some((name, raw)) => (decode_component(name), query_value(decode_component(raw))),
                None => match arg.strip_prefix('-') {
                    Some(name) => (decode_component(name), Value::Bool(false)),
                    None => (
                        decode_component(arg.strip_prefix('+').unwrap_or(arg)),
                        Value::Bool(true),
                    ),
                },
            };
            options.insert(name, value);
        }

        Self::from_value(Value::Object(options))
    }

    /// Load a configuration file.
    ///
    /// `.yaml`/`.yml` files are read as YAML, anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Read`] if the file cannot be read and
    /// [`LoaderError::InvalidOptions`] if its content is rejected.
    pub fn from_file(path: &Path) -> Result<Self, LoaderError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoaderError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let parsed: Result<Self, String> = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_json::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| LoaderError::InvalidOptions {
            reason: format!("{}: {reason}", path.display()),
        })
    }

    /// Layer `over` on top of `self`; fields set in `over` win.
    pub fn merge(self, over: Self) -> Self {
        Self {
            etalon: over.etalon.or(self.etalon),
            match_types: over.match_types.or(self.match_types),
            excess_keys: over.excess_keys.or(self.excess_keys),
        }
    }

    /// Effective matcher options with defaults applied.
    pub fn options(&self) -> MatchOptions {
        let defaults = MatchOptions::default();
        MatchOptions {
            match_types: self.match_types.unwrap_or(defaults.match_types),
            excess_keys: self.excess_keys.unwrap_or(defaults.excess_keys),
        }
    }

    /// Normalized etalon file name.
    ///
    /// # Errors
    ///
    /// See [`etalon_file_name`].
    pub fn etalon_file_name(&self) -> Result<String, LoaderError> {
        etalon_file_name(self.etalon.as_deref())
    }
}

fn query_value(raw: String) -> Value {
    match raw.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => Value::String(raw),
    }
}

fn decode_component(raw: &str) -> String {
    percent_encoding::percent_decode_str(raw)
        .decode_utf8_lossy()
        .into_owned()
}
