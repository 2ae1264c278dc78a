//! Typed error variants for the cascade-config crate.

use thiserror::Error;

/// Errors produced while reading settings from JSON.
///
/// Reading always builds a fresh value, so a failure never leaves an
/// existing settings record half-updated.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A profile identifier was not a braced GUID string.
    #[error(
        "Invalid GUID '{value}': expected the form {{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}}"
    )]
    InvalidGuid {
        /// The rejected input.
        value: String,
    },

    /// A color was not a `#rrggbb` string.
    #[error("Invalid color '{value}': expected the form #rrggbb")]
    InvalidColor {
        /// The rejected input.
        value: String,
    },

    /// The JSON root handed to a reader was not an object.
    #[error("Settings JSON must be an object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// A present key held the wrong JSON type, or the text was not valid JSON.
    #[error("Settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
