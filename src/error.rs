//! Error types for schema import, field building and API drafts.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while inferring a schema from a JSON sample.
///
/// None of these leave a partially built schema behind.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("provide JSON input")]
    EmptyInput,

    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("sample root must be an object, got {actual}")]
    NotAnObject { actual: String },
}

impl ImportError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors while reading a sample.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read standard input: {source}")]
    StdinError {
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        3
    }
}

/// Errors while building a field from manual input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field name is empty")]
    EmptyName,

    #[error("unknown field type \"{value}\": expected string, integer, number, boolean, array, or object")]
    UnknownKind { value: String },

    #[error("invalid {attribute} \"{value}\": expected a non-negative integer")]
    InvalidBound { attribute: String, value: String },

    #[error("{attribute} is not allowed on {kind} fields")]
    AttributeNotAllowed { attribute: String, kind: String },

    #[error("{target} schema is not an object")]
    NotAnObject { target: String },
}

impl FieldError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors while adding endpoints to an API draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("endpoint path is empty")]
    EmptyPath,

    #[error("unknown HTTP method \"{value}\": expected GET, POST, PUT, DELETE, or PATCH")]
    UnknownMethod { value: String },
}

impl EndpointError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors in an API draft's own fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("unknown {field} \"{value}\"")]
    UnknownValue { field: &'static str, value: String },
}

/// Errors from the storage boundary.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("no API with id {id}")]
    NotFound { id: u64 },

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_message() {
        assert_eq!(ImportError::EmptyInput.to_string(), "provide JSON input");
    }

    #[test]
    fn invalid_json_carries_decoder_message() {
        let source = serde_json::from_str::<serde_json::Value>("{bad json").unwrap_err();
        let decoder_message = source.to_string();
        let err = ImportError::InvalidJson { source };
        assert!(err.to_string().starts_with("invalid JSON: "));
        assert!(err.to_string().contains(&decoder_message));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(ImportError::EmptyInput.exit_code(), 2);
        let err = LoadError::FileNotFound {
            path: PathBuf::from("sample.json"),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(FieldError::EmptyName.exit_code(), 2);
        assert_eq!(EndpointError::EmptyPath.exit_code(), 2);
    }

    #[test]
    fn attribute_not_allowed_display() {
        let err = FieldError::AttributeNotAllowed {
            attribute: "maxLength".into(),
            kind: "integer".into(),
        };
        assert_eq!(err.to_string(), "maxLength is not allowed on integer fields");
    }

    #[test]
    fn repository_wraps_catalog_error() {
        let err: RepositoryError = CatalogError::MissingField { field: "name" }.into();
        assert_eq!(err.to_string(), "missing required field: name");
    }
}
