//! Storefront error model.

use thiserror::Error;

/// Result type used across the storefront crates.
pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// A single invalid input field, named so the caller can re-prompt the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Storefront-level error.
///
/// Keep this focused on deterministic, recoverable failures. Nothing in the
/// state core is fatal: empty collections are valid states, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// One or more submitted fields failed validation.
    #[error("validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// Runtime configuration is malformed or out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A value could not be parsed (e.g. an unknown sort criterion).
    #[error("parse error: {0}")]
    Parse(String),
}

impl StorefrontError {
    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self::Validation(fields)
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Names of the invalid fields, empty for non-validation errors.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        match self {
            Self::Validation(fields) => fields.iter().map(|f| f.field).collect(),
            _ => Vec::new(),
        }
    }
}
