// ABOUTME: Error types for trending page extraction, parser configuration and query building.
// ABOUTME: FieldError and ItemError describe recoverable degradations; the rest reject caller input.

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// A single field could not be extracted.
///
/// Extractors never propagate this: it is logged and the field becomes `None`.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The element or attribute carrying the field is absent.
    #[error("{field}: not found")]
    Missing { field: &'static str },

    /// The text was found but is not a count.
    #[error("{field}: invalid number {text:?}")]
    InvalidNumber {
        field: &'static str,
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// The colour swatch has no colour declaration in its inline style.
    #[error("no colour declaration in style {style:?}")]
    InvalidStyle { style: String },
}

impl FieldError {
    pub fn missing(field: &'static str) -> Self {
        FieldError::Missing { field }
    }

    /// Output key of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Missing { field } | FieldError::InvalidNumber { field, .. } => *field,
            FieldError::InvalidStyle { .. } => "languageColor",
        }
    }
}

/// An item lost the fields that identify it and is dropped from the output.
#[derive(Debug, Error)]
pub enum ItemError {
    /// `position` is the 1-based position of the container on the page.
    #[error("item {position}: {reason}")]
    MissingIdentity { position: usize, reason: String },
}

impl ItemError {
    pub fn missing_identity(position: usize, reason: impl fmt::Display) -> Self {
        ItemError::MissingIdentity {
            position,
            reason: reason.to_string(),
        }
    }
}

/// Invalid parser configuration.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid item selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Invalid trending query parameters.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid date range {0:?} (expected daily, weekly or monthly)")]
    InvalidDateRange(String),

    #[error("invalid programming language {0:?}")]
    InvalidLanguage(String),

    #[error("invalid spoken language code {0:?} (expected two lowercase letters)")]
    InvalidSpokenLanguage(String),

    #[error("invalid site url: {0}")]
    Url(#[from] url::ParseError),
}
