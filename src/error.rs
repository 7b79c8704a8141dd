use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::types::{Origin, ScalarType};

#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum FlatSourceError {
    /// A scalar was requested at a prefix that is not an exact key.
    ///
    /// `origin` is how the view was reached, when it came from enumeration.
    #[error("No value at '{key}' in {kind} source")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(flatsource::lookup),
            help("the key may exist only as a prefix of deeper keys")
        )
    )]
    Lookup {
        key: String,
        kind: String,
        origin: Option<Origin>,
    },

    /// A value exists but does not parse as the requested scalar type.
    #[error("Cannot parse '{value}' as {target}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(flatsource::format)))]
    Format {
        value: String,
        target: ScalarType,
        #[source]
        source: Option<NumberParseError>,
    },

    #[error("Invalid override '{0}': expected KEY=VALUE")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(flatsource::override_syntax)))]
    InvalidOverride(String),

    #[error("Unsupported value at '{path}': {reason}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(flatsource::unsupported)))]
    UnsupportedValue { path: String, reason: String },
}

impl FlatSourceError {
    pub fn is_lookup(&self) -> bool {
        matches!(self, FlatSourceError::Lookup { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, FlatSourceError::Format { .. })
    }
}

/// The numeric parse failure behind a [`FlatSourceError::Format`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberParseError {
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
}
