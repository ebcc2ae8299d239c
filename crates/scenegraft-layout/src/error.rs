//! Error types for layout translation.

use thiserror::Error;

/// Errors during layout translation.
///
/// These carry no node name; the converter attaches the name of the node
/// whose descriptor held the value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Unsupported layout value: {value}")]
    UnsupportedValue { value: String },
}

impl LayoutError {
    pub fn unsupported(value: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            value: value.into(),
        }
    }

    /// The offending enumeration value.
    pub fn value(&self) -> &str {
        match self {
            Self::UnsupportedValue { value } => value,
        }
    }
}
