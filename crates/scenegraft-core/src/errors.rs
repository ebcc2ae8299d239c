//! Error types for scenegraft.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that abort a document export.
///
/// Every variant names the source node it originated from, so the single
/// error surfaced to the host is enough to locate the offending layer.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Malformed display name or unrecognized tag keyword.
    #[error("Invalid name '{node}': {reason}")]
    Format { node: String, reason: String },

    /// Structural type not supported, or a supported type used in an unsupported way.
    #[error("Unsupported {node_type} node '{node}': {reason}")]
    UnsupportedNode {
        node: String,
        node_type: String,
        reason: String,
    },

    /// Alignment or constraint value with no mapping in the target vocabulary.
    #[error("Unsupported layout value {value} on node '{node}'")]
    UnsupportedLayoutValue { node: String, value: String },

    /// A tagged container violates a structural precondition.
    #[error("Invalid structure for node '{node}': {reason}")]
    Structural { node: String, reason: String },

    /// JSON error at the input or output boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Create a format error for a node name.
    pub fn format(node: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            node: node.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported-node error.
    pub fn unsupported(
        node: impl Into<String>,
        node_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnsupportedNode {
            node: node.into(),
            node_type: node_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a structural error.
    pub fn structural(node: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Structural {
            node: node.into(),
            reason: reason.into(),
        }
    }

    /// Name of the source node the error originated from, if any.
    pub fn node(&self) -> Option<&str> {
        match self {
            Self::Format { node, .. }
            | Self::UnsupportedNode { node, .. }
            | Self::UnsupportedLayoutValue { node, .. }
            | Self::Structural { node, .. } => Some(node),
            Self::Json(_) => None,
        }
    }
}
