//! Error types for the desktop
//!
//! Window manager transitions are total and never fail. These errors only
//! come from the edges: parsing ids and handles coming from JavaScript,
//! validating configuration overrides, and JSON encoding.

/// Errors that can occur at the desktop's input boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// String did not name any known app
    UnknownApp(String),

    /// String did not name any resize handle
    InvalidDirection(String),

    /// A configuration table failed validation
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownApp(id) => write!(f, "unknown app: {}", id),
            Self::InvalidDirection(dir) => write!(f, "invalid resize direction: {}", dir),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
