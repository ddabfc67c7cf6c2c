//! Error types for the Ladle client.

use thiserror::Error;

/// A shared error type for the entire Ladle client.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. The remote variants mirror
/// the backend's status-code surface one-to-one, so callers can branch on
/// exactly one variant per failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LadleError {
    /// A required input was empty or otherwise rejected before any request
    #[error("{0}")]
    Validation(String),

    /// Name lookup against the local collection found no match
    #[error("No {entity_type} named '{name}'")]
    NotFound {
        entity_type: &'static str,
        name: String,
    },

    /// Backend answered 401
    #[error("Unauthorized")]
    Unauthorized,

    /// Backend answered 403
    #[error("Forbidden")]
    Forbidden,

    /// Backend answered 409
    #[error("Conflict")]
    Conflict,

    /// Backend answered 404
    #[error("Not found on server")]
    RemoteNotFound,

    /// Backend answered with any other non-2xx status
    #[error("Server returned status {status}")]
    RemoteFailure { status: u16 },

    /// The transport itself failed (DNS, connection refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LadleError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a local NotFound error
    pub fn not_found(entity_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            name: name.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a local NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an Unauthorized error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this error came back from the backend rather than being
    /// raised locally.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized
                | Self::Forbidden
                | Self::Conflict
                | Self::RemoteNotFound
                | Self::RemoteFailure { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for LadleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for LadleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for LadleError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for LadleError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Conversion from anyhow::Error (storage plumbing surfaces through anyhow)
impl From<anyhow::Error> for LadleError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, LadleError>`.
pub type Result<T> = std::result::Result<T, LadleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = LadleError::not_found("ingredient", "Salt");
        assert_eq!(err.to_string(), "No ingredient named 'Salt'");
        assert!(err.is_not_found());
        assert!(!err.is_remote());
    }

    #[test]
    fn test_remote_predicates() {
        assert!(LadleError::Unauthorized.is_unauthorized());
        assert!(LadleError::Unauthorized.is_remote());
        assert!(LadleError::RemoteFailure { status: 500 }.is_remote());
        assert!(!LadleError::validation("empty").is_remote());
    }
}
