/// Error types for the interview synthesizer
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested audience is not in the catalog. Detected before any backend call.
    #[error("Unknown audience: {0}")]
    UnknownAudience(String),

    /// Empty transcript, empty audience set, or out-of-range parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport or API failure from the generation backend, isolated to one
    /// audience's call. `status` is absent for transport-level failures.
    #[error("Backend error{}: {message}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Backend {
        status: Option<u16>,
        message: String,
    },

    /// No API key available. Distinct from a backend call failure.
    #[error("Generation backend is not configured: no API key available")]
    ConfigurationMissing,

    #[error("Keychain error: {0}")]
    Keychain(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Builds a backend error, keeping the HTTP status when one was received.
    pub fn backend(status: Option<u16>, message: impl Into<String>) -> Self {
        AppError::Backend {
            status,
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display_with_status() {
        let err = AppError::backend(Some(429), "rate limited");
        assert_eq!(err.to_string(), "Backend error (status 429): rate limited");
    }

    #[test]
    fn test_backend_error_display_without_status() {
        let err = AppError::backend(None, "connection reset");
        assert_eq!(err.to_string(), "Backend error: connection reset");
    }

    #[test]
    fn test_configuration_missing_is_distinct_from_backend() {
        let err = AppError::ConfigurationMissing;
        assert!(!matches!(err, AppError::Backend { .. }));
        assert!(err.to_string().contains("not configured"));
    }
}
