//! Error types for memhub.
//!
//! Three layers: [`ResolveError`] when a name matches no listed project,
//! [`RemoteError`] when the directory backend cannot be reached or answers
//! with a failure, and [`ServerError`] on top, which adds the refusal of
//! mutations on a pinned deployment and startup configuration errors.

use thiserror::Error;

/// Top-level server error.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    NotFound(#[from] ResolveError),

    #[error("Remote call failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("# Error\n\n{0}")]
    OperationDisabled(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures talking to the project directory backend.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {path} returned {status}: {detail}")]
    Status {
        method: reqwest::Method,
        path: String,
        status: u16,
        detail: String,
    },

    #[error("invalid response from {path}: {reason}")]
    Decode { path: String, reason: String },
}

/// Name resolution failures against a fetched project list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Project '{name}' not found. Available projects: {}", .available.join(", "))]
    NotFound { name: String, available: Vec<String> },
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Result type alias for backend calls.
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

// Error code implementations for machine-readable error responses
impl ServerError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(e) => e.code(),
            Self::Remote(e) => e.code(),
            Self::OperationDisabled(_) => "OPERATION_DISABLED",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl RemoteError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Request { .. } => "REMOTE_UNREACHABLE",
            Self::Status { .. } => "REMOTE_STATUS",
            Self::Decode { .. } => "REMOTE_DECODE",
        }
    }
}

impl ResolveError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "PROJECT_NOT_FOUND",
        }
    }

    /// Names of every project that was listed when resolution failed.
    #[must_use]
    pub fn available(&self) -> &[String] {
        match self {
            Self::NotFound { available, .. } => available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_available_names() {
        let err = ResolveError::NotFound {
            name: "ghost".to_string(),
            available: vec!["alpha".to_string(), "beta".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Project 'ghost' not found. Available projects: alpha, beta"
        );

        let server: ServerError = err.into();
        assert_eq!(server.code(), "PROJECT_NOT_FOUND");
        assert!(server.to_string().contains("alpha, beta"));
    }

    #[test]
    fn test_status_error_code_and_message() {
        let err = RemoteError::Status {
            method: reqwest::Method::DELETE,
            path: "/projects/main".to_string(),
            status: 400,
            detail: "Cannot delete default project".to_string(),
        };
        assert_eq!(err.code(), "REMOTE_STATUS");
        assert_eq!(
            err.to_string(),
            "DELETE /projects/main returned 400: Cannot delete default project"
        );
    }

    #[test]
    fn test_disabled_renders_as_error_block() {
        let err = ServerError::OperationDisabled("Project creation disabled".to_string());
        assert_eq!(err.code(), "OPERATION_DISABLED");
        assert!(err.to_string().starts_with("# Error\n\n"));
    }
}
