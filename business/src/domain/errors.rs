/// Failures a repository can report after talking to the backend.
/// The display text of every variant is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Unable to connect to the server. Please check your network connection.")]
    Connection,
    #[error("The server took too long to respond. Please try again.")]
    Timeout,
    #[error("The submitted information is invalid.")]
    InvalidInput,
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,
    #[error("Incorrect phone number or password.")]
    InvalidCredentials,
    #[error("Could not {operation}: the requested item was not found.")]
    NotFound { operation: String },
    #[error("Failed to {operation}: {message}")]
    Server { operation: String, message: String },
    #[error("Failed to {operation}: the server returned an empty response.")]
    EmptyResponse { operation: String },
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl RepositoryError {
    pub fn not_found(operation: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            operation: operation.into(),
        }
    }

    pub fn server(operation: impl Into<String>, message: impl Into<String>) -> Self {
        RepositoryError::Server {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn empty_response(operation: impl Into<String>) -> Self {
        RepositoryError::EmptyResponse {
            operation: operation.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        RepositoryError::Unexpected(message.into())
    }

    /// 401 and 403 answers both mean the stored token is no longer usable.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, RepositoryError::SessionExpired)
    }
}

/// Failures of the local preference and search-history stores.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Could not access local storage: {0}")]
    Io(String),
    #[error("Local storage is corrupted: {0}")]
    Serialization(String),
}
