use std::sync::Arc;

use business::domain::errors::RepositoryError;
use business::domain::resource::Resource;
use business::domain::session::store::PreferenceStore;

use crate::endpoints::Access;
use crate::envelope::{ApiResponse, ApiResult};
use crate::error::TransportError;

/// Turns raw API results into repository outcomes.
///
/// `operation` is the human phrase used in error messages, e.g. `"load cart"`.
pub struct ResponseHandler {
    preferences: Arc<dyn PreferenceStore>,
    success_code: i32,
}

impl ResponseHandler {
    pub fn new(preferences: Arc<dyn PreferenceStore>, success_code: i32) -> Self {
        Self {
            preferences,
            success_code,
        }
    }

    /// Outcome of a call that must return a payload.
    pub fn interpret<T>(&self, operation: &str, result: ApiResult<T>) -> Result<T, RepositoryError> {
        let response = self.check(operation, result)?;
        response
            .result
            .ok_or_else(|| RepositoryError::empty_response(operation))
    }

    /// Outcome of a call whose payload, if any, is ignored.
    pub fn interpret_empty<T>(
        &self,
        operation: &str,
        result: ApiResult<T>,
    ) -> Result<(), RepositoryError> {
        self.check(operation, result).map(|_| ())
    }

    /// Wraps the outcome into a `Resource`. An expired session on an
    /// authenticated call clears the stored token first.
    pub async fn finish<T>(
        &self,
        access: Access,
        outcome: Result<T, RepositoryError>,
    ) -> Resource<T> {
        match outcome {
            Ok(data) => Resource::Success(data),
            Err(err) => {
                if err.is_session_expired() && access == Access::Authenticated {
                    tracing::info!("Session rejected by server, clearing access token");
                    if let Err(storage) = self.preferences.clear_access_token().await {
                        tracing::error!(error = %storage, "Could not clear access token");
                    }
                }
                tracing::warn!(error = %err, "Repository call failed");
                Resource::error(err.to_string())
            }
        }
    }

    fn check<T>(
        &self,
        operation: &str,
        result: ApiResult<T>,
    ) -> Result<ApiResponse<T>, RepositoryError> {
        let response = result.map_err(map_transport)?;

        if !response.is_success() {
            return Err(match response.status {
                400 => RepositoryError::InvalidInput,
                401 | 403 => RepositoryError::SessionExpired,
                404 => RepositoryError::not_found(operation),
                status => RepositoryError::server(
                    operation,
                    server_message(response.message, || format!("server responded with status {}", status)),
                ),
            });
        }

        match response.code {
            Some(code) if code != self.success_code => Err(RepositoryError::server(
                operation,
                server_message(response.message, || format!("server responded with code {}", code)),
            )),
            _ => Ok(response),
        }
    }
}

fn map_transport(err: TransportError) -> RepositoryError {
    match err {
        TransportError::Connection(_) => RepositoryError::Connection,
        TransportError::Timeout => RepositoryError::Timeout,
        other => RepositoryError::unexpected(other.to_string()),
    }
}

fn server_message(message: Option<String>, fallback: impl FnOnce() -> String) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(fallback)
}
