use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::TransportError;

/// The backend's `{code, result, message}` wrapper.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: Option<i32>,
    pub result: Option<T>,
    pub message: Option<String>,
}

/// HTTP status plus the unwrapped envelope of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub code: Option<i32>,
    pub result: Option<T>,
    pub message: Option<String>,
}

pub type ApiResult<T> = Result<ApiResponse<T>, TransportError>;

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
impl<T> ApiResponse<T> {
    pub(crate) fn ok(result: T) -> Self {
        Self {
            status: 200,
            code: Some(crate::config::DEFAULT_SUCCESS_CODE),
            result: Some(result),
            message: None,
        }
    }

    /// 2xx answer that carries no result.
    pub(crate) fn empty(status: u16) -> Self {
        Self {
            status,
            code: Some(crate::config::DEFAULT_SUCCESS_CODE),
            result: None,
            message: None,
        }
    }

    pub(crate) fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            result: None,
            message: Some(message.into()),
        }
    }
}

/// Builds an [`ApiResponse`] from a raw status and body.
///
/// A 2xx body must be a well-formed envelope (an empty body counts as an
/// envelope without result). Error bodies are read leniently, only to pick up
/// the server's message.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> ApiResult<T> {
    let blank = body.iter().all(u8::is_ascii_whitespace);

    if (200..300).contains(&status) {
        if blank {
            return Ok(ApiResponse {
                status,
                code: None,
                result: None,
                message: None,
            });
        }
        let envelope: ApiEnvelope<T> =
            serde_json::from_slice(body).map_err(|e| TransportError::Decode(e.to_string()))?;
        return Ok(ApiResponse {
            status,
            code: envelope.code,
            result: envelope.result,
            message: envelope.message,
        });
    }

    let envelope = if blank {
        None
    } else {
        serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(body).ok()
    };
    Ok(ApiResponse {
        status,
        code: envelope.as_ref().and_then(|e| e.code),
        result: None,
        message: envelope.and_then(|e| e.message),
    })
}
