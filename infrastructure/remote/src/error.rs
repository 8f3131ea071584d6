/// Failures below the HTTP status level: the request never produced a
/// usable response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("request timed out")]
    Timeout,
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http client setup failed: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if err.is_builder() {
            TransportError::Setup(err.to_string())
        } else {
            TransportError::Connection(err.to_string())
        }
    }
}
