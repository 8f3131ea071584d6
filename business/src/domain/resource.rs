use std::fmt::Display;

/// Message used when an error is raised without a displayable reason.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Uniform outcome of every repository and use case operation.
///
/// `Error` always carries a non-empty, user-displayable message. `Loading` is
/// only produced by presentation state; repositories answer with `Success` or
/// `Error` directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Success(T),
    Error { message: String, data: Option<T> },
    Loading(bool),
}

impl<T> Resource<T> {
    pub fn success(data: T) -> Self {
        Resource::Success(data)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Resource::Error {
            message: non_blank(message.into()),
            data: None,
        }
    }

    pub fn error_with_data(message: impl Into<String>, data: T) -> Self {
        Resource::Error {
            message: non_blank(message.into()),
            data: Some(data),
        }
    }

    pub fn loading() -> Self {
        Resource::Loading(true)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Resource::Error { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            Resource::Error { data, .. } => data.as_ref(),
            Resource::Loading(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Resource::Success(data) => Some(data),
            Resource::Error { data, .. } => data,
            Resource::Loading(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Resource::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error { message, data } => Resource::Error {
                message,
                data: data.map(f),
            },
            Resource::Loading(flag) => Resource::Loading(flag),
        }
    }

    /// Converts into a plain `Result`, treating `Loading` as an error.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Resource::Success(data) => Ok(data),
            Resource::Error { message, .. } => Err(message),
            Resource::Loading(_) => Err("operation still in progress".to_string()),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Resource<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Resource::Success(data),
            Err(err) => Resource::error(err.to_string()),
        }
    }
}

fn non_blank(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_replace_blank_error_message_with_fallback() {
        let resource: Resource<()> = Resource::error("   ");

        assert_eq!(resource.message(), Some(FALLBACK_ERROR_MESSAGE));
    }

    #[test]
    fn should_keep_error_message_when_present() {
        let resource: Resource<()> = Resource::error("Cart is empty");

        assert_eq!(resource.message(), Some("Cart is empty"));
    }

    #[test]
    fn should_convert_ok_result_into_success() {
        let result: Result<i32, String> = Ok(7);

        let resource: Resource<i32> = result.into();

        assert_eq!(resource, Resource::Success(7));
    }

    #[test]
    fn should_convert_err_result_into_error_with_display_message() {
        let result: Result<i32, std::fmt::Error> = Err(std::fmt::Error);

        let resource: Resource<i32> = result.into();

        assert!(resource.is_error());
        assert!(!resource.message().unwrap_or_default().is_empty());
    }

    #[test]
    fn should_map_error_data_and_keep_message() {
        let resource = Resource::error_with_data("stale", 2).map(|n| n * 10);

        assert_eq!(
            resource,
            Resource::Error {
                message: "stale".to_string(),
                data: Some(20)
            }
        );
    }

    #[test]
    fn should_expose_no_data_while_loading() {
        let resource: Resource<i32> = Resource::loading();

        assert!(resource.data().is_none());
        assert!(resource.into_result().is_err());
    }
}
