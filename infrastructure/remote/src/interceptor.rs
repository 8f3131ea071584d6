use std::sync::Arc;

use reqwest::RequestBuilder;

use business::domain::session::store::PreferenceStore;

use crate::endpoints::Endpoint;

/// Attaches the stored access token to every non-public request.
///
/// The token lookup is awaited before the request is sent, so a token saved
/// by a login that just completed is always picked up.
pub struct AuthInterceptor {
    preferences: Arc<dyn PreferenceStore>,
}

impl AuthInterceptor {
    pub fn new(preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { preferences }
    }

    pub async fn intercept(&self, endpoint: &Endpoint, request: RequestBuilder) -> RequestBuilder {
        if endpoint.is_public() {
            return request;
        }

        match self.preferences.access_token().await {
            Ok(Some(token)) => request.bearer_auth(token),
            Ok(None) => request,
            Err(err) => {
                tracing::warn!(path = %endpoint.path, error = %err, "Could not read access token");
                request
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::StorageError;
    use business::domain::session::model::SavedCredentials;
    use mockall::mock;
    use preferences::MemoryPreferenceStore;
    use reqwest::header::AUTHORIZATION;

    mock! {
        pub Prefs {}

        #[async_trait]
        impl PreferenceStore for Prefs {
            async fn access_token(&self) -> Result<Option<String>, StorageError>;
            async fn save_access_token(&self, token: &str) -> Result<(), StorageError>;
            async fn clear_access_token(&self) -> Result<(), StorageError>;
            async fn saved_credentials(&self) -> Result<Option<SavedCredentials>, StorageError>;
            async fn save_credentials(&self, credentials: &SavedCredentials) -> Result<(), StorageError>;
            async fn clear_credentials(&self) -> Result<(), StorageError>;
            async fn is_first_launch(&self) -> Result<bool, StorageError>;
            async fn set_first_launch(&self, first_launch: bool) -> Result<(), StorageError>;
        }
    }

    fn request() -> RequestBuilder {
        reqwest::Client::new().get("http://localhost:8080/api/cart/view")
    }

    #[tokio::test]
    async fn should_attach_bearer_token_to_authenticated_request() {
        let interceptor = AuthInterceptor::new(Arc::new(MemoryPreferenceStore::with_token("jwt")));

        let built = interceptor
            .intercept(&Endpoint::view_cart(), request())
            .await
            .build()
            .unwrap();

        assert_eq!(
            built.headers().get(AUTHORIZATION).unwrap(),
            "Bearer jwt"
        );
    }

    #[tokio::test]
    async fn should_leave_public_request_untouched() {
        let mut prefs = MockPrefs::new();
        prefs.expect_access_token().times(0);
        let interceptor = AuthInterceptor::new(Arc::new(prefs));

        let built = interceptor
            .intercept(&Endpoint::home(), request())
            .await
            .build()
            .unwrap();

        assert!(built.headers().get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn should_send_without_header_when_no_token_stored() {
        let interceptor = AuthInterceptor::new(Arc::new(MemoryPreferenceStore::new()));

        let built = interceptor
            .intercept(&Endpoint::my_info(), request())
            .await
            .build()
            .unwrap();

        assert!(built.headers().get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn should_proceed_without_header_when_token_read_fails() {
        let mut prefs = MockPrefs::new();
        prefs
            .expect_access_token()
            .returning(|| Err(StorageError::Io("locked".to_string())));
        let interceptor = AuthInterceptor::new(Arc::new(prefs));

        let built = interceptor
            .intercept(&Endpoint::my_orders(), request())
            .await
            .build()
            .unwrap();

        assert!(built.headers().get(AUTHORIZATION).is_none());
    }
}
