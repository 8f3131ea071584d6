use std::sync::Arc;

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use business::domain::session::store::PreferenceStore;

use crate::config::ApiClientConfig;
use crate::endpoints::Endpoint;
use crate::envelope::{ApiResult, decode_response};
use crate::error::TransportError;
use crate::interceptor::AuthInterceptor;

/// Shared HTTP client for the storefront backend.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    interceptor: AuthInterceptor,
}

impl ApiClient {
    pub fn new(
        config: &ApiClientConfig,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Result<Self, TransportError> {
        let http = Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            interceptor: AuthInterceptor::new(preferences),
        })
    }

    pub fn url(&self, endpoint: &Endpoint) -> Result<Url, TransportError> {
        self.base_url
            .join(&endpoint.path)
            .map_err(|e| TransportError::InvalidUrl(e.to_string()))
    }

    pub async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let request = self.http.request(endpoint.method.clone(), self.url(&endpoint)?);
        self.send(&endpoint, request).await
    }

    pub async fn call_with_body<B, T>(&self, endpoint: Endpoint, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .request(endpoint.method.clone(), self.url(&endpoint)?)
            .json(body);
        self.send(&endpoint, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let request = self.interceptor.intercept(endpoint, request).await;
        tracing::debug!(method = %endpoint.method, path = %endpoint.path, "Sending request");

        let response = request.send().await.map_err(|err| {
            tracing::warn!(path = %endpoint.path, error = %err, "Request failed");
            TransportError::from(err)
        })?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        tracing::debug!(path = %endpoint.path, status, "Response received");
        decode_response(status, &body)
    }
}
