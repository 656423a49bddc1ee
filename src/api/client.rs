//! HTTP client for the bet backend.

use super::{BetGateway, NewBet, SignRequest};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::state::{Bet, BetId};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Builder for creating an API client.
pub struct ApiClientBuilder {
    config: ApiConfig,
    base_url: Option<String>,
}

impl ApiClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            base_url: None,
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this base URL instead of the configured endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<ApiClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| self.config.base_url().to_string());
        ApiClient::with_base_url(&base_url, Duration::from_secs(self.config.timeout_secs))
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// reqwest-backed [`BetGateway`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the endpoint selected in `config`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Self::with_base_url(
            config.base_url(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config(format!("invalid base URL {base_url:?}: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL must be http or https: {base_url}"
            )));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL under the base path. Segments are percent-encoded.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn exchange<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(%method, %url, "sending request");

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let result = Self::send(request).await;

        if let Err(e) = &result {
            tracing::warn!(%method, %url, error = %e, "request failed");
        }
        result
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::request(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl BetGateway for ApiClient {
    async fn create_bet(&self, bet: &NewBet) -> Result<Bet> {
        self.exchange(Method::POST, self.url(&["bets", ""]), Some(bet))
            .await
    }

    async fn get_bet(&self, id: &BetId) -> Result<Bet> {
        self.exchange::<(), _>(Method::GET, self.url(&["bets", id.as_str()]), None)
            .await
    }

    async fn list_bets(&self) -> Result<Vec<Bet>> {
        self.exchange::<(), _>(Method::GET, self.url(&["bets", ""]), None)
            .await
    }

    async fn sign_bet(&self, id: &BetId, initials: &str) -> Result<Bet> {
        let body = SignRequest {
            initials: initials.to_string(),
        };
        self.exchange(
            Method::POST,
            self.url(&["bets", id.as_str(), "sign"]),
            Some(&body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoint;

    #[test]
    fn test_urls_follow_backend_routes() {
        let client = ApiClientBuilder::new()
            .base_url("http://localhost:8000")
            .build()
            .unwrap();

        assert_eq!(client.url(&["bets", ""]).as_str(), "http://localhost:8000/bets/");
        assert_eq!(
            client.url(&["bets", "abc"]).as_str(),
            "http://localhost:8000/bets/abc"
        );
        assert_eq!(
            client.url(&["bets", "abc", "sign"]).as_str(),
            "http://localhost:8000/bets/abc/sign"
        );
    }

    #[test]
    fn test_base_path_is_kept_and_ids_are_encoded() {
        let client = ApiClientBuilder::new()
            .base_url("https://example.com/api/")
            .build()
            .unwrap();

        assert_eq!(
            client.url(&["bets", "a/b c"]).as_str(),
            "https://example.com/api/bets/a%2Fb%20c"
        );
    }

    #[test]
    fn test_endpoint_selection() {
        let config = ApiConfig {
            endpoint: Endpoint::Local,
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://192.168.18.20:8000/");
    }

    #[test]
    fn test_rejects_non_http_base() {
        let result = ApiClientBuilder::new().base_url("mailto:someone").build();
        assert!(matches!(result, Err(Error::Config(_))));

        let result = ApiClientBuilder::new().base_url("not a url").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
