//! Main MenuClient

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use log::warn;
use reqwest::Client;
use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::error::Error;

/// Base URL of the backend used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// The client for the restaurant's REST backend.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use menu_lib::MenuClient;
///
/// let client = MenuClient::builder()
///     .url("http://localhost:3000/")
///     .build()?;
///
/// let dishes = client.dishes().await?;
/// ```
#[derive(Clone)]
pub struct MenuClient {
    inner: Arc<MenuClientInner>,
}

struct MenuClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl MenuClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> MenuClientBuilder<Missing> {
        MenuClientBuilder::new()
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Resolves a path relative to the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// Sends a GET request and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        self.send(self.inner.http_client.get(url)).await
    }

    /// Sends a PUT request with a JSON body and decodes the JSON response.
    pub(crate) async fn put_json<B, T>(&self, url: Url, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("PUT {}", url);
        self.send(self.inner.http_client.put(url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, mut request: RequestBuilder) -> Result<T, Error> {
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();

        if !status.is_success() {
            let url = response.url().clone();
            let body = response.text().await.unwrap_or_default();
            warn!("Request to {} failed with {}", url, status);
            return Err(ApiError::http(status.as_u16(), body).into());
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => Err(ApiError::parse_with_body(e.to_string(), body).into()),
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(err),
        }
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`MenuClient`].
///
/// Uses the typestate pattern to ensure the base URL is set at compile time.
///
/// # Example
///
/// ```ignore
/// let client = MenuClient::builder()
///     .url("http://localhost:3000/")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct MenuClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl MenuClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the backend base URL.
    ///
    /// A trailing slash is added if missing so relative paths resolve below
    /// it.
    pub fn url(self, url: impl Into<String>) -> MenuClientBuilder<Set<String>> {
        MenuClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for MenuClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> MenuClientBuilder<U> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl MenuClientBuilder<Set<String>> {
    /// Builds the [`MenuClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the base URL does not parse, or
    /// [`ApiError::Network`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<MenuClient, Error> {
        let mut raw = self.url.0;
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url =
            Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(MenuClient {
            inner: Arc::new(MenuClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_added() {
        let client = MenuClient::builder()
            .url("http://localhost:3000/api")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api/");
        assert_eq!(
            client.endpoint("dishes/0").unwrap().as_str(),
            "http://localhost:3000/api/dishes/0"
        );
    }

    #[test]
    fn test_invalid_url() {
        let err = MenuClient::builder().url("not a url").build().err().unwrap();
        assert!(matches!(err, Error::Api(ApiError::InvalidUrl(_))));
    }
}
