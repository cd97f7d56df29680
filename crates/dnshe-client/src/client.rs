//! Main DNSHE API client implementation.

use dnshe_core::{Credentials, DnsheError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::api::SubdomainsApi;

/// The DNSHE API base URL. Already carries the dispatcher query string;
/// `endpoint` and `action` are appended as further parameters.
const DEFAULT_BASE_URL: &str = "https://api005.dnshe.com/index.php?m=domain_hub";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main DNSHE API client
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a new client with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Access subdomain endpoints on behalf of one account
    #[must_use]
    pub const fn subdomains<'a>(&'a self, credentials: &'a Credentials) -> SubdomainsApi<'a> {
        SubdomainsApi::new(self, credentials)
    }

    /// Perform a GET request against one endpoint/action pair
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        action: &str,
        credentials: Option<&Credentials>,
    ) -> Result<T> {
        let url = self.build_url(endpoint, action);
        debug!(url = %url, "GET request");

        let mut request = self.inner.http.get(&url);
        request = Self::apply_credentials(request, credentials);

        let response = request
            .send()
            .await
            .map_err(|e| self.classify_transport(&e))?;

        self.handle_response(response).await
    }

    /// Perform a POST request with a JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: &str,
        action: &str,
        credentials: Option<&Credentials>,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(endpoint, action);
        debug!(url = %url, "POST request");

        let mut request = self.inner.http.post(&url).json(body);
        request = Self::apply_credentials(request, credentials);

        let response = request
            .send()
            .await
            .map_err(|e| self.classify_transport(&e))?;

        self.handle_response(response).await
    }

    /// Build the request URL with `endpoint` and `action` query parameters
    fn build_url(&self, endpoint: &str, action: &str) -> String {
        let separator = if self.inner.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}endpoint={}&action={}",
            self.inner.base_url,
            separator,
            urlencoding::encode(endpoint),
            urlencoding::encode(action)
        )
    }

    /// Attach credential headers when a credential pair is supplied
    fn apply_credentials(
        request: reqwest::RequestBuilder,
        credentials: Option<&Credentials>,
    ) -> reqwest::RequestBuilder {
        match credentials {
            Some(creds) => request
                .header("X-API-Key", &creds.key)
                .header("X-API-Secret", &creds.secret),
            None => request,
        }
    }

    /// Map a transport-level failure to a classified error
    fn classify_transport(&self, err: &reqwest::Error) -> DnsheError {
        if err.is_timeout() {
            DnsheError::Timeout(self.inner.timeout.as_secs())
        } else if err.is_connect() {
            DnsheError::Connection(err.to_string())
        } else {
            DnsheError::Http(err.to_string())
        }
    }

    /// Classify an API response.
    ///
    /// Order matters: a body that is not JSON is reported as such whatever
    /// the status code, a non-200 status maps to a status-specific error,
    /// and only then does the body deserialize into the typed response.
    /// An application-level `success: false` at HTTP 200 is not an error
    /// at this layer.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_transport(&e))?;

        let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) else {
            if content_type.contains("text/html") || body.trim_start().starts_with('<') {
                warn!(status, "HTML response from API");
                return Err(DnsheError::HtmlResponse { status });
            }
            return Err(DnsheError::NonJson { status });
        };

        if status != 200 {
            return Err(Self::status_error(status, &value));
        }

        serde_json::from_value(value).map_err(DnsheError::Json)
    }

    /// Convert a non-200 response to a status-specific error, extracting
    /// the provider's message where the body carries one
    fn status_error(status: u16, body: &serde_json::Value) -> DnsheError {
        let message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .or_else(|| body.get("error").and_then(serde_json::Value::as_str))
            .map_or_else(|| format!("HTTP {status}"), String::from);

        match status {
            401 => DnsheError::Unauthorized { message },
            403 => DnsheError::RenewalWindowClosed { message },
            429 => {
                warn!("rate limited by DNSHE API");
                DnsheError::RateLimited { message }
            }
            _ => DnsheError::Api {
                code: status,
                message,
            },
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring an [`ApiClient`]
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ApiClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("dnshe-renew/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> ApiClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        ApiClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
                timeout: self.timeout,
            }),
        }
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
