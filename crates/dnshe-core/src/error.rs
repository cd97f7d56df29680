use thiserror::Error;

/// Result type alias for DNSHE operations
pub type Result<T> = std::result::Result<T, DnsheError>;

/// Errors that can occur when calling the DNSHE API.
///
/// Every variant renders to a message suitable for the run report, so the
/// batch loop can record a failed call without inspecting the variant.
#[derive(Error, Debug)]
pub enum DnsheError {
    /// HTTP 401 - bad or missing credential headers
    #[error("authentication failed: {message}")]
    Unauthorized {
        /// Message extracted from the response body, or synthesized
        message: String,
    },

    /// HTTP 403 - the provider rejects renewals outside the allowed window
    #[error("{message} - renewal window not yet open (must renew within 180 days of expiry)")]
    RenewalWindowClosed {
        /// Message extracted from the response body, or synthesized
        message: String,
    },

    /// HTTP 429 - too many requests
    #[error("rate limited: {message}")]
    RateLimited {
        /// Message extracted from the response body, or synthesized
        message: String,
    },

    /// Any other non-200 response with a parseable body
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// The body was HTML rather than JSON, usually a login or permission wall
    #[error("HTML response (HTTP {status}): likely a permission or login issue")]
    HtmlResponse {
        /// HTTP status code
        status: u16,
    },

    /// The body was neither JSON nor HTML
    #[error("non-JSON response (HTTP {status})")]
    NonJson {
        /// HTTP status code
        status: u16,
    },

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Any other HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON serialization error on the request side
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl DnsheError {
    /// Returns the HTTP status code carried by the response, if any
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::RenewalWindowClosed { .. } => Some(403),
            Self::RateLimited { .. } => Some(429),
            Self::Api { code, .. } => Some(*code),
            Self::HtmlResponse { status } | Self::NonJson { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request never produced a usable response
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Connection(_) | Self::Http(_))
    }
}
