//! Places API error types.

use crate::domain::ZipCode;

/// Errors that can occur when looking up gas stations.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// HTTP request failed (network error, timeout, etc.)
    ///
    /// The request URL is stripped; it carries the API key.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// API returned a non-success HTTP status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The ZIP code could not be geocoded
    #[error("no location found for ZIP {0}")]
    NoResults(ZipCode),

    /// Query quota exhausted
    #[error("rate limited by Google Maps API")]
    RateLimited,

    /// Key missing, invalid or not enabled for this API
    #[error("request denied: {0}")]
    Denied(String),

    /// Any other non-OK status in the response body
    #[error("unexpected status {status}: {message}")]
    Status { status: String, message: String },

    /// Mock fixture could not be loaded
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

impl From<reqwest::Error> for PlacesError {
    fn from(e: reqwest::Error) -> Self {
        PlacesError::Http(e.without_url())
    }
}

impl PlacesError {
    /// Short reason safe to show to chat users.
    ///
    /// Transport and API details stay in the logs.
    pub fn user_notice(&self) -> String {
        match self {
            PlacesError::NoResults(_) => "ZIP code not found".to_string(),
            PlacesError::RateLimited => "search quota reached, try again later".to_string(),
            _ => "lookup failed".to_string(),
        }
    }

    /// Map a Google Maps status string to an error.
    ///
    /// Callers handle `OK` and `ZERO_RESULTS` before calling this.
    pub(crate) fn from_status(status: &str, message: Option<String>) -> Self {
        let message = message.unwrap_or_default();
        match status {
            super::types::status::OVER_QUERY_LIMIT => PlacesError::RateLimited,
            super::types::status::REQUEST_DENIED => PlacesError::Denied(message),
            other => PlacesError::Status {
                status: other.to_string(),
                message,
            },
        }
    }
}
