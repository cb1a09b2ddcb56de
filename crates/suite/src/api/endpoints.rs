//! Typed HTTP client for the user service.

use crate::api::models::{RegisterOutcome, RegisterRequest};
use std::time::Duration;
use thiserror::Error;

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend outage. Kept distinct from every other failure so an
    /// environment being down never reads as a logic regression.
    #[error("Service unavailable (HTTP 503) from {url}")]
    ServiceUnavailable {
        /// The endpoint that answered 503
        url: String,
    },

    /// Body did not match any known response shape
    #[error("Unexpected response shape from {url}: {message}")]
    UnexpectedShape {
        /// The endpoint that answered
        url: String,
        /// Deserialization detail
        message: String,
    },
}

/// API calls of the user service.
#[derive(Debug, Clone)]
pub struct UserEndpoints {
    base_url: String,
    client: reqwest::Client,
}

impl UserEndpoints {
    /// Create a client for the given API base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call the register endpoint and deserialize whichever response shape
    /// came back.
    ///
    /// # Errors
    ///
    /// `ServiceUnavailable` on HTTP 503, `Http` on transport failures,
    /// `UnexpectedShape` when the body matches no known variant.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterOutcome> {
        let url = format!("{}/auth/register", self.base_url);
        tracing::info!(%url, email = %request.email, "registering user");

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 503 {
            return Err(ApiError::ServiceUnavailable { url });
        }

        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), body = %body, "register response");

        serde_json::from_str(&body).map_err(|e| ApiError::UnexpectedShape {
            url,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let endpoints = UserEndpoints::new("https://api.skillboost.example/api/v1");
        assert_eq!(endpoints.base_url(), "https://api.skillboost.example/api/v1");
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let endpoints = UserEndpoints::new("https://api.skillboost.example/api/v1/");
        assert_eq!(endpoints.base_url(), "https://api.skillboost.example/api/v1");
    }
}
