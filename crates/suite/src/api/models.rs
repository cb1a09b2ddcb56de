//! Wire model for the registration endpoint.
//!
//! The backend answers `POST /auth/register` with one of three shapes:
//! a success payload, a validation-error list, or an error envelope.
//! Callers branch on the deserialized variant instead of probing optional
//! fields on one catch-all struct.

use serde::{Deserialize, Serialize};

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl RegisterRequest {
    /// Build a request from fixture values.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// User record returned on successful registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// User id
    pub id: String,
    /// Registered email
    pub email: String,
    /// Generated username
    #[serde(default)]
    pub username: Option<String>,
    /// Account role
    #[serde(default)]
    pub role: Option<String>,
    /// Account state
    #[serde(default)]
    pub state: Option<String>,
    /// Onboarding tour status
    #[serde(default)]
    pub tour_status: Option<String>,
    /// Whether the email is verified
    #[serde(default, rename = "is_verified")]
    pub verified: bool,
    /// Premium tier name
    #[serde(default)]
    pub premium_tier: Option<String>,
    /// UI language
    #[serde(default)]
    pub language: Option<String>,
    /// Account timezone
    #[serde(default)]
    pub timezone: Option<String>,
}

/// One entry of a validation-error list.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldError {
    /// The request field the error refers to
    pub field: String,
    /// Human-readable detail
    #[serde(default)]
    pub message: Option<String>,
}

/// The three response shapes of the registration endpoint.
///
/// Untagged: variants are tried most-specific first, so a body carrying
/// `errors` deserializes as `Rejected` even when a `status` field is also
/// present.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RegisterOutcome {
    /// Registration succeeded
    Registered {
        /// Success flag reported by the backend
        success: bool,
        /// Optional status message
        #[serde(default)]
        message: Option<String>,
        /// The created user
        data: UserData,
    },
    /// Request rejected with field-level validation errors
    Rejected {
        /// Non-empty validation-error list
        errors: Vec<FieldError>,
    },
    /// Error envelope (conflict, server error, ...)
    Failed {
        /// HTTP-style status code inside the body
        status: u16,
        /// Optional error message
        #[serde(default)]
        message: Option<String>,
        /// Optional problem detail
        #[serde(default)]
        detail: Option<String>,
        /// Optional problem instance
        #[serde(default)]
        instance: Option<String>,
    },
}

impl RegisterOutcome {
    /// Whether this outcome is a success payload.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Registered { success: true, .. })
    }
}
