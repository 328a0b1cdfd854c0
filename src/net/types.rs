//! Wire DTOs for the remote auth/role service.
//!
//! DESIGN
//! ======
//! `login` and `register` share one response shape. Success and failure are
//! told apart by the presence of `detail`, not by HTTP status, so the raw
//! shape is decoded first and then classified by `AuthResponse::into_outcome`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Credentials submitted by the login form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Fields submitted by the registration form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub last_name: String,
    pub first_name: String,
    /// Phone number.
    pub tel: String,
    pub age: u32,
    pub email: String,
    pub password: String,
}

/// Raw `login`/`register` response body.
///
/// Registration echoes the whole user record; unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    /// Human-readable rejection reason. Usually a string, but framework
    /// validation errors send structured values.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// Classified `login`/`register` result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A session token was issued.
    Issued { token: String },
    /// The service refused the request with a reason to show the user.
    Rejected { detail: String },
}

impl AuthResponse {
    /// Classify the response, checking `detail` before `token`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body carries neither a detail nor a token.
    pub fn into_outcome(self) -> Result<AuthOutcome, ApiError> {
        if let Some(detail) = self.detail.and_then(detail_text) {
            return Ok(AuthOutcome::Rejected { detail });
        }
        match self.token {
            Some(token) if !token.is_empty() => Ok(AuthOutcome::Issued { token }),
            _ => Err(ApiError::Decode("response carried neither token nor detail".to_owned())),
        }
    }
}

/// Render a `detail` value as display text. Empty and `null` details count
/// as absent.
fn detail_text(detail: serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// `getRoleByToken` response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub role: String,
}
