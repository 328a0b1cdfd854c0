//! Login, registration, and logout flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth page hands validated form data to `SessionActions`. A rejection
//! (`detail` in the response) shows the server's text as a danger alert; a
//! transport failure is logged and shown as a fixed fallback message. Only a
//! successful response writes the token and navigates to the main view.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use super::alert::{AlertController, AlertKind};
use super::token::SharedTokenStore;
use crate::net::api::SharedAuthClient;
use crate::net::error::ApiError;
use crate::net::types::{AuthOutcome, AuthResponse, LoginRequest, RegisterRequest};

/// Landing route after a successful login or registration.
pub const MAIN_PATH: &str = "/main";
/// Auth page route, the destination after logout.
pub const AUTH_PATH: &str = "/";

/// Navigation capability (router push or full page load).
pub type Navigate = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Token stored and navigation triggered.
    SignedIn,
    /// The service refused with a `detail` message.
    Rejected,
    /// Transport failure or malformed response.
    Failed,
}

#[derive(Clone, Copy, Debug)]
enum Flow {
    Login,
    Registration,
}

impl Flow {
    fn label(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Registration => "registration",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Login successful!",
            Self::Registration => "Registration successful!",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed. Please try again.",
            Self::Registration => "Registration failed. Please try again.",
        }
    }
}

/// Drop the session token and return to the auth page.
///
/// Role state is left alone; protected views re-resolve on their next mount.
pub fn logout(tokens: &SharedTokenStore, navigate: &Navigate) {
    tokens.clear();
    navigate(AUTH_PATH);
}

#[derive(Clone)]
pub struct SessionActions {
    tokens: SharedTokenStore,
    client: SharedAuthClient,
    alerts: AlertController,
    navigate: Navigate,
}

impl SessionActions {
    pub fn new(tokens: SharedTokenStore, client: SharedAuthClient, alerts: AlertController, navigate: Navigate) -> Self {
        Self { tokens, client, alerts, navigate }
    }

    pub fn alerts(&self) -> &AlertController {
        &self.alerts
    }

    pub async fn login(&self, request: LoginRequest) -> SubmitOutcome {
        let reply = self.client.login(&request).await;
        self.finish(Flow::Login, reply)
    }

    pub async fn register(&self, request: RegisterRequest) -> SubmitOutcome {
        let reply = self.client.register(&request).await;
        self.finish(Flow::Registration, reply)
    }

    pub fn logout(&self) {
        logout(&self.tokens, &self.navigate);
    }

    fn finish(&self, flow: Flow, reply: Result<AuthResponse, ApiError>) -> SubmitOutcome {
        match reply.and_then(AuthResponse::into_outcome) {
            Ok(AuthOutcome::Issued { token }) => {
                self.tokens.write(&token);
                self.alerts.show_alert(flow.success_message(), AlertKind::Success);
                (self.navigate)(MAIN_PATH);
                SubmitOutcome::SignedIn
            }
            Ok(AuthOutcome::Rejected { detail }) => {
                self.alerts.show_alert(detail, AlertKind::Danger);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                log::error!("error during {}: {e}", flow.label());
                self.alerts.show_alert(flow.failure_message(), AlertKind::Danger);
                SubmitOutcome::Failed
            }
        }
    }
}
