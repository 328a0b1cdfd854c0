use super::*;
use std::sync::Mutex;
use std::time::Duration;

use crate::state::alert::AlertState;
use crate::state::test_helpers::FakeAuthClient;
use crate::state::token::{MemoryTokenStore, TokenStore};
use tokio::task::LocalSet;

struct Harness {
    tokens: Arc<MemoryTokenStore>,
    client: Arc<FakeAuthClient>,
    visited: Arc<Mutex<Vec<String>>>,
    actions: SessionActions,
}

fn harness(initial_token: Option<&str>) -> Harness {
    let tokens = Arc::new(initial_token.map_or_else(MemoryTokenStore::new, MemoryTokenStore::with_token));
    let client = FakeAuthClient::new();
    let visited = Arc::new(Mutex::new(Vec::new()));
    let sink = visited.clone();
    let navigate: Navigate = Arc::new(move |path: &str| sink.lock().unwrap().push(path.to_owned()));
    let actions = SessionActions::new(tokens.clone(), client.clone(), AlertController::new(), navigate);
    Harness { tokens, client, visited, actions }
}

fn credentials() -> LoginRequest {
    LoginRequest { email: "ann@example.com".to_owned(), password: "secret".to_owned() }
}

fn registration() -> RegisterRequest {
    RegisterRequest {
        last_name: "Lee".to_owned(),
        first_name: "Ann".to_owned(),
        tel: "+15550100".to_owned(),
        age: 29,
        email: "ann@example.com".to_owned(),
        password: "secret".to_owned(),
    }
}

fn token_reply(token: &str) -> Result<AuthResponse, ApiError> {
    Ok(AuthResponse { token: Some(token.to_owned()), detail: None })
}

fn detail_reply(detail: &str) -> Result<AuthResponse, ApiError> {
    Ok(AuthResponse { token: None, detail: Some(serde_json::Value::String(detail.to_owned())) })
}

// =============================================================
// Login
// =============================================================

#[tokio::test(start_paused = true)]
async fn rejected_login_shows_detail_and_keeps_token() {
    LocalSet::new()
        .run_until(async {
            let h = harness(Some("previous"));
            h.client.queue_auth(detail_reply("Invalid credentials"));

            let outcome = h.actions.login(credentials()).await;

            assert_eq!(outcome, SubmitOutcome::Rejected);
            assert_eq!(h.tokens.read(), Some("previous".to_owned()));
            assert!(h.visited.lock().unwrap().is_empty());
            let alert = h.actions.alerts().current_alert();
            assert_eq!(alert.message(), Some("Invalid credentials"));
            assert_eq!(alert.kind(), Some(AlertKind::Danger));

            tokio::time::sleep(Duration::from_millis(3001)).await;
            assert_eq!(h.actions.alerts().current_alert(), AlertState::default());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn successful_login_stores_token_and_navigates_once() {
    LocalSet::new()
        .run_until(async {
            let h = harness(None);
            h.client.queue_auth(token_reply("abc"));

            let outcome = h.actions.login(credentials()).await;

            assert_eq!(outcome, SubmitOutcome::SignedIn);
            assert_eq!(h.tokens.read(), Some("abc".to_owned()));
            assert_eq!(*h.visited.lock().unwrap(), vec![MAIN_PATH.to_owned()]);
            let alert = h.actions.alerts().current_alert();
            assert_eq!(alert.message(), Some("Login successful!"));
            assert_eq!(alert.kind(), Some(AlertKind::Success));
            assert_eq!(*h.client.login_calls.lock().unwrap(), vec![credentials()]);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn login_transport_failure_shows_fallback_message() {
    LocalSet::new()
        .run_until(async {
            let h = harness(None);
            h.client.queue_auth(Err(ApiError::Request("connection refused".to_owned())));

            let outcome = h.actions.login(credentials()).await;

            assert_eq!(outcome, SubmitOutcome::Failed);
            assert_eq!(h.tokens.read(), None);
            assert!(h.visited.lock().unwrap().is_empty());
            let alert = h.actions.alerts().current_alert();
            assert_eq!(alert.message(), Some("Login failed. Please try again."));
            assert_eq!(alert.kind(), Some(AlertKind::Danger));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn malformed_login_response_counts_as_failure() {
    LocalSet::new()
        .run_until(async {
            let h = harness(None);
            h.client.queue_auth(Ok(AuthResponse::default()));

            let outcome = h.actions.login(credentials()).await;

            assert_eq!(outcome, SubmitOutcome::Failed);
            assert_eq!(h.tokens.read(), None);
            assert_eq!(
                h.actions.alerts().current_alert().message(),
                Some("Login failed. Please try again.")
            );
        })
        .await;
}

// =============================================================
// Registration
// =============================================================

#[tokio::test(start_paused = true)]
async fn successful_registration_signs_in() {
    LocalSet::new()
        .run_until(async {
            let h = harness(None);
            h.client.queue_auth(token_reply("new-user"));

            let outcome = h.actions.register(registration()).await;

            assert_eq!(outcome, SubmitOutcome::SignedIn);
            assert_eq!(h.tokens.read(), Some("new-user".to_owned()));
            assert_eq!(*h.visited.lock().unwrap(), vec![MAIN_PATH.to_owned()]);
            assert_eq!(
                h.actions.alerts().current_alert().message(),
                Some("Registration successful!")
            );
            assert_eq!(h.client.register_calls.lock().unwrap()[0].age, 29);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn duplicate_registration_shows_server_detail() {
    LocalSet::new()
        .run_until(async {
            let h = harness(None);
            h.client.queue_auth(detail_reply("Email already registered"));

            let outcome = h.actions.register(registration()).await;

            assert_eq!(outcome, SubmitOutcome::Rejected);
            assert_eq!(h.tokens.read(), None);
            assert_eq!(
                h.actions.alerts().current_alert().message(),
                Some("Email already registered")
            );
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn registration_failure_uses_registration_fallback() {
    LocalSet::new()
        .run_until(async {
            let h = harness(None);
            h.client.queue_auth(Err(ApiError::Status(502)));

            let outcome = h.actions.register(registration()).await;

            assert_eq!(outcome, SubmitOutcome::Failed);
            assert_eq!(
                h.actions.alerts().current_alert().message(),
                Some("Registration failed. Please try again.")
            );
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn failure_after_success_supersedes_alert() {
    LocalSet::new()
        .run_until(async {
            let h = harness(None);
            h.client.queue_auth(token_reply("abc"));
            h.client.queue_auth(detail_reply("Blocked"));

            h.actions.login(credentials()).await;
            tokio::time::sleep(Duration::from_millis(1000)).await;
            h.actions.login(credentials()).await;

            // Second alert owns a fresh window starting at T+1000.
            tokio::time::sleep(Duration::from_millis(2500)).await;
            assert_eq!(h.actions.alerts().current_alert().message(), Some("Blocked"));
            tokio::time::sleep(Duration::from_millis(501)).await;
            assert!(!h.actions.alerts().current_alert().is_active());
        })
        .await;
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_token_and_returns_to_auth_page() {
    let h = harness(Some("abc"));
    h.actions.logout();
    assert_eq!(h.tokens.read(), None);
    assert_eq!(*h.visited.lock().unwrap(), vec![AUTH_PATH.to_owned()]);
}
