//! Shared fakes for controller tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::Listener;
use crate::net::api::AuthClient;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, RoleResponse};

type RoleReply = Result<RoleResponse, ApiError>;

/// Scripted `AuthClient`. Role lookups complete when the test sends on the
/// matching queued channel; auth calls pop ready replies.
#[derive(Default)]
pub struct FakeAuthClient {
    pub role_calls: Mutex<Vec<Option<String>>>,
    pub login_calls: Mutex<Vec<LoginRequest>>,
    pub register_calls: Mutex<Vec<RegisterRequest>>,
    role_replies: Mutex<VecDeque<oneshot::Receiver<RoleReply>>>,
    auth_replies: Mutex<VecDeque<Result<AuthResponse, ApiError>>>,
}

impl FakeAuthClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a role reply the test completes later.
    pub fn pending_role(&self) -> oneshot::Sender<RoleReply> {
        let (tx, rx) = oneshot::channel();
        self.role_replies.lock().unwrap().push_back(rx);
        tx
    }

    /// Queue a role reply that is available immediately.
    pub fn ready_role(&self, reply: RoleReply) {
        let _ = self.pending_role().send(reply);
    }

    pub fn queue_auth(&self, reply: Result<AuthResponse, ApiError>) {
        self.auth_replies.lock().unwrap().push_back(reply);
    }

    pub fn role_call_count(&self) -> usize {
        self.role_calls.lock().unwrap().len()
    }

    fn next_auth(&self) -> Result<AuthResponse, ApiError> {
        self.auth_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ApiError::Request("unscripted auth call".to_owned())))
    }
}

#[async_trait(?Send)]
impl AuthClient for FakeAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.login_calls.lock().unwrap().push(request.clone());
        self.next_auth()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.register_calls.lock().unwrap().push(request.clone());
        self.next_auth()
    }

    async fn role_by_token(&self, token: Option<&str>) -> Result<RoleResponse, ApiError> {
        self.role_calls.lock().unwrap().push(token.map(str::to_owned));
        let reply = self.role_replies.lock().unwrap().pop_front();
        match reply {
            Some(rx) => rx.await.unwrap_or(Err(ApiError::Request("reply dropped".to_owned()))),
            None => Err(ApiError::Request("unscripted role call".to_owned())),
        }
    }
}

pub fn role(name: &str) -> RoleReply {
    Ok(RoleResponse { role: name.to_owned() })
}

/// Listener that records every published state.
pub fn recorder<T: Clone + Send + 'static>() -> (Listener<T>, Arc<Mutex<Vec<T>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let listener: Listener<T> = Arc::new(move |state: &T| sink.lock().unwrap().push(state.clone()));
    (listener, seen)
}

/// Let spawned local tasks run without advancing virtual time.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
