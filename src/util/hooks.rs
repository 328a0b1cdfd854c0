//! Leptos glue for the session controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each hook creates a controller scoped to the calling component, mirrors
//! its state into a signal, and registers `teardown` with `on_cleanup` so no
//! pending lookup or timer outlives the view.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::{HttpAuthClient, SharedAuthClient};
use crate::state::alert::{AlertController, AlertState};
use crate::state::role::{RoleResolver, RoleState};
use crate::state::token::SharedTokenStore;

/// Injected capabilities shared by every view.
#[derive(Clone)]
pub struct Services {
    pub tokens: SharedTokenStore,
    pub client: SharedAuthClient,
}

impl Services {
    /// Browser token storage and the HTTP client. Non-browser builds get an
    /// in-memory token slot.
    pub fn from_config(config: &ClientConfig) -> Self {
        #[cfg(feature = "hydrate")]
        let tokens: SharedTokenStore =
            Arc::new(crate::state::token::BrowserTokenStore::new(&config.token_storage_key));
        #[cfg(not(feature = "hydrate"))]
        let tokens: SharedTokenStore = Arc::new(crate::state::token::MemoryTokenStore::new());

        Self { tokens, client: Arc::new(HttpAuthClient::new(config)) }
    }
}

pub fn use_services() -> Services {
    expect_context::<Services>()
}

/// Start a role resolution owned by the calling component.
///
/// The lookup runs only in the browser; server rendering stays in the
/// loading phase.
pub fn use_role() -> (ReadSignal<RoleState>, RoleResolver) {
    let services = use_services();
    let state = RwSignal::new(RoleState::Loading);
    let resolver = RoleResolver::with_listener(
        services.tokens,
        services.client,
        Arc::new(move |next: &RoleState| state.set(next.clone())),
    );

    let owned = resolver.clone();
    on_cleanup(move || owned.teardown());

    #[cfg(feature = "hydrate")]
    resolver.resolve();

    (state.read_only(), resolver)
}

/// Alert slot owned by the calling component.
pub fn use_alert() -> (ReadSignal<AlertState>, AlertController) {
    let state = RwSignal::new(AlertState::default());
    let alerts = AlertController::with_listener(Arc::new(move |next: &AlertState| state.set(next.clone())));

    let owned = alerts.clone();
    on_cleanup(move || owned.teardown());

    (state.read_only(), alerts)
}
