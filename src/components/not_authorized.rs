//! Default fallback for a denied gate.

use leptos::prelude::*;

use crate::state::access::Requirement;
use crate::state::session::AUTH_PATH;

#[component]
pub fn NotAuthorized(#[prop(optional)] requirement: Requirement) -> impl IntoView {
    let message = match requirement {
        Requirement::Authenticated => "Please sign in to continue.",
        Requirement::Admin => "This page is available to administrators only.",
    };

    view! {
        <div class="not-authorized">
            <h2>"Access denied"</h2>
            <p>{message}</p>
            <a class="btn btn--primary" href=AUTH_PATH>"Go to sign in"</a>
        </div>
    }
}
