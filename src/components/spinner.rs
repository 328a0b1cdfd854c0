//! Loading indicator shown while a gate is pending.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status">
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}

/// Full-height centered spinner used as the default gate placeholder.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="loading-placeholder">
            <Spinner/>
        </div>
    }
}
