//! Top navigation for signed-in pages, with admin and user variants.

#[cfg(test)]
#[path = "main_header_test.rs"]
mod main_header_test;

use leptos::prelude::*;

use crate::state::role::Role;
use crate::state::session::logout;
use crate::util::hooks::use_services;
use crate::util::nav::browser_navigate;

/// Navigation entries `(href, label)` for a role.
pub fn nav_links(role: &Role) -> &'static [(&'static str, &'static str)] {
    if role.is_admin() {
        &[
            ("/main", "Chat"),
            ("/admin-info", "Profile"),
            ("/admin-offices", "Offices"),
            ("/admin-app", "Applications"),
            ("/admin-users", "Users"),
        ]
    } else {
        &[
            ("/main", "Chat"),
            ("/user-info", "Profile"),
            ("/user-like", "Favorites"),
            ("/user-app", "Applications"),
        ]
    }
}

#[component]
pub fn MainHeader(role: Role) -> impl IntoView {
    let services = use_services();
    let navigate = browser_navigate();
    let on_logout = move |_| logout(&services.tokens, &navigate);

    let badge = if role.is_admin() { "header__badge header__badge--admin" } else { "header__badge" };

    view! {
        <header class="header">
            <nav class="header__nav">
                {nav_links(&role)
                    .iter()
                    .map(|(href, label)| view! { <a class="header__link" href=*href>{*label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
            <span class=badge>{role.as_str().to_owned()}</span>
            <button class="btn header__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
