//! Main page: header plus the chat area, for any signed-in role.

use leptos::prelude::*;

use crate::components::access_gate::AccessGate;
use crate::components::main_header::MainHeader;
use crate::state::role::Role;

#[component]
pub fn MainPage() -> impl IntoView {
    view! {
        <AccessGate let:role>
            <MainHeader role=role.clone()/>
            <ChatArea role/>
        </AccessGate>
    }
}

/// Chat host. Message transport lives outside this crate; the area only
/// needs the viewer's role to label the conversation.
#[component]
fn ChatArea(role: Role) -> impl IntoView {
    let title = if role.is_admin() { "Support inbox" } else { "Chat with support" };
    view! {
        <section class="chat">
            <h2 class="chat__title">{title}</h2>
            <div class="chat__messages"></div>
        </section>
    }
}
