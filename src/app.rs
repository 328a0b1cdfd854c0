//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{
    admin::{AdminAppPage, AdminInfoPage, AdminOfficesPage, AdminUsersPage},
    auth::AuthPage,
    main_page::MainPage,
    user::{UserAppPage, UserInfoPage, UserLikePage},
};
use crate::util::hooks::Services;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the token store and auth client to every view and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Services::from_config(&ClientConfig::from_build_env()));

    view! {
        <Stylesheet id="leptos" href="/pkg/officeboard.css"/>
        <Title text="Office Board"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AuthPage/>
                <Route path=StaticSegment("main") view=MainPage/>
                <Route path=StaticSegment("user-info") view=UserInfoPage/>
                <Route path=StaticSegment("user-like") view=UserLikePage/>
                <Route path=StaticSegment("user-app") view=UserAppPage/>
                <Route path=StaticSegment("admin-info") view=AdminInfoPage/>
                <Route path=StaticSegment("admin-offices") view=AdminOfficesPage/>
                <Route path=StaticSegment("admin-app") view=AdminAppPage/>
                <Route path=StaticSegment("admin-users") view=AdminUsersPage/>
            </Routes>
        </Router>
    }
}
