//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::items::ItemsState;

/// Root component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Auth starts from the persisted session so a reload stays signed in.
    let auth = RwSignal::new(AuthState::restored());
    let items = RwSignal::new(ItemsState::default());

    provide_context(auth);
    provide_context(items);

    view! {
        <Title text="Find & Seek"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
