//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::header::Header;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    profile::ProfilePage, recipe_detail::RecipeDetailPage, recipe_list::RecipeListPage, sign_in::SignInPage,
    sign_up::SignUpPage,
};
use crate::state::session::{SessionStatus, SessionStore};
use crate::util::auth::{install_route_guard, install_storage_sync, route_decision, session_signal};
use crate::util::route::{AppRoute, RouteDecision};

/// Root application component.
///
/// Provides the session store, API client and session status signal, then
/// hands rendering to the guarded shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = SessionStore::browser(&config);
    let status = session_signal(&session);
    install_storage_sync(&session);
    provide_context(session);
    provide_context(ApiClient::from_config(&config));
    provide_context(status);

    view! {
        <Title text="Recipe App"/>
        <Router>
            <AppShell/>
        </Router>
    }
}

/// Evaluates the navigation guard for the current location and renders the
/// matching screen. A screen the guard redirects away from is never mounted.
#[component]
fn AppShell() -> impl IntoView {
    let status = expect_context::<RwSignal<SessionStatus>>();
    let location = use_location();
    let decision = route_decision(status, location.pathname);
    install_route_guard(decision, use_navigate());

    view! {
        <Show when=move || status.get().is_authenticated()>
            <Header/>
        </Show>
        <main class="app-main">
            {move || match decision.get() {
                RouteDecision::Render(route) => render_route(route),
                RouteDecision::Redirect(_) => ().into_any(),
            }}
        </main>
    }
}

fn render_route(route: AppRoute) -> AnyView {
    match route {
        AppRoute::SignUp => view! { <SignUpPage/> }.into_any(),
        AppRoute::SignIn => view! { <SignInPage/> }.into_any(),
        AppRoute::Recipes => view! { <RecipeListPage/> }.into_any(),
        AppRoute::RecipeView { id } => view! { <RecipeDetailPage id=id/> }.into_any(),
        AppRoute::RecipeEdit { id } => view! { <RecipeDetailPage id=id editing=true/> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage/> }.into_any(),
    }
}
