//! Top app bar for signed-in screens: brand link and avatar menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the app shell only while the session is authenticated, so it
//! always has a token to fetch the profile avatar with.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::header::{HeaderState, MenuAction};
use crate::state::session::SessionStore;
use crate::util::mounted::{is_mounted, mounted_flag};
use crate::util::route::AppRoute;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let state = RwSignal::new(HeaderState::default());
    let pending = RwSignal::new(None::<AppRoute>);
    let navigate = use_navigate();

    let alive = mounted_flag();
    if let Some(token) = session.token() {
        leptos::task::spawn_local(async move {
            match api.get_profile(&token).await {
                Ok(profile) => {
                    if is_mounted(&alive) {
                        let avatar = profile.avatar().map(str::to_owned);
                        state.update(|s| s.avatar = avatar);
                    }
                }
                // Placeholder avatar stays; the session is not touched here.
                Err(e) => log::warn!("header profile fetch failed: {e}"),
            }
        });
    }

    Effect::new(move || {
        if let Some(target) = pending.get() {
            pending.set(None);
            navigate(&target.path(), NavigateOptions::default());
        }
    });

    let items = MenuAction::ALL
        .into_iter()
        .map(|action| {
            let session = session.clone();
            view! {
                <li role="none">
                    <button
                        class="header__menu-item"
                        type="button"
                        role="menuitem"
                        on:click=move |_| {
                            state.update(|s| s.menu_open = false);
                            pending.set(Some(action.apply(&session)));
                        }
                    >
                        {action.label()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="header">
            <div class="header__inner">
                <a class="header__brand" href=AppRoute::Recipes.path()>
                    "Recipe App"
                </a>
                <div class="header__user">
                    <button
                        class="header__avatar-button"
                        type="button"
                        title="Open settings"
                        aria-haspopup="menu"
                        aria-expanded=move || if state.get().menu_open { "true" } else { "false" }
                        on:click=move |_| state.update(|s| s.menu_open = !s.menu_open)
                    >
                        {move || match state.get().avatar {
                            Some(url) => view! { <img class="avatar" src=url alt="avatar"/> }.into_any(),
                            None => view! { <span class="avatar avatar--placeholder" aria-hidden="true"></span> }.into_any(),
                        }}
                    </button>
                    <ul class="header__menu" class:header__menu--open=move || state.get().menu_open role="menu">
                        {items}
                    </ul>
                </div>
            </div>
        </header>
    }
}
