//! Profile page: the signed-in user's account details.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::loader::Loader;
use crate::net::api::ApiClient;
use crate::net::types::UserProfile;
use crate::state::remote::Remote;
use crate::state::session::SessionStore;
use crate::util::mounted::{is_mounted, mounted_flag};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let profile = RwSignal::new(Remote::<UserProfile>::Loading);

    let alive = mounted_flag();
    if let Some(token) = session.token() {
        leptos::task::spawn_local(async move {
            let result = api.get_profile(&token).await;
            if is_mounted(&alive) {
                profile.set(Remote::resolve(result, &session, "your profile"));
            }
        });
    }

    view! {
        <Title text="Profile"/>
        <section class="profile-page">
            {move || match profile.get() {
                Remote::Loading => view! { <Loader/> }.into_any(),
                Remote::Ready(user) => profile_card(&user).into_any(),
                Remote::Unavailable(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
            }}
        </section>
    }
}

fn profile_card(user: &UserProfile) -> impl IntoView {
    let avatar = match user.avatar() {
        Some(url) => view! { <img class="avatar avatar--large" src=url.to_owned() alt="avatar"/> }.into_any(),
        None => view! { <span class="avatar avatar--large avatar--placeholder" aria-hidden="true"></span> }.into_any(),
    };
    view! {
        <div class="profile-card">
            {avatar}
            <h1 class="profile-card__name">{user.display_name()}</h1>
            <p class="profile-card__email">{user.email.clone()}</p>
        </div>
    }
}
