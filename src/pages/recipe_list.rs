//! Recipe list page: the signed-in user's recipes as a card grid.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::loader::Loader;
use crate::components::recipe_card::RecipeCard;
use crate::net::api::ApiClient;
use crate::net::types::Recipe;
use crate::state::remote::Remote;
use crate::state::session::SessionStore;
use crate::util::mounted::{is_mounted, mounted_flag};

#[component]
pub fn RecipeListPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let recipes = RwSignal::new(Remote::<Vec<Recipe>>::Loading);

    let alive = mounted_flag();
    if let Some(token) = session.token() {
        leptos::task::spawn_local(async move {
            let result = api.list_recipes(&token).await;
            if is_mounted(&alive) {
                recipes.set(Remote::resolve(result, &session, "recipes"));
            }
        });
    }

    view! {
        <Title text="Your recipes"/>
        <section
            class="recipes-page"
            aria-busy=move || if recipes.with(Remote::is_loading) { "true" } else { "false" }
        >
            <h1 class="recipes-page__title">"YOUR RECIPES"</h1>
            {move || match recipes.get() {
                Remote::Loading => view! { <Loader/> }.into_any(),
                Remote::Ready(list) if list.is_empty() => {
                    view! { <p class="notice">"No recipes yet."</p> }.into_any()
                }
                Remote::Ready(list) => {
                    view! {
                        <div class="recipes-page__grid">
                            {list.into_iter().map(|recipe| view! { <RecipeCard recipe=recipe/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
                Remote::Unavailable(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
            }}
        </section>
    }
}
