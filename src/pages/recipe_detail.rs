//! Single recipe page, used for both the view and edit routes.
//!
//! Editing is not supported by this client; the edit route renders the same
//! read-only detail with a notice.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::loader::Loader;
use crate::net::api::ApiClient;
use crate::net::types::{Ingredient, RecipeDetail};
use crate::state::remote::Remote;
use crate::state::session::SessionStore;
use crate::util::mounted::{is_mounted, mounted_flag};
use crate::util::route::AppRoute;

pub const READ_ONLY_NOTICE: &str = "Editing recipes is not available yet. Showing the recipe as saved.";

#[component]
pub fn RecipeDetailPage(id: u64, #[prop(optional)] editing: bool) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let recipe = RwSignal::new(Remote::<RecipeDetail>::Loading);

    let alive = mounted_flag();
    if let Some(token) = session.token() {
        leptos::task::spawn_local(async move {
            let result = api.get_recipe(&token, id).await;
            if is_mounted(&alive) {
                recipe.set(Remote::resolve(result, &session, "the recipe"));
            }
        });
    }

    let title = move || {
        recipe.with(|r| r.ready().map_or_else(|| format!("Recipe {id}"), |d| d.summary.title.clone()))
    };

    view! {
        <Title text=title/>
        <section class="recipe-page">
            <a class="recipe-page__back" href=AppRoute::Recipes.path()>
                "← Back to recipes"
            </a>
            <Show when=move || editing>
                <p class="notice">{READ_ONLY_NOTICE}</p>
            </Show>
            {move || match recipe.get() {
                Remote::Loading => view! { <Loader/> }.into_any(),
                Remote::Ready(detail) => detail_view(detail).into_any(),
                Remote::Unavailable(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
            }}
        </section>
    }
}

fn detail_view(detail: RecipeDetail) -> impl IntoView {
    let RecipeDetail { summary, description, ingredients } = detail;
    let time = summary.time_label();
    let price = summary.price_label();
    let link = Some(summary.link).filter(|l| !l.is_empty());
    let description = Some(description).filter(|d| !d.trim().is_empty());

    view! {
        <article class="recipe-detail">
            <h1 class="recipe-detail__title">{summary.title}</h1>
            <p class="recipe-detail__meta">{time} " · " {price}</p>
            <div class="recipe-detail__gallery">
                {summary
                    .images
                    .into_iter()
                    .map(|img| view! { <img class="recipe-detail__image" src=img.image alt="recipe-image"/> })
                    .collect_view()}
            </div>
            <ul class="chips">
                {summary.tags.into_iter().map(|tag| view! { <li class="chip">{tag.name}</li> }).collect_view()}
            </ul>
            {description.map(|text| view! { <p class="recipe-detail__description">{text}</p> })}
            <h2 class="recipe-detail__heading">"Ingredients"</h2>
            {ingredients_view(ingredients)}
            {link.map(|href| {
                view! {
                    <a class="recipe-detail__link" href=href target="_blank" rel="noopener noreferrer">
                        "Original recipe"
                    </a>
                }
            })}
        </article>
    }
}

fn ingredients_view(ingredients: Vec<Ingredient>) -> AnyView {
    if ingredients.is_empty() {
        return view! { <p class="notice">"No ingredients listed."</p> }.into_any();
    }
    view! {
        <ul class="recipe-detail__ingredients">
            {ingredients.into_iter().map(|i| view! { <li>{i.name}</li> }).collect_view()}
        </ul>
    }
    .into_any()
}
