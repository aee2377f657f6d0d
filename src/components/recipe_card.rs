//! Summary card for one recipe in the list grid.

use leptos::prelude::*;

use crate::net::types::Recipe;
use crate::util::route::AppRoute;

/// Card with thumbnail, title, time and price, plus view/edit actions.
#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let view_href = AppRoute::RecipeView { id: recipe.id }.path();
    let edit_href = AppRoute::RecipeEdit { id: recipe.id }.path();
    let media_href = view_href.clone();
    let time = recipe.time_label();
    let price = recipe.price_label();
    let thumbnail = recipe.thumbnail().to_owned();

    let media = if thumbnail.is_empty() {
        view! { <span class="recipe-card__placeholder" aria-hidden="true"></span> }.into_any()
    } else {
        view! { <img class="recipe-card__image" src=thumbnail alt="recipe-image"/> }.into_any()
    };

    view! {
        <article class="recipe-card">
            <a class="recipe-card__media" href=media_href>
                {media}
            </a>
            <div class="recipe-card__body">
                <h2 class="recipe-card__title">{recipe.title}</h2>
                <p class="recipe-card__meta">{time}</p>
                <p class="recipe-card__meta">{price}</p>
            </div>
            <div class="recipe-card__actions">
                <a class="button button--small" href=view_href>"View"</a>
                <a class="button button--small" href=edit_href>"Edit"</a>
            </div>
        </article>
    }
}
