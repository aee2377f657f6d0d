//! Inline loading indicator: three pulsing dots.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="progressbar" aria-label="Loading">
            <span class="loader__dot"></span>
            <span class="loader__dot"></span>
            <span class="loader__dot"></span>
        </div>
    }
}
