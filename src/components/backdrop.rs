//! Full-screen progress overlay shown while a form submission is in flight.

use leptos::prelude::*;

#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="backdrop" aria-busy="true">
            <span class="backdrop__spinner" role="progressbar" aria-label="Submitting"></span>
        </div>
    }
}
