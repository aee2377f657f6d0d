//! Footer line under the auth forms.

use leptos::prelude::*;

const PROJECT_URL: &str = "https://github.com/snnbotchway/recipe-app-api";

#[component]
pub fn Copyright() -> impl IntoView {
    let year = current_year().map(|y| format!(" {y}"));
    view! {
        <p class="copyright">
            "Copyright © "
            <a class="copyright__link" href=PROJECT_URL>"Recipe App"</a>
            {year}
            "."
        </p>
    }
}

#[cfg(feature = "csr")]
fn current_year() -> Option<u32> {
    Some(js_sys::Date::new_0().get_full_year())
}

#[cfg(not(feature = "csr"))]
fn current_year() -> Option<u32> {
    None
}
