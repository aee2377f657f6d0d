//! Sign-in page: email + password exchanged for an API token.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::alert_dialog::AlertDialog;
use crate::components::backdrop::Backdrop;
use crate::components::copyright::Copyright;
use crate::components::text_field::TextField;
use crate::net::api::ApiClient;
use crate::net::types::Credentials;
use crate::state::session::SessionStore;
use crate::state::sign_in::SignInForm;
use crate::util::mounted::{is_mounted, mounted_flag};
use crate::util::route::AppRoute;

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(SignInForm::default());
    let alive = mounted_flag();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = form.get_untracked();
        if !next.begin_submit() {
            return;
        }
        form.set(next);

        let credentials = credentials_from_input(&email.get_untracked(), &password.get_untracked());
        let api = api.clone();
        let session = session.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api.authenticate(&credentials).await;
            if !is_mounted(&alive) {
                return;
            }
            // A stored token flips the session; the shell guard redirects.
            let mut next = form.get_untracked();
            next.finish(result, &session);
            form.set(next);
        });
    };

    let dismiss = Callback::new(move |()| form.update(SignInForm::dismiss_alert));

    view! {
        <Title text="Sign in"/>
        <section class="auth-page auth-page--split">
            <div class="auth-page__hero" aria-hidden="true"></div>
            <div class="auth-page__panel">
                <span class="auth-page__icon" aria-hidden="true">"🔒"</span>
                <h1 class="auth-page__title">"Sign in"</h1>
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <TextField
                        name="email"
                        label="Email Address"
                        value=email
                        input_type="email"
                        autocomplete="email"
                        error=Signal::derive(move || form.get().email_error)
                    />
                    <TextField
                        name="password"
                        label="Password"
                        value=password
                        input_type="password"
                        autocomplete="current-password"
                        error=Signal::derive(move || form.get().password_error)
                    />
                    <button
                        class="button button--primary button--block"
                        type="submit"
                        disabled=move || form.get().is_submitting()
                    >
                        "Sign In"
                    </button>
                    <a class="auth-form__link" href=AppRoute::SignUp.path()>
                        "Don't have an account? Sign Up"
                    </a>
                </form>
                <Copyright/>
            </div>
        </section>
        <Show when=move || form.get().is_submitting()>
            <Backdrop/>
        </Show>
        {move || {
            form.get()
                .alert
                .map(|message| {
                    view! { <AlertDialog title="Error" content=message button="GO BACK" on_close=dismiss/> }
                })
        }}
    }
}

/// Email is trimmed; the password is sent exactly as typed.
fn credentials_from_input(email: &str, password: &str) -> Credentials {
    Credentials { email: email.trim().to_owned(), password: password.to_owned() }
}
