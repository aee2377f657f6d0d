//! Sign-up page: account registration followed by a confirmation dialog.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert_dialog::AlertDialog;
use crate::components::backdrop::Backdrop;
use crate::components::copyright::Copyright;
use crate::components::text_field::TextField;
use crate::net::api::ApiClient;
use crate::net::types::Registration;
use crate::state::sign_up::{CREATED_MESSAGE, CREATED_TITLE, SignUpForm, SignUpPhase};
use crate::util::mounted::{is_mounted, mounted_flag};
use crate::util::route::AppRoute;

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(SignUpForm::default());
    let alive = mounted_flag();

    Effect::new(move || {
        if form.get().phase == SignUpPhase::Done {
            navigate(&AppRoute::SignIn.path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = form.get_untracked();
        if !next.begin_submit() {
            return;
        }
        form.set(next);

        let registration = registration_from_input(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        );
        let api = api.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_account(&registration).await;
            if is_mounted(&alive) {
                form.update(|f| f.finish(result));
            }
        });
    };

    let close_confirmation = Callback::new(move |()| {
        form.update(|f| {
            f.dismiss_confirmation();
        });
    });
    let dismiss_alert = Callback::new(move |()| form.update(SignUpForm::dismiss_alert));

    view! {
        <Title text="Sign up"/>
        <section class="auth-page">
            <div class="auth-page__panel">
                <span class="auth-page__icon" aria-hidden="true">"🔒"</span>
                <h1 class="auth-page__title">"Sign up"</h1>
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <div class="auth-form__row">
                        <TextField
                            name="first_name"
                            label="First Name"
                            value=first_name
                            autocomplete="given-name"
                            error=Signal::derive(move || form.get().first_name_error)
                        />
                        <TextField
                            name="last_name"
                            label="Last Name"
                            value=last_name
                            autocomplete="family-name"
                            error=Signal::derive(move || form.get().last_name_error)
                        />
                    </div>
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
                        autocomplete="new-password"
                        error=Signal::derive(move || form.get().password_error)
                    />
                    <button
                        class="button button--primary button--block"
                        type="submit"
                        disabled=move || form.get().is_submitting()
                    >
                        "Sign Up"
                    </button>
                    <a class="auth-form__link" href=AppRoute::SignIn.path()>
                        "Already have an account? Sign in"
                    </a>
                </form>
                <Copyright/>
            </div>
        </section>
        <Show when=move || form.get().is_submitting()>
            <Backdrop/>
        </Show>
        <Show when=move || form.get().show_confirmation()>
            <AlertDialog title=CREATED_TITLE content=CREATED_MESSAGE button="OK" on_close=close_confirmation/>
        </Show>
        {move || {
            form.get()
                .alert
                .map(|message| {
                    view! { <AlertDialog title="Error" content=message button="GO BACK" on_close=dismiss_alert/> }
                })
        }}
    }
}

fn registration_from_input(first_name: &str, last_name: &str, email: &str, password: &str) -> Registration {
    Registration {
        email: email.trim().to_owned(),
        password: password.to_owned(),
        first_name: first_name.trim().to_owned(),
        last_name: last_name.trim().to_owned(),
    }
}
