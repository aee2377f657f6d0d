//! Modal dialog with a single acknowledge button.

use leptos::prelude::*;

/// Blocking message dialog. Clicking the scrim or the button closes it.
#[component]
pub fn AlertDialog(
    #[prop(into)] title: String,
    #[prop(into)] content: String,
    #[prop(into)] button: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-scrim" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="alertdialog"
                aria-labelledby="alert-dialog-title"
                aria-describedby="alert-dialog-description"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <h2 id="alert-dialog-title" class="dialog__title">{title}</h2>
                <p id="alert-dialog-description" class="dialog__content">{content}</p>
                <div class="dialog__actions">
                    <button class="button button--text" type="button" on:click=move |_| on_close.run(())>
                        {button}
                    </button>
                </div>
            </div>
        </div>
    }
}
