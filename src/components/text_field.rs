//! Labelled text input bound to a string signal, with an error helper line.

use leptos::prelude::*;

/// Form field whose helper text shows the server's message for this field.
///
/// The field is marked invalid whenever `error` holds a message.
#[component]
pub fn TextField(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "off")] autocomplete: &'static str,
) -> impl IntoView {
    let input_id = format!("field-{name}");
    let helper_id = format!("{input_id}-helper");
    let label_for = input_id.clone();
    let described_by = helper_id.clone();

    view! {
        <div class="text-field" class:text-field--error=move || error.get().is_some()>
            <label class="text-field__label" for=label_for>
                {label}
                " *"
            </label>
            <input
                id=input_id
                class="text-field__input"
                name=name
                type=input_type
                autocomplete=autocomplete
                required=true
                aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                aria-describedby=described_by
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <p id=helper_id class="text-field__helper">
                {move || error.get().unwrap_or_default()}
            </p>
        </div>
    }
}
