//! Form Field Component
//!
//! Labelled text input (or textarea) bound to a string signal.

use leptos::prelude::*;

#[component]
pub fn FormField(
    #[prop(into)] label: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(optional, into)] placeholder: String,
    /// Render a textarea instead of a single-line input
    #[prop(optional)] multiline: bool,
    /// Numeric keyboard on mobile
    #[prop(optional)] decimal: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                inputmode=if decimal { "decimal" } else { "text" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            {input}
        </label>
    }
}
