//! Remove Dish Button
//!
//! Trash icon that asks "Remove <dish>?" in place before deleting.

use leptos::prelude::*;

#[component]
pub fn RemoveDishButton(
    /// Shown in the confirmation prompt
    #[prop(into)] dish_name: String,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let prompt = format!("Remove {}?", dish_name);
    let title = format!("Remove {}", dish_name);

    move || {
        if asking.get() {
            view! {
                <span class="remove-prompt" role="alertdialog">
                    <span>{prompt.clone()}</span>
                    <button
                        type="button"
                        class="remove-yes"
                        on:click=move |_| {
                            set_asking.set(false);
                            on_remove.run(());
                        }
                    >
                        "Yes"
                    </button>
                    <button type="button" class="remove-no" on:click=move |_| set_asking.set(false)>
                        "No"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    type="button"
                    class="icon"
                    title=title.clone()
                    on:click=move |_| set_asking.set(true)
                >
                    "🗑"
                </button>
            }
            .into_any()
        }
    }
}
