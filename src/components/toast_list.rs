//! Toast List Component
//!
//! Renders the error channel. Toasts dismiss themselves; clicking one
//! dismisses it early.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, store_toasts, use_app_store};

#[component]
pub fn ToastList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-list" role="alert">
            <For
                each=move || store_toasts(&store)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast error" on:click=move |_| store_dismiss_toast(&store, id)>
                            <strong>{toast.title}</strong>
                            <p>{toast.detail}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
