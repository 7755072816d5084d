//! Modal Component
//!
//! Overlay that renders its children while open. Clicking the backdrop closes it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal-content"
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
