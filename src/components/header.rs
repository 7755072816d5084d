//! Header Component
//!
//! Brand bar with the button that opens the add modal.

use leptos::prelude::*;

#[component]
pub fn Header(
    /// Opens the add-dish modal
    #[prop(into)] on_open_modal: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <span class="logo">"GoRestaurant"</span>
                <nav>
                    <button
                        type="button"
                        class="new-food-btn"
                        on:click=move |_| on_open_modal.run(())
                    >
                        <span class="text">"New dish"</span>
                        <span class="icon">"+"</span>
                    </button>
                </nav>
            </div>
        </header>
    }
}
