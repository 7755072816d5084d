//! Food Dashboard App
//!
//! Root component: header, the two modals, the food grid and the toasts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use food_core::{DashboardConfig, DomainError, FoodDraft, FoodId, FoodItem, FoodPatch};

use crate::commands;
use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood, ToastList};
use crate::context::AppContext;
use crate::store::{
    store_dashboard, store_editing_food, store_food_count, store_foods, store_is_add_modal_open,
    store_is_edit_modal_open, store_is_loaded, store_is_loading, AppState,
};
use crate::toast::{show_toast, Toast};

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_build_env();
    log::info!("[APP] backend at {}, delete policy {}", config.api_base_url, config.delete_policy.as_str());

    let ctx = AppContext::new(config);
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Load foods on mount
    Effect::new(move |_| {
        spawn_local(commands::load_foods(ctx, store));
    });

    let add_modal_open = Signal::derive(move || store_is_add_modal_open(&store));
    let edit_modal_open = Signal::derive(move || store_is_edit_modal_open(&store));
    let editing_food = Signal::derive(move || store_editing_food(&store));

    let on_invalid = Callback::new(move |err: DomainError| {
        log::debug!("[APP] form rejected: {}", err);
        show_toast(ctx, store, |id| Toast::invalid_form(id, &err));
    });

    let on_add = move |draft: FoodDraft| {
        spawn_local(commands::add_food(ctx, store, draft));
    };

    let on_update = move |(id, patch): (FoodId, FoodPatch)| {
        spawn_local(commands::update_food(ctx, store, id, patch));
    };

    let on_edit = move |food: FoodItem| {
        store_dashboard(&store, |d| d.begin_edit(food));
    };

    let on_delete = move |id: FoodId| {
        spawn_local(commands::delete_food(ctx, store, id));
    };

    let on_toggle_available = move |id: FoodId| {
        spawn_local(commands::toggle_food_availability(ctx, store, id));
    };

    view! {
        <Header on_open_modal=move |_: ()| store_dashboard(&store, |d| d.toggle_add_modal()) />

        <ModalAddFood
            is_open=add_modal_open
            on_close=move |_: ()| store_dashboard(&store, |d| d.close_add_modal())
            on_add=on_add
            on_invalid=on_invalid
        />
        <ModalEditFood
            is_open=edit_modal_open
            on_close=move |_: ()| store_dashboard(&store, |d| d.close_edit_modal())
            editing_food=editing_food
            on_update=on_update
            on_invalid=on_invalid
        />

        <main class="foods-container" data-testid="foods-list">
            <For
                each=move || store_foods(&store)
                key=|food| {
                    // Every displayed field, so an edited card re-renders
                    (
                        food.id.clone(),
                        food.name.clone(),
                        food.description.clone(),
                        food.price.to_bits(),
                        food.image.clone(),
                        food.available,
                    )
                }
                children=move |food| {
                    view! {
                        <FoodCard
                            food=food
                            on_edit=on_edit
                            on_delete=on_delete
                            on_toggle_available=on_toggle_available
                        />
                    }
                }
            />
        </main>

        <Show when=move || store_is_loaded(&store) && store_food_count(&store) == 0>
            <p class="empty-state">"No dishes yet. Add the first one."</p>
        </Show>
        <Show when=move || !store_is_loading(&store) && !store_is_loaded(&store)>
            <p class="empty-state">
                "The menu could not be loaded. "
                <button
                    type="button"
                    on:click=move |_| spawn_local(commands::load_foods(ctx, store))
                >
                    "Retry"
                </button>
            </p>
        </Show>

        <ToastList />
    }
}
