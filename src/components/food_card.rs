//! Food Card Component
//!
//! One dish in the dashboard grid: picture, details, price, availability
//! switch, edit and delete actions.

use leptos::prelude::*;
use food_core::{format_price, FoodId, FoodItem};

use super::RemoveDishButton;
use crate::store::{store_is_food_available, use_app_store};

#[component]
pub fn FoodCard(
    food: FoodItem,
    #[prop(into)] on_edit: Callback<FoodItem>,
    #[prop(into)] on_delete: Callback<FoodId>,
    #[prop(into)] on_toggle_available: Callback<FoodId>,
) -> impl IntoView {
    let available = food.available;
    let delete_id = food.id.clone();
    let toggle_id = food.id.clone();
    let edit_food = food.clone();
    let switch_id = format!("available-{}", food.id);
    let label_for = switch_id.clone();
    let dish_name = food.name.clone();
    let store = use_app_store();

    view! {
        <div class=if available { "food" } else { "food unavailable" }>
            <header>
                <img src=food.image alt=food.name.clone() />
            </header>
            <section class="body">
                <h2>{food.name}</h2>
                <p>{food.description}</p>
                <p class="price">{format_price(food.price)}</p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        title="Edit dish"
                        on:click=move |_| on_edit.run(edit_food.clone())
                    >
                        "✎"
                    </button>
                    <RemoveDishButton
                        dish_name=dish_name
                        on_remove=move |_: ()| on_delete.run(delete_id.clone())
                    />
                </div>
                <div class="availability-container">
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                    <label for=label_for class="switch">
                        <input
                            id=switch_id
                            type="checkbox"
                            prop:checked=available
                            on:change=move |ev| {
                                // The switch mirrors the stored record; a successful
                                // toggle re-renders the card with the new value
                                let stored = store_is_food_available(&store, &toggle_id)
                                    .unwrap_or(available);
                                event_target::<web_sys::HtmlInputElement>(&ev).set_checked(stored);
                                on_toggle_available.run(toggle_id.clone());
                            }
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}
