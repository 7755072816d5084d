//! Edit Food Modal
//!
//! Same form as the add modal, pre-filled from the dish selected for editing.

use leptos::prelude::*;
use food_core::{DomainError, FoodId, FoodItem, FoodPatch};

use super::{FormField, Modal};

#[component]
pub fn ModalEditFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    /// Dish selected for editing
    #[prop(into)] editing_food: Signal<Option<FoodItem>>,
    /// Receives the target id and a validated patch
    #[prop(into)] on_update: Callback<(FoodId, FoodPatch)>,
    #[prop(into)] on_invalid: Callback<DomainError>,
) -> impl IntoView {
    let (image, set_image) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Refill whenever the modal opens or the selection changes
    Effect::new(move |_| {
        let open = is_open.get();
        let food = editing_food.get();
        if let (true, Some(food)) = (open, food) {
            set_image.set(food.image);
            set_name.set(food.name);
            set_price.set(format!("{:.2}", food.price));
            set_description.set(food.description);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(food) = editing_food.get_untracked() else {
            return;
        };
        let patch = FoodPatch::from_form(
            &image.get_untracked(),
            &name.get_untracked(),
            &price.get_untracked(),
            &description.get_untracked(),
        );
        match patch {
            Ok(patch) => on_update.run((food.id, patch)),
            Err(e) => on_invalid.run(e),
        }
    };

    view! {
        <Modal is_open=is_open on_close=on_close>
            <form class="food-form" on:submit=submit>
                <h1>"Edit dish"</h1>
                <FormField label="Image URL" value=image set_value=set_image placeholder="Paste the image link here" />
                <FormField label="Dish name" value=name set_value=set_name />
                <FormField label="Price" value=price set_value=set_price decimal=true />
                <FormField label="Description" value=description set_value=set_description multiline=true />
                <button type="submit" class="submit-btn">
                    <span class="text">"Save changes"</span>
                </button>
            </form>
        </Modal>
    }
}
