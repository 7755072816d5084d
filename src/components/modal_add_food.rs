//! Add Food Modal
//!
//! Form for creating a new dish. Validation happens before anything is sent.

use leptos::prelude::*;
use food_core::{DomainError, FoodDraft};

use super::{FormField, Modal};

#[component]
pub fn ModalAddFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    /// Receives a validated draft
    #[prop(into)] on_add: Callback<FoodDraft>,
    /// Receives validation errors
    #[prop(into)] on_invalid: Callback<DomainError>,
) -> impl IntoView {
    let (image, set_image) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Start from a blank form after every close; a failed create keeps the modal open
    Effect::new(move |_| {
        if !is_open.get() {
            set_image.set(String::new());
            set_name.set(String::new());
            set_price.set(String::new());
            set_description.set(String::new());
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = FoodDraft::from_form(
            &image.get_untracked(),
            &name.get_untracked(),
            &price.get_untracked(),
            &description.get_untracked(),
        );
        match draft {
            Ok(draft) => on_add.run(draft),
            Err(e) => on_invalid.run(e),
        }
    };

    view! {
        <Modal is_open=is_open on_close=on_close>
            <form class="food-form" on:submit=submit>
                <h1>"New dish"</h1>
                <FormField label="Image URL" value=image set_value=set_image placeholder="Paste the image link here" />
                <FormField label="Dish name" value=name set_value=set_name placeholder="Ex: Moda Italiana" />
                <FormField label="Price" value=price set_value=set_price placeholder="Ex: 19.90" decimal=true />
                <FormField label="Description" value=description set_value=set_description multiline=true />
                <button type="submit" class="submit-btn">
                    <span class="text">"Add dish"</span>
                </button>
            </form>
        </Modal>
    }
}
