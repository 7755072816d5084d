//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod modal;
mod form_field;
mod modal_add_food;
mod modal_edit_food;
mod food_card;
mod remove_dish_button;
mod toast_list;

pub use header::Header;
pub use modal::Modal;
pub use form_field::FormField;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
pub use food_card::FoodCard;
pub use remove_dish_button::RemoveDishButton;
pub use toast_list::ToastList;
