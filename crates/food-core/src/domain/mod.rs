//! Domain Layer
//!
//! Contains the food entity and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod food;

pub use entity::{Entity, DomainError, DomainResult, Operation};
pub use food::{format_price, FoodDraft, FoodId, FoodItem, FoodPatch, NewFood};
