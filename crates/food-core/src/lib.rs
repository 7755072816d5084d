//! Food Dashboard Core
//!
//! Layered architecture:
//! - domain: Food entity, form payloads and errors
//! - repository: Backend access (HTTP and in-memory)
//! - dashboard: Session state and the controller driving it

pub mod domain;
pub mod repository;
pub mod dashboard;

pub use domain::{
    format_price, DomainError, DomainResult, Entity, FoodDraft, FoodId, FoodItem, FoodPatch,
    NewFood, Operation,
};
pub use repository::{FoodRepository, HttpFoodRepository, MemoryFoodRepository};
pub use dashboard::{Dashboard, DashboardConfig, DashboardState, DeletePolicy, StateHandle};
