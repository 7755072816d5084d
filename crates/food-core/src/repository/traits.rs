//! Repository Layer - Core Traits
//!
//! Defines the abstract interface to the foods backend.
//! Implementations can use HTTP, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{DomainResult, FoodId, FoodItem, NewFood};

/// CRUD over the `/foods` collection
///
/// Futures are `?Send`: in the browser they run on the single JS thread.
#[async_trait(?Send)]
pub trait FoodRepository {
    /// `GET /foods`, in server order
    async fn list(&self) -> DomainResult<Vec<FoodItem>>;

    /// `POST /foods`; the backend assigns the id
    async fn create(&self, food: &NewFood) -> DomainResult<FoodItem>;

    /// `PUT /foods/{id}` with the full record
    async fn update(&self, id: &FoodId, food: &FoodItem) -> DomainResult<FoodItem>;

    /// `DELETE /foods/{id}`
    async fn delete(&self, id: &FoodId) -> DomainResult<()>;
}
