//! In-Memory Food Repository
//!
//! Behaves like a json-server backend held in process. Used for tests and
//! offline demos; failures can be injected per operation.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Entity, FoodId, FoodItem, NewFood, Operation};
use super::traits::FoodRepository;

#[derive(Debug, Default)]
pub struct MemoryFoodRepository {
    foods: RefCell<Vec<FoodItem>>,
    next_id: Cell<u64>,
    failures: RefCell<HashMap<Operation, DomainError>>,
    calls: RefCell<Vec<Operation>>,
}

impl MemoryFoodRepository {
    pub fn new() -> Self {
        Self::with_foods(Vec::new())
    }

    /// Seed the backend. New ids continue after the highest numeric seed id.
    pub fn with_foods(foods: Vec<FoodItem>) -> Self {
        let max_id = foods
            .iter()
            .filter_map(|f| f.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            foods: RefCell::new(foods),
            next_id: Cell::new(max_id.saturating_add(1)),
            ..Default::default()
        }
    }

    /// Make every call of `operation` fail with `error` until `recover`
    pub fn fail(&self, operation: Operation, error: DomainError) {
        self.failures.borrow_mut().insert(operation, error);
    }

    pub fn recover(&self, operation: Operation) {
        self.failures.borrow_mut().remove(&operation);
    }

    /// Backend-side contents
    pub fn snapshot(&self) -> Vec<FoodItem> {
        self.foods.borrow().clone()
    }

    /// Operations received so far, in order
    pub fn calls(&self) -> Vec<Operation> {
        self.calls.borrow().clone()
    }

    fn enter(&self, operation: Operation) -> DomainResult<()> {
        self.calls.borrow_mut().push(operation);
        match self.failures.borrow().get(&operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn not_found(id: &FoodId) -> DomainError {
        DomainError::Status {
            status: 404,
            message: format!("food {} does not exist", id),
        }
    }
}

#[async_trait(?Send)]
impl FoodRepository for MemoryFoodRepository {
    async fn list(&self) -> DomainResult<Vec<FoodItem>> {
        self.enter(Operation::Load)?;
        Ok(self.snapshot())
    }

    async fn create(&self, food: &NewFood) -> DomainResult<FoodItem> {
        self.enter(Operation::Create)?;
        let next = self.next_id.get();
        let id = FoodId::new(next.to_string());
        // Only reachable once the counter saturated at u64::MAX
        if self.foods.borrow().iter().any(|f| f.id == id) {
            return Err(DomainError::Status {
                status: 500,
                message: format!("id {} is already taken", id),
            });
        }
        self.next_id.set(next.saturating_add(1));

        let created = FoodItem {
            id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            image: food.image.clone(),
            available: food.available,
        };
        self.foods.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &FoodId, food: &FoodItem) -> DomainResult<FoodItem> {
        // Toggle and edit share the PUT route; the memory backend books both as updates
        self.enter(Operation::Update)?;
        let mut foods = self.foods.borrow_mut();
        let slot = foods
            .iter_mut()
            .find(|f| f.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = FoodItem {
            id: id.clone(),
            ..food.clone()
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: &FoodId) -> DomainResult<()> {
        self.enter(Operation::Delete)?;
        let mut foods = self.foods.borrow_mut();
        let before = foods.len();
        foods.retain(|f| f.id() != id);
        if foods.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
