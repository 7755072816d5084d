//! Dashboard Controller
//!
//! Mediates load/create/update/delete through a `FoodRepository` and keeps a
//! `DashboardState` in sync with the outcomes. The state lives behind a
//! `StateHandle`, so the same controller drives a plain `RefCell` in tests
//! and the reactive store in the browser.

use std::cell::RefCell;

use crate::domain::{DomainError, DomainResult, FoodDraft, FoodId, FoodItem, FoodPatch, Operation};
use crate::repository::FoodRepository;
use super::config::DashboardConfig;
use super::state::DashboardState;

/// Shared access to the dashboard state.
///
/// Closures never span an `.await`; the controller reads, awaits the
/// backend, then writes.
pub trait StateHandle {
    fn read<T>(&self, f: impl FnOnce(&DashboardState) -> T) -> T;
    fn write<T>(&self, f: impl FnOnce(&mut DashboardState) -> T) -> T;
}

impl StateHandle for RefCell<DashboardState> {
    fn read<T>(&self, f: impl FnOnce(&DashboardState) -> T) -> T {
        f(&*self.borrow())
    }

    fn write<T>(&self, f: impl FnOnce(&mut DashboardState) -> T) -> T {
        f(&mut *self.borrow_mut())
    }
}

pub struct Dashboard<R: FoodRepository, S: StateHandle = RefCell<DashboardState>> {
    repo: R,
    state: S,
    config: DashboardConfig,
}

/// Log a failed operation and pass the result through
fn logged<T>(operation: Operation, result: DomainResult<T>) -> DomainResult<T> {
    if let Err(e) = &result {
        log::warn!("[dashboard] {} failed: {}", operation, e);
    }
    result
}

impl<R: FoodRepository> Dashboard<R> {
    /// Controller owning a fresh, empty state
    pub fn new(repo: R, config: DashboardConfig) -> Self {
        Self::with_state(repo, RefCell::new(DashboardState::new()), config)
    }
}

impl<R: FoodRepository, S: StateHandle> Dashboard<R, S> {
    pub fn with_state(repo: R, state: S, config: DashboardConfig) -> Self {
        Self { repo, state, config }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        self.state.read(DashboardState::clone)
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Replace local state with the server's collection
    pub async fn load_all(&self) -> DomainResult<usize> {
        let foods = logged(Operation::Load, self.repo.list().await)?;
        log::info!("[dashboard] loaded {} foods", foods.len());
        Ok(self.state.write(|s| {
            s.apply_loaded(foods);
            s.len()
        }))
    }

    /// Create a dish; it is always sent as available
    pub async fn create(&self, draft: FoodDraft) -> DomainResult<FoodItem> {
        let new_food = draft.into_new_food();
        let created = logged(Operation::Create, self.repo.create(&new_food).await)?;
        log::info!("[dashboard] created food {}", created.id);
        self.state.write(|s| s.apply_created(created.clone()));
        Ok(created)
    }

    /// Merge `patch` onto the record being edited and save it
    pub async fn update(&self, id: &FoodId, patch: &FoodPatch) -> DomainResult<FoodItem> {
        let merged = logged(Operation::Update, self.state.read(|s| s.merged_edit(id, patch)))?;
        let updated = logged(Operation::Update, self.repo.update(id, &merged).await)?;
        let updated = FoodItem { id: id.clone(), ..updated };
        if !self.state.write(|s| s.apply_updated(id, updated.clone())) {
            log::debug!("[dashboard] food {} was no longer listed after update", id);
        }
        Ok(updated)
    }

    /// Delete a dish. Local removal follows the configured `DeletePolicy`;
    /// the request outcome is returned either way.
    pub async fn delete(&self, id: &FoodId) -> DomainResult<()> {
        let result = logged(Operation::Delete, self.repo.delete(id).await);
        let policy = self.config.delete_policy;
        let removed = self
            .state
            .write(|s| s.apply_delete_outcome(id, policy, result.is_ok()));
        log::debug!("[dashboard] delete {}: removed locally = {}", id, removed);
        result
    }

    /// Flip availability of a listed dish
    pub async fn toggle_available(&self, id: &FoodId) -> DomainResult<FoodItem> {
        let toggled = logged(
            Operation::ToggleAvailability,
            self.state
                .read(|s| s.find(id).map(FoodItem::with_availability_toggled))
                .ok_or_else(|| DomainError::NotFound(format!("food {}", id))),
        )?;
        let updated = logged(Operation::ToggleAvailability, self.repo.update(id, &toggled).await)?;
        let updated = FoodItem { id: id.clone(), ..updated };
        self.state.write(|s| s.apply_toggled(id, updated.clone()));
        Ok(updated)
    }

    pub fn open_add_modal(&self) {
        self.state.write(DashboardState::open_add_modal);
    }

    pub fn close_add_modal(&self) {
        self.state.write(DashboardState::close_add_modal);
    }

    pub fn toggle_add_modal(&self) {
        self.state.write(DashboardState::toggle_add_modal);
    }

    pub fn begin_edit(&self, food: FoodItem) {
        self.state.write(|s| s.begin_edit(food));
    }

    pub fn close_edit_modal(&self) {
        self.state.write(DashboardState::close_edit_modal);
    }

    pub fn toggle_edit_modal(&self) {
        self.state.write(DashboardState::toggle_edit_modal);
    }
}
