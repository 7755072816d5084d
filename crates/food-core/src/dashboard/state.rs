//! Dashboard State
//!
//! The food list plus the two modal flags and the record being edited.
//! Pure transitions only; the controller and the UI decide when to call them.

use crate::domain::{DomainError, DomainResult, Entity, FoodId, FoodItem, FoodPatch};
use super::config::DeletePolicy;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    foods: Vec<FoodItem>,
    add_modal_open: bool,
    edit_modal_open: bool,
    /// Last record handed to `begin_edit`; kept after the modal closes
    editing: Option<FoodItem>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn find(&self, id: &FoodId) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id() == id)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    // ========================
    // Modals
    // ========================

    pub fn is_add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
    }

    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
    }

    pub fn toggle_add_modal(&mut self) {
        self.add_modal_open = !self.add_modal_open;
    }

    pub fn is_edit_modal_open(&self) -> bool {
        self.edit_modal_open
    }

    pub fn editing_food(&self) -> Option<&FoodItem> {
        self.editing.as_ref()
    }

    /// Select a record for editing and open the edit modal
    pub fn begin_edit(&mut self, food: FoodItem) {
        self.editing = Some(food);
        self.edit_modal_open = true;
    }

    pub fn close_edit_modal(&mut self) {
        self.edit_modal_open = false;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    // ========================
    // Backend outcomes
    // ========================

    /// Replace the whole list with the server's, in server order
    pub fn apply_loaded(&mut self, foods: Vec<FoodItem>) {
        self.foods = foods;
    }

    /// Append a created record and close the add modal
    pub fn apply_created(&mut self, food: FoodItem) {
        if let Some(existing) = self.foods.iter_mut().find(|f| f.id == food.id) {
            log::warn!("backend reused id {} on create; replacing local record", food.id);
            *existing = food;
        } else {
            self.foods.push(food);
        }
        self.add_modal_open = false;
    }

    /// Record the edit is based on: the selection when it carries `id`,
    /// otherwise the local record with that id
    fn edit_base(&self, id: &FoodId) -> Option<&FoodItem> {
        self.editing
            .as_ref()
            .filter(|f| f.id() == id)
            .or_else(|| self.find(id))
    }

    /// Full record to send for `PUT /foods/{id}`
    pub fn merged_edit(&self, id: &FoodId, patch: &FoodPatch) -> DomainResult<FoodItem> {
        self.edit_base(id)
            .map(|base| patch.apply_to(base))
            .ok_or_else(|| DomainError::NotFound(format!("food {}", id)))
    }

    /// Swap in the server's version of the record stored under `id`.
    /// The request id wins over whatever id the response carries.
    /// Returns false when the record is no longer listed (e.g. deleted meanwhile).
    fn replace(&mut self, id: &FoodId, mut food: FoodItem) -> bool {
        if food.id != *id {
            log::warn!("backend answered for food {} with id {}; keeping {}", id, food.id, id);
            food.id = id.clone();
        }
        if let Some(editing) = self.editing.as_mut().filter(|f| f.id() == id) {
            *editing = food.clone();
        }
        match self.foods.iter_mut().find(|f| f.id() == id) {
            Some(slot) => {
                *slot = food;
                true
            }
            None => false,
        }
    }

    /// Apply a successful edit of `id` and close the edit modal
    pub fn apply_updated(&mut self, id: &FoodId, food: FoodItem) -> bool {
        let replaced = self.replace(id, food);
        self.edit_modal_open = false;
        replaced
    }

    /// Apply a successful availability switch; modals are untouched
    pub fn apply_toggled(&mut self, id: &FoodId, food: FoodItem) -> bool {
        self.replace(id, food)
    }

    /// Purge a record. Returns the removed record, if it was listed.
    pub fn apply_deleted(&mut self, id: &FoodId) -> Option<FoodItem> {
        let index = self.foods.iter().position(|f| f.id() == id)?;
        Some(self.foods.remove(index))
    }

    /// Settle a delete request according to `policy`
    pub fn apply_delete_outcome(&mut self, id: &FoodId, policy: DeletePolicy, succeeded: bool) -> bool {
        if policy.removes_locally(succeeded) {
            self.apply_deleted(id).is_some()
        } else {
            false
        }
    }
}
