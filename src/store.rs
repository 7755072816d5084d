//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The dashboard
//! itself is the `DashboardState` from food-core; all writes go through its
//! transitions.

use leptos::prelude::*;
use reactive_stores::Store;
use food_core::{DashboardState, FoodId, FoodItem, StateHandle};
use crate::toast::Toast;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Food list, modal flags and edit selection
    pub dashboard: DashboardState,
    /// Load in flight
    pub loading: bool,
    /// The list reflects a successful load
    pub loaded: bool,
    /// Error channel shown as toasts
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// The store's dashboard field as controller state. Reads are untracked;
/// writes notify subscribers.
#[derive(Clone, Copy)]
pub struct StoreDashboard(pub AppStore);

impl StateHandle for StoreDashboard {
    fn read<T>(&self, f: impl FnOnce(&DashboardState) -> T) -> T {
        f(&*self.0.dashboard().read_untracked())
    }

    fn write<T>(&self, f: impl FnOnce(&mut DashboardState) -> T) -> T {
        f(&mut *self.0.dashboard().write())
    }
}

// ========================
// Store Helper Functions
// ========================

/// Run a transition on the dashboard state
pub fn store_dashboard<T>(store: &AppStore, f: impl FnOnce(&mut DashboardState) -> T) -> T {
    StoreDashboard(*store).write(f)
}

/// Current foods (tracked)
pub fn store_foods(store: &AppStore) -> Vec<FoodItem> {
    store.dashboard().read().foods().to_vec()
}

pub fn store_food_count(store: &AppStore) -> usize {
    store.dashboard().read().len()
}

pub fn store_is_add_modal_open(store: &AppStore) -> bool {
    store.dashboard().read().is_add_modal_open()
}

pub fn store_is_edit_modal_open(store: &AppStore) -> bool {
    store.dashboard().read().is_edit_modal_open()
}

pub fn store_editing_food(store: &AppStore) -> Option<FoodItem> {
    store.dashboard().read().editing_food().cloned()
}

/// Stored availability of a dish (untracked)
pub fn store_is_food_available(store: &AppStore, id: &FoodId) -> Option<bool> {
    store.dashboard().read_untracked().find(id).map(|f| f.available)
}

pub fn store_is_loading(store: &AppStore) -> bool {
    store.loading().get()
}

pub fn store_set_loading(store: &AppStore, loading: bool) {
    store.loading().set(loading);
}

pub fn store_is_loaded(store: &AppStore) -> bool {
    store.loaded().get()
}

pub fn store_set_loaded(store: &AppStore, loaded: bool) {
    store.loaded().set(loaded);
}

/// Queue a toast; returns its id
pub fn store_push_toast(store: &AppStore, make: impl FnOnce(u32) -> Toast) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(make(id));
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use food_core::{
        Dashboard, DashboardConfig, DomainError, FoodPatch, MemoryFoodRepository, Operation,
    };

    fn dashboard_over(store: AppStore, foods: Vec<FoodItem>) -> Dashboard<MemoryFoodRepository, StoreDashboard> {
        Dashboard::with_state(
            MemoryFoodRepository::with_foods(foods),
            StoreDashboard(store),
            DashboardConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_controller_writes_through_store() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::new());
        let dashboard = dashboard_over(store, vec![FoodItem::new("1", "Cake", 10.0)]);

        dashboard.load_all().await.unwrap();
        dashboard.begin_edit(FoodItem::new("1", "Cake", 10.0));
        dashboard
            .update(&FoodId::from("1"), &FoodPatch::default().with_price(12.0))
            .await
            .unwrap();

        assert_eq!(store_food_count(&store), 1);
        assert_eq!(store_foods(&store)[0].price, 12.0);
        assert!(!store_is_edit_modal_open(&store));
    }

    #[tokio::test]
    async fn test_failed_toggle_leaves_stored_switch() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::new());
        let dashboard = dashboard_over(store, vec![FoodItem::new("1", "Cake", 10.0)]);
        dashboard.load_all().await.unwrap();
        dashboard
            .repo()
            .fail(Operation::Update, DomainError::Request("offline".into()));

        assert!(dashboard.toggle_available(&FoodId::from("1")).await.is_err());

        assert_eq!(store_is_food_available(&store, &FoodId::from("1")), Some(true));
        assert_eq!(store_is_food_available(&store, &FoodId::from("9")), None);
    }

    #[test]
    fn test_new_state_is_loading_but_not_loaded() {
        let state = AppState::new();
        assert!(state.loading);
        assert!(!state.loaded);
    }
}
