//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;
use food_core::{Dashboard, DashboardConfig, HttpFoodRepository};

use crate::store::{AppStore, StoreDashboard};

/// App-wide settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<DashboardConfig>,
}

impl AppContext {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Controller over the HTTP backend, writing into `store`
    pub fn dashboard(&self, store: AppStore) -> Dashboard<HttpFoodRepository, StoreDashboard> {
        let config = self.config.get_value();
        Dashboard::with_state(
            HttpFoodRepository::from_config(&config),
            StoreDashboard(store),
            config,
        )
    }

    pub fn toast_duration_ms(&self) -> u32 {
        self.config.with_value(|c| c.toast_duration_ms)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
