//! Dashboard Layer
//!
//! Session-scoped state of the food dashboard and the controller that keeps
//! it in sync with the backend.

mod config;
mod state;
mod controller;

#[cfg(test)]
mod tests;

pub use config::{DashboardConfig, DeletePolicy, ENV_API_URL, ENV_DELETE_POLICY, ENV_TOAST_MS};
pub use state::DashboardState;
pub use controller::{Dashboard, StateHandle};
