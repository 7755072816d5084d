//! Food Commands
//!
//! Each command runs one controller operation against the store and sends
//! failures to the toast channel; nothing is swallowed.

use food_core::{FoodDraft, FoodId, FoodPatch, Operation};

use crate::context::AppContext;
use crate::store::{store_set_loaded, store_set_loading, AppStore};
use crate::toast::report_failure;

/// `GET /foods` and replace the list
pub async fn load_foods(ctx: AppContext, store: AppStore) {
    store_set_loading(&store, true);
    let result = ctx.dashboard(store).load_all().await;
    store_set_loading(&store, false);

    match result {
        Ok(_) => store_set_loaded(&store, true),
        Err(e) => report_failure(ctx, store, Operation::Load, e),
    }
}

/// Create a dish (always available) and append the server's record
pub async fn add_food(ctx: AppContext, store: AppStore, draft: FoodDraft) {
    if let Err(e) = ctx.dashboard(store).create(draft).await {
        report_failure(ctx, store, Operation::Create, e);
    }
}

/// Merge the edit form onto the selected dish and save it
pub async fn update_food(ctx: AppContext, store: AppStore, id: FoodId, patch: FoodPatch) {
    if let Err(e) = ctx.dashboard(store).update(&id, &patch).await {
        report_failure(ctx, store, Operation::Update, e);
    }
}

/// Delete a dish; local removal follows the configured policy
pub async fn delete_food(ctx: AppContext, store: AppStore, id: FoodId) {
    if let Err(e) = ctx.dashboard(store).delete(&id).await {
        report_failure(ctx, store, Operation::Delete, e);
    }
}

/// Flip a dish's availability switch
pub async fn toggle_food_availability(ctx: AppContext, store: AppStore, id: FoodId) {
    if let Err(e) = ctx.dashboard(store).toggle_available(&id).await {
        report_failure(ctx, store, Operation::ToggleAvailability, e);
    }
}
