//! Error Toasts
//!
//! Every failed dashboard action ends up here instead of being swallowed.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use food_core::{DomainError, Operation};

use crate::context::AppContext;
use crate::store::{store_dismiss_toast, store_push_toast, AppStore};

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub detail: String,
}

impl Toast {
    /// Backend action failed
    pub fn failure(id: u32, operation: Operation, err: &DomainError) -> Self {
        let detail = if err.has_response() {
            err.to_string()
        } else {
            format!("{}. Is the backend running?", err)
        };
        Self {
            id,
            title: format!("Could not {}", operation.describe()),
            detail,
        }
    }

    /// Form rejected before anything was sent
    pub fn invalid_form(id: u32, err: &DomainError) -> Self {
        Self {
            id,
            title: "Check the form".to_string(),
            detail: err.to_string(),
        }
    }
}

/// Show a toast and schedule its dismissal
pub fn show_toast(ctx: AppContext, store: AppStore, make: impl FnOnce(u32) -> Toast) {
    let id = store_push_toast(&store, make);
    let ms = ctx.toast_duration_ms();
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        store_dismiss_toast(&store, id);
    });
}

/// Surface a failed action to the user; the controller already logged it
pub fn report_failure(ctx: AppContext, store: AppStore, operation: Operation, err: DomainError) {
    show_toast(ctx, store, |id| Toast::failure(id, operation, &err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_toast_text() {
        let err = DomainError::Status { status: 500, message: String::new() };
        let toast = Toast::failure(3, Operation::Create, &err);

        assert_eq!(toast.id, 3);
        assert_eq!(toast.title, "Could not add the dish");
        assert_eq!(toast.detail, "Server responded with status 500");
    }

    #[test]
    fn test_failure_without_response_hints_at_backend() {
        let err = DomainError::Request("connection refused".to_string());
        let toast = Toast::failure(0, Operation::Load, &err);

        assert_eq!(toast.detail, "Request failed: connection refused. Is the backend running?");
    }

    #[test]
    fn test_invalid_form_toast_text() {
        let err = DomainError::InvalidInput("name must not be empty".to_string());
        let toast = Toast::invalid_form(0, &err);

        assert_eq!(toast.title, "Check the form");
        assert_eq!(toast.detail, "Invalid input: name must not be empty");
    }
}
