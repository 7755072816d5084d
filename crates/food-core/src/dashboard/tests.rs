//! Dashboard Controller Tests
//!
//! Scenarios against the in-memory backend.

#[cfg(test)]
mod tests {
    use crate::dashboard::{Dashboard, DashboardConfig, DeletePolicy};
    use crate::domain::{DomainError, FoodDraft, FoodId, FoodItem, FoodPatch, Operation};
    use crate::repository::{FoodRepository, MemoryFoodRepository};

    fn cake() -> FoodItem {
        FoodItem::new("1", "Cake", 10.0)
    }

    async fn loaded_dashboard(foods: Vec<FoodItem>) -> Dashboard<MemoryFoodRepository> {
        let dashboard = Dashboard::new(
            MemoryFoodRepository::with_foods(foods),
            DashboardConfig::default(),
        );
        dashboard.load_all().await.expect("load failed");
        dashboard
    }

    #[tokio::test]
    async fn test_load_shows_cake() {
        let dashboard = loaded_dashboard(vec![cake()]).await;

        assert_eq!(dashboard.snapshot().len(), 1);
        assert_eq!(dashboard.snapshot().foods()[0].name, "Cake");
    }

    #[tokio::test]
    async fn test_load_keeps_server_order() {
        let foods = vec![
            FoodItem::new("3", "Soup", 4.0),
            FoodItem::new("1", "Cake", 10.0),
            FoodItem::new("2", "Pie", 5.0),
        ];
        let dashboard = loaded_dashboard(foods.clone()).await;

        assert_eq!(dashboard.snapshot().foods(), foods.as_slice());
    }

    #[tokio::test]
    async fn test_failed_load_leaves_state() {
        let dashboard = loaded_dashboard(vec![cake()]).await;
        dashboard
            .repo()
            .fail(Operation::Load, DomainError::Request("offline".into()));

        let err = dashboard.load_all().await.unwrap_err();

        assert_eq!(err, DomainError::Request("offline".into()));
        assert_eq!(dashboard.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_create_pie_appends_server_record() {
        let dashboard = loaded_dashboard(vec![cake()]).await;
        dashboard.open_add_modal();

        let created = dashboard.create(FoodDraft::new("Pie", 5.0)).await.unwrap();

        assert_eq!(created.id, FoodId::from("2"));
        assert!(created.available);
        assert_eq!(dashboard.snapshot().len(), 2);
        assert!(dashboard.snapshot().find(&FoodId::from("2")).is_some());
        assert!(!dashboard.snapshot().is_add_modal_open());
    }

    #[tokio::test]
    async fn test_failed_create_leaves_state() {
        let dashboard = loaded_dashboard(vec![cake()]).await;
        dashboard.open_add_modal();
        dashboard.repo().fail(
            Operation::Create,
            DomainError::Status { status: 500, message: String::new() },
        );

        assert!(dashboard.create(FoodDraft::new("Pie", 5.0)).await.is_err());

        assert_eq!(dashboard.snapshot().len(), 1);
        assert!(dashboard.snapshot().is_add_modal_open());
    }

    #[tokio::test]
    async fn test_update_price_merges_and_closes_edit() {
        let mut cake = cake();
        cake.description = "Chocolate".to_string();
        let pie = FoodItem::new("2", "Pie", 5.0);
        let dashboard = loaded_dashboard(vec![cake.clone(), pie.clone()]).await;
        dashboard.begin_edit(cake.clone());

        let updated = dashboard
            .update(&cake.id, &FoodPatch::default().with_price(12.0))
            .await
            .unwrap();

        assert_eq!(updated.price, 12.0);
        let state = dashboard.snapshot();
        let listed = state.find(&cake.id).unwrap();
        assert_eq!(listed.price, 12.0);
        assert_eq!(listed.name, "Cake");
        assert_eq!(listed.description, "Chocolate");
        assert!(listed.available);
        assert_eq!(state.find(&pie.id), Some(&pie));
        assert!(!dashboard.snapshot().is_edit_modal_open());
        assert_eq!(dashboard.repo().snapshot()[0].price, 12.0);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_modal_and_record() {
        let dashboard = loaded_dashboard(vec![cake()]).await;
        dashboard.begin_edit(cake());
        dashboard
            .repo()
            .fail(Operation::Update, DomainError::Request("timeout".into()));

        let result = dashboard
            .update(&FoodId::from("1"), &FoodPatch::default().with_price(12.0))
            .await;

        assert!(result.is_err());
        assert_eq!(dashboard.snapshot().foods()[0].price, 10.0);
        assert!(dashboard.snapshot().is_edit_modal_open());
    }

    #[tokio::test]
    async fn test_update_unknown_id_skips_backend() {
        let dashboard = loaded_dashboard(vec![cake()]).await;

        let err = dashboard
            .update(&FoodId::from("42"), &FoodPatch::default().with_price(1.0))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(dashboard.repo().calls(), vec![Operation::Load]);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let dashboard = loaded_dashboard(vec![cake(), FoodItem::new("2", "Pie", 5.0)]).await;

        dashboard.delete(&FoodId::from("1")).await.unwrap();

        assert!(dashboard.snapshot().find(&FoodId::from("1")).is_none());
        assert_eq!(dashboard.snapshot().len(), 1);
        assert_eq!(dashboard.repo().snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_optimistic_delete_removes_even_on_failure() {
        let dashboard = loaded_dashboard(vec![cake()]).await;
        dashboard
            .repo()
            .fail(Operation::Delete, DomainError::Request("offline".into()));

        let result = dashboard.delete(&FoodId::from("1")).await;

        assert!(result.is_err());
        assert!(dashboard.snapshot().is_empty());
        assert_eq!(dashboard.repo().snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_confirm_first_delete_keeps_record_on_failure() {
        let repo = MemoryFoodRepository::with_foods(vec![cake()]);
        let config = DashboardConfig::default().with_delete_policy(DeletePolicy::ConfirmFirst);
        let dashboard = Dashboard::new(repo, config);
        dashboard.load_all().await.unwrap();
        dashboard
            .repo()
            .fail(Operation::Delete, DomainError::Request("offline".into()));

        assert!(dashboard.delete(&FoodId::from("1")).await.is_err());
        assert_eq!(dashboard.snapshot().len(), 1);

        dashboard.repo().recover(Operation::Delete);
        dashboard.delete(&FoodId::from("1")).await.unwrap();
        assert!(dashboard.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_available() {
        let dashboard = loaded_dashboard(vec![cake()]).await;

        let toggled = dashboard.toggle_available(&FoodId::from("1")).await.unwrap();

        assert!(!toggled.available);
        assert!(!dashboard.snapshot().foods()[0].available);
        assert!(!dashboard.repo().snapshot()[0].available);
        assert!(!dashboard.snapshot().is_edit_modal_open());
    }

    #[tokio::test]
    async fn test_failed_toggle_keeps_stored_availability() {
        let dashboard = loaded_dashboard(vec![cake()]).await;
        dashboard
            .repo()
            .fail(Operation::Update, DomainError::Request("offline".into()));

        let err = dashboard.toggle_available(&FoodId::from("1")).await.unwrap_err();

        assert_eq!(err, DomainError::Request("offline".into()));
        assert!(dashboard.snapshot().foods()[0].available);
        assert!(dashboard.repo().snapshot()[0].available);
    }

    #[tokio::test]
    async fn test_edit_after_toggle_keeps_availability() {
        let dashboard = loaded_dashboard(vec![cake()]).await;
        dashboard.begin_edit(cake());
        dashboard.toggle_available(&FoodId::from("1")).await.unwrap();

        let updated = dashboard
            .update(&FoodId::from("1"), &FoodPatch::default().with_name("Torte"))
            .await
            .unwrap();

        assert_eq!(updated.name, "Torte");
        assert!(!updated.available);
    }

    #[tokio::test]
    async fn test_load_after_external_change() {
        let dashboard = loaded_dashboard(vec![cake()]).await;
        let extra = FoodDraft::new("Soup", 4.0).into_new_food();
        dashboard.repo().create(&extra).await.unwrap();

        assert_eq!(dashboard.load_all().await.unwrap(), 2);
    }
}
