//! Integration tests for Budget repository.

use finviz_core::budget::BudgetDraft;
use finviz_core::{Category, Month};
use finviz_db::migration::{Migrator, MigratorTrait};
use finviz_db::{BudgetError, BudgetRepository};
use finviz_shared::{BudgetId, DatabaseConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;

/// Opens a migrated in-memory database on a single pooled connection.
async fn setup() -> DatabaseConnection {
    let mut config = DatabaseConfig::with_url("sqlite::memory:");
    config.max_connections = 1;
    config.min_connections = 1;

    let db = finviz_db::connect(&config)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

fn month(raw: &str) -> Month {
    raw.parse().unwrap()
}

fn draft(month_raw: &str, category: Category, amount: Decimal) -> BudgetDraft {
    BudgetDraft {
        month: month(month_raw),
        category,
        budget_amount: amount,
    }
}

#[tokio::test]
async fn test_budget_upsert_creates_row() {
    let repo = BudgetRepository::new(setup().await);

    let budget = repo
        .upsert(draft("2025-01", Category::Groceries, dec!(150)))
        .await
        .expect("Failed to upsert budget");

    assert_eq!(budget.month, month("2025-01"));
    assert_eq!(budget.category, Category::Groceries);
    assert_eq!(budget.budget_amount, dec!(150));

    let found = repo.find(budget.id).await.unwrap().expect("Budget should exist");
    assert_eq!(found, budget);
}

#[tokio::test]
async fn test_budget_upsert_overwrites_existing_pair() {
    let repo = BudgetRepository::new(setup().await);

    let first = repo
        .upsert(draft("2025-01", Category::Groceries, dec!(150)))
        .await
        .unwrap();
    let second = repo
        .upsert(draft("2025-01", Category::Groceries, dec!(175.50)))
        .await
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.budget_amount, dec!(175.50));

    let rows = repo.list(Some(month("2025-01"))).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].budget_amount, dec!(175.50));
}

#[tokio::test]
async fn test_budget_list_order_and_filter() {
    let repo = BudgetRepository::new(setup().await);
    repo.upsert(draft("2025-01", Category::Utilities, dec!(80)))
        .await
        .unwrap();
    repo.upsert(draft("2025-02", Category::Health, dec!(40)))
        .await
        .unwrap();
    repo.upsert(draft("2025-01", Category::Groceries, dec!(150)))
        .await
        .unwrap();

    let keys: Vec<(String, Category)> = repo
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .map(|b| (b.month.to_string(), b.category))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("2025-02".to_string(), Category::Health),
            ("2025-01".to_string(), Category::Groceries),
            ("2025-01".to_string(), Category::Utilities),
        ]
    );

    let january = repo.list(Some(month("2025-01"))).await.unwrap();
    assert_eq!(january.len(), 2);
    assert!(repo.list(Some(month("2024-12"))).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_budget_find_by_key() {
    let repo = BudgetRepository::new(setup().await);
    let created = repo
        .upsert(draft("2025-01", Category::Transport, dec!(60)))
        .await
        .unwrap();

    let found = repo
        .find_by_key(month("2025-01"), Category::Transport)
        .await
        .unwrap();
    assert_eq!(found.map(|b| b.id), Some(created.id));

    let missing = repo
        .find_by_key(month("2025-01"), Category::Health)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_budget_replace() {
    let repo = BudgetRepository::new(setup().await);
    let created = repo
        .upsert(draft("2025-01", Category::Transport, dec!(60)))
        .await
        .unwrap();

    let replaced = repo
        .replace(created.id, draft("2025-03", Category::Transport, dec!(0)))
        .await
        .unwrap()
        .expect("Budget should exist");

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.month, month("2025-03"));
    assert_eq!(replaced.budget_amount, Decimal::ZERO);

    let missing = repo
        .replace(BudgetId::new(), draft("2025-01", Category::Other, dec!(1)))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_budget_replace_onto_taken_key_conflicts() {
    let repo = BudgetRepository::new(setup().await);
    repo.upsert(draft("2025-01", Category::Groceries, dec!(150)))
        .await
        .unwrap();
    let other = repo
        .upsert(draft("2025-01", Category::Health, dec!(100)))
        .await
        .unwrap();

    let err = repo
        .replace(other.id, draft("2025-01", Category::Groceries, dec!(100)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BudgetError::Conflict {
            category: Category::Groceries,
            ..
        }
    ));
    let untouched = repo.find(other.id).await.unwrap().unwrap();
    assert_eq!(untouched.category, Category::Health);
}

#[tokio::test]
async fn test_budget_delete() {
    let repo = BudgetRepository::new(setup().await);
    let created = repo
        .upsert(draft("2025-01", Category::Groceries, dec!(150)))
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.list(None).await.unwrap().is_empty());
}
