//! Sample data seeder for Finviz local development.
//!
//! Seeds six months of transactions and budgets for the current and previous
//! month. Skips transactions if any already exist; budgets are upserted.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Datelike, Months, NaiveDate, Utc};
use finviz_core::budget::BudgetDraft;
use finviz_core::transaction::TransactionDraft;
use finviz_core::{Category, Month};
use finviz_db::migration::{Migrator, MigratorTrait};
use finviz_db::{BudgetRepository, TransactionRepository};
use finviz_shared::{AppConfig, PageRequest};
use rust_decimal::Decimal;

/// (description, category, day of month, quantity in hundredths, price in cents)
const MONTHLY_SPEND: [(&str, Category, u32, i64, i64); 8] = [
    ("Supermarket run", Category::Groceries, 3, 100, 8_450),
    ("Farmers market", Category::Groceries, 17, 100, 3_275),
    ("Electricity bill", Category::Utilities, 5, 100, 11_200),
    ("Internet", Category::Utilities, 12, 100, 5_999),
    ("Bus pass", Category::Transport, 1, 100, 4_500),
    ("Fuel", Category::Transport, 20, 3_850, 189),
    ("Cinema tickets", Category::Entertainment, 14, 200, 1_250),
    ("Pharmacy", Category::Health, 9, 100, 2_340),
];

/// (category, amount in cents)
const BUDGETS: [(Category, i64); 5] = [
    (Category::Groceries, 15_000),
    (Category::Utilities, 15_000),
    (Category::Transport, 10_000),
    (Category::Entertainment, 3_000),
    (Category::Health, 5_000),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = finviz_db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run migrations")?;

    let today = Utc::now().date_naive();

    println!("Seeding transactions...");
    seed_transactions(&TransactionRepository::new(db.clone()), today).await?;

    println!("Seeding budgets...");
    seed_budgets(&BudgetRepository::new(db.clone()), today).await?;

    db.close().await?;
    println!("Seeding complete!");
    Ok(())
}

/// First day of the month `back` months before `today`.
fn month_start(today: NaiveDate, back: u32) -> Option<NaiveDate> {
    today.with_day(1)?.checked_sub_months(Months::new(back))
}

/// Seeds the sample spend for the current month and the five before it.
async fn seed_transactions(repo: &TransactionRepository, today: NaiveDate) -> anyhow::Result<()> {
    let (_, existing) = repo.list_page(PageRequest::default()).await?;
    if existing > 0 {
        println!("  {existing} transactions already exist, skipping...");
        return Ok(());
    }

    let mut inserted = 0;
    for back in 0..6 {
        let start = month_start(today, back).context("Date out of range")?;
        for (description, category, day, quantity, price) in MONTHLY_SPEND {
            let date = start.with_day(day).unwrap_or(start);
            if date > today {
                continue;
            }

            let draft = TransactionDraft {
                description: description.to_string(),
                quantity: Decimal::new(quantity, 2),
                // Vary spend a little from month to month.
                price_per_unit: Decimal::new(price + i64::from(back) * 125, 2),
                date,
                category,
            }
            .validate()?;

            repo.create(draft).await?;
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} transactions");
    Ok(())
}

/// Upserts budgets for the current and previous month.
async fn seed_budgets(repo: &BudgetRepository, today: NaiveDate) -> anyhow::Result<()> {
    let mut saved = 0;
    for back in 0..2 {
        let month = Month::of(month_start(today, back).context("Date out of range")?);
        for (category, amount) in BUDGETS {
            let draft = BudgetDraft {
                month,
                category,
                budget_amount: Decimal::new(amount, 2),
            }
            .validate()?;

            repo.upsert(draft).await?;
            saved += 1;
        }
    }

    println!("  Saved {saved} budgets");
    Ok(())
}
