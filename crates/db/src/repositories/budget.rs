//! Budget repository for budget database operations.
//!
//! One row per (month, category). Creation goes through [`BudgetRepository::upsert`],
//! which overwrites the amount of an existing row in a single statement.

use chrono::Utc;
use finviz_core::budget::{Budget, BudgetDraft};
use finviz_core::{Category, Month};
use finviz_shared::BudgetId;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use crate::entities::budgets;

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// Another budget already exists for this month and category.
    #[error("A budget for {category} in {month} already exists")]
    Conflict {
        /// Month of the colliding key.
        month: Month,
        /// Category of the colliding key.
        category: Category,
    },

    /// A stored row could not be mapped to a domain budget.
    #[error("Invalid budget record {id}: {reason}")]
    InvalidRecord {
        /// Row ID.
        id: Uuid,
        /// What failed to map.
        reason: String,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Budget repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists budgets, optionally for one month.
    ///
    /// Sorted by month (newest first), then category name.
    pub async fn list(&self, month: Option<Month>) -> Result<Vec<Budget>, BudgetError> {
        let mut query = budgets::Entity::find();
        if let Some(month) = month {
            query = query.filter(budgets::Column::Month.eq(month.to_string()));
        }

        query
            .order_by_desc(budgets::Column::Month)
            .order_by_asc(budgets::Column::Category)
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    /// Finds a budget by ID.
    pub async fn find(&self, id: BudgetId) -> Result<Option<Budget>, BudgetError> {
        budgets::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    /// Finds the budget for a (month, category) pair.
    pub async fn find_by_key(
        &self,
        month: Month,
        category: Category,
    ) -> Result<Option<Budget>, BudgetError> {
        budgets::Entity::find()
            .filter(budgets::Column::Month.eq(month.to_string()))
            .filter(budgets::Column::Category.eq(category.to_string()))
            .one(&self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    /// Inserts a budget, or overwrites the amount of the existing row for
    /// the same (month, category).
    ///
    /// An overwritten row keeps its ID and creation time.
    pub async fn upsert(&self, draft: BudgetDraft) -> Result<Budget, BudgetError> {
        let now = Utc::now().into();
        let (month, category) = (draft.month, draft.category);

        let row = budgets::ActiveModel {
            id: Set(BudgetId::new().into_inner()),
            month: Set(month.to_string()),
            category: Set(category.to_string()),
            budget_amount: Set(draft.budget_amount),
            created_at: Set(now),
            updated_at: Set(now),
        };

        budgets::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([budgets::Column::Month, budgets::Column::Category])
                    .update_columns([budgets::Column::BudgetAmount, budgets::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        self.find_by_key(month, category).await?.ok_or_else(|| {
            BudgetError::Database(DbErr::RecordNotFound(format!(
                "budget {category} {month} after upsert"
            )))
        })
    }

    /// Replaces every writable field of an existing budget.
    ///
    /// Returns `None` if no budget has this ID, and `Conflict` if the new
    /// (month, category) belongs to another row.
    pub async fn replace(
        &self,
        id: BudgetId,
        draft: BudgetDraft,
    ) -> Result<Option<Budget>, BudgetError> {
        let Some(existing) = budgets::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: budgets::ActiveModel = existing.into();
        active.month = Set(draft.month.to_string());
        active.category = Set(draft.category.to_string());
        active.budget_amount = Set(draft.budget_amount);
        active.updated_at = Set(Utc::now().into());

        match active.update(&self.db).await {
            Ok(model) => to_domain(model).map(Some),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(BudgetError::Conflict {
                    month: draft.month,
                    category: draft.category,
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a budget. Returns false if it did not exist.
    pub async fn delete(&self, id: BudgetId) -> Result<bool, BudgetError> {
        let result = budgets::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

fn to_domain(model: budgets::Model) -> Result<Budget, BudgetError> {
    let invalid = |reason: String| BudgetError::InvalidRecord {
        id: model.id,
        reason,
    };
    let month = model
        .month
        .parse::<Month>()
        .map_err(|e| invalid(e.to_string()))?;
    let category = model
        .category
        .parse::<Category>()
        .map_err(|e| invalid(e.to_string()))?;

    Ok(Budget {
        id: BudgetId::from_uuid(model.id),
        month,
        category,
        budget_amount: model.budget_amount,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}
