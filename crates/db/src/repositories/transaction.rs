//! Transaction repository for database operations.

use chrono::Utc;
use finviz_core::Category;
use finviz_core::transaction::{Transaction, TransactionDraft};
use finviz_shared::{PageRequest, TransactionId};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::transactions;

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// A stored row could not be mapped to a domain transaction.
    #[error("Invalid transaction record {id}: {reason}")]
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

/// Transaction repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of transactions, newest first, with the total count.
    ///
    /// Same-day transactions are ordered by creation time, newest first. A
    /// page past the end yields no items.
    pub async fn list_page(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<Transaction>, u64), TransactionError> {
        let total = transactions::Entity::find().count(&self.db).await?;
        let models = transactions::Entity::find()
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::CreatedAt)
            .order_by_desc(transactions::Column::Id)
            .offset(page.offset())
            .limit(page.limit)
            .all(&self.db)
            .await?;

        let items = models
            .into_iter()
            .map(to_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((items, total))
    }

    /// Returns the `limit` most recent transactions by date.
    pub async fn recent(&self, limit: u64) -> Result<Vec<Transaction>, TransactionError> {
        transactions::Entity::find()
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::CreatedAt)
            .order_by_desc(transactions::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    /// Returns every transaction, oldest first.
    pub async fn list_all(&self) -> Result<Vec<Transaction>, TransactionError> {
        transactions::Entity::find()
            .order_by_asc(transactions::Column::Date)
            .order_by_asc(transactions::Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    /// Finds a transaction by ID.
    pub async fn find(&self, id: TransactionId) -> Result<Option<Transaction>, TransactionError> {
        transactions::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(to_domain)
            .transpose()
    }

    /// Inserts a validated draft.
    pub async fn create(&self, draft: TransactionDraft) -> Result<Transaction, TransactionError> {
        let now = Utc::now().into();

        let model = transactions::ActiveModel {
            id: Set(TransactionId::new().into_inner()),
            description: Set(draft.description),
            quantity: Set(draft.quantity),
            price_per_unit: Set(draft.price_per_unit),
            date: Set(draft.date),
            category: Set(draft.category.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        to_domain(model)
    }

    /// Replaces every writable field of an existing transaction.
    ///
    /// Returns `None` if no transaction has this ID.
    pub async fn replace(
        &self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> Result<Option<Transaction>, TransactionError> {
        let Some(existing) = transactions::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: transactions::ActiveModel = existing.into();
        active.description = Set(draft.description);
        active.quantity = Set(draft.quantity);
        active.price_per_unit = Set(draft.price_per_unit);
        active.date = Set(draft.date);
        active.category = Set(draft.category.to_string());
        active.updated_at = Set(Utc::now().into());

        let model = active.update(&self.db).await?;
        to_domain(model).map(Some)
    }

    /// Deletes a transaction. Returns false if it did not exist.
    pub async fn delete(&self, id: TransactionId) -> Result<bool, TransactionError> {
        let result = transactions::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

fn to_domain(model: transactions::Model) -> Result<Transaction, TransactionError> {
    let category = model
        .category
        .parse::<Category>()
        .map_err(|e| TransactionError::InvalidRecord {
            id: model.id,
            reason: e.to_string(),
        })?;

    Ok(Transaction {
        id: TransactionId::from_uuid(model.id),
        description: model.description,
        quantity: model.quantity,
        price_per_unit: model.price_per_unit,
        date: model.date,
        category,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}
