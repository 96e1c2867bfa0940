//! Inventory service.

use async_trait::async_trait;
use jiff::{Timestamp, Unit};
use mockall::automock;
use stockroom::prelude::*;
use tracing::debug;

use crate::{
    database::Db,
    domain::inventory::{errors::InventoryServiceError, repository::PgInventoryRepository},
};

#[derive(Debug, Clone)]
pub struct PgInventoryService {
    db: Db,
    repository: PgInventoryRepository,
}

impl PgInventoryService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgInventoryRepository::new(),
        }
    }

    /// Replace every stored record with `records`, reconciling each first.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage layer fails; nothing is replaced in that case.
    pub async fn replace_all(
        &self,
        records: Vec<InventoryRecord>,
    ) -> Result<Vec<InventoryRecord>, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let deleted = self.repository.delete_all_records(&mut tx).await?;

        let now = stored_now();
        let mut saved = Vec::with_capacity(records.len());

        for mut record in records {
            record.reconcile(now);

            self.repository.save_record(&mut tx, &record).await?;

            saved.push(record);
        }

        tx.commit().await?;

        debug!(deleted, inserted = saved.len(), "replaced inventory");

        Ok(saved)
    }
}

/// Current time at the precision `PostgreSQL` keeps.
fn stored_now() -> Timestamp {
    let now = Timestamp::now();

    now.round(Unit::Microsecond).unwrap_or(now)
}

#[async_trait]
impl InventoryService for PgInventoryService {
    async fn list_inventory(
        &self,
        brand: Option<Brand>,
    ) -> Result<Vec<InventoryRecord>, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let records = self.repository.list_inventory(&mut tx, brand).await?;

        tx.commit().await?;

        Ok(records)
    }

    #[tracing::instrument(
        name = "inventory.service.apply_stock_change",
        skip(self, change),
        fields(
            brand = %change.brand(),
            created = tracing::field::Empty,
            modified = tracing::field::Empty
        ),
        err
    )]
    async fn apply_stock_change(
        &self,
        change: StockChange,
    ) -> Result<InventoryRecord, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self
            .repository
            .find_record_for_update(&mut tx, change.brand())
            .await?;

        let applied = match existing {
            Some(record) => apply_stock_change(Some(record), &change, stored_now()),
            None => {
                debug!(brand = %change.brand(), "no record yet, constructing one");

                apply_stock_change(None, &change, stored_now())
            }
        };

        let span = tracing::Span::current();

        span.record("created", applied.created);
        span.record("modified", applied.modified);

        if !applied.needs_write() {
            debug!(
                brand = %change.brand(),
                size = change.size().as_str(),
                category = change.category().as_str(),
                "removal from a size never stocked, nothing written"
            );

            return Ok(applied.record);
        }

        self.repository.save_record(&mut tx, &applied.record).await?;

        tx.commit().await?;

        Ok(applied.record)
    }

    async fn summarize_inventory(&self) -> Result<Vec<BrandSummary>, InventoryServiceError> {
        let mut tx = self.db.begin().await?;

        let summaries = self.repository.summarize_inventory(&mut tx).await?;

        tx.commit().await?;

        Ok(summaries)
    }
}

#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Retrieves every record, or only the record for `brand`.
    async fn list_inventory(
        &self,
        brand: Option<Brand>,
    ) -> Result<Vec<InventoryRecord>, InventoryServiceError>;

    /// Applies an add or remove to one size of a brand, creating the record on first stock.
    async fn apply_stock_change(
        &self,
        change: StockChange,
    ) -> Result<InventoryRecord, InventoryServiceError>;

    /// Total quantity and record count per stored brand.
    async fn summarize_inventory(&self) -> Result<Vec<BrandSummary>, InventoryServiceError>;
}
