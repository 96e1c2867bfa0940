//! Inventory Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};
use stockroom::prelude::*;

use crate::domain::inventory::errors::InventoryServiceError;

const LIST_INVENTORY_SQL: &str = include_str!("sql/list_inventory.sql");
const LIST_INVENTORY_BY_BRAND_SQL: &str = include_str!("sql/list_inventory_by_brand.sql");
const FIND_RECORD_FOR_UPDATE_SQL: &str = include_str!("sql/find_record_for_update.sql");
const SAVE_RECORD_SQL: &str = include_str!("sql/save_record.sql");
const SUMMARIZE_INVENTORY_SQL: &str = include_str!("sql/summarize_inventory.sql");
const DELETE_ALL_RECORDS_SQL: &str = include_str!("sql/delete_all_records.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgInventoryRepository;

impl PgInventoryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_inventory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: Option<Brand>,
    ) -> Result<Vec<InventoryRecord>, sqlx::Error> {
        let rows = match brand {
            Some(brand) => {
                query_as::<Postgres, InventoryRow>(LIST_INVENTORY_BY_BRAND_SQL)
                    .bind(brand.as_str())
                    .fetch_all(&mut **tx)
                    .await?
            }
            None => {
                query_as::<Postgres, InventoryRow>(LIST_INVENTORY_SQL)
                    .fetch_all(&mut **tx)
                    .await?
            }
        };

        Ok(rows.into_iter().map(InventoryRow::into_record).collect())
    }

    /// Fetch a brand's record and hold its row lock until the transaction ends.
    pub(crate) async fn find_record_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: Brand,
    ) -> Result<Option<InventoryRecord>, sqlx::Error> {
        let row = query_as::<Postgres, InventoryRow>(FIND_RECORD_FOR_UPDATE_SQL)
            .bind(brand.as_str())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(row.map(InventoryRow::into_record))
    }

    /// Write the whole record, inserting it on first use. `created_at` is never overwritten.
    ///
    /// Totals beyond `BIGINT` are refused before anything is sent.
    pub(crate) async fn save_record(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: &InventoryRecord,
    ) -> Result<(), InventoryServiceError> {
        let total_quantity = i64::try_from(record.total_quantity())?;

        query(SAVE_RECORD_SQL)
            .bind(record.brand().as_str())
            .bind(Json(record.sizes()))
            .bind(total_quantity)
            .bind(SqlxTimestamp::from(record.last_updated()))
            .bind(SqlxTimestamp::from(record.created_at()))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn summarize_inventory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<BrandSummary>, sqlx::Error> {
        let rows = query_as::<Postgres, SummaryRow>(SUMMARIZE_INVENTORY_SQL)
            .fetch_all(&mut **tx)
            .await?;

        Ok(rows.into_iter().map(|row| row.0).collect())
    }

    pub(crate) async fn delete_all_records(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ALL_RECORDS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

struct InventoryRow(InventoryRecord);

impl InventoryRow {
    fn into_record(self) -> InventoryRecord {
        self.0
    }
}

impl<'r> FromRow<'r, PgRow> for InventoryRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(sizes): Json<Vec<SizeEntry>> = row.try_get("sizes")?;

        Ok(Self(InventoryRecord::restore(
            decode_brand(row)?,
            sizes,
            to_u64("total_quantity", row.try_get("total_quantity")?)?,
            row.try_get::<SqlxTimestamp, _>("last_updated")?.to_jiff(),
            row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        )))
    }
}

struct SummaryRow(BrandSummary);

impl<'r> FromRow<'r, PgRow> for SummaryRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(BrandSummary {
            brand: decode_brand(row)?,
            total_quantity: to_u64("total_quantity", row.try_get("total_quantity")?)?,
            item_count: to_u64("item_count", row.try_get("item_count")?)?,
        }))
    }
}

fn decode_brand(row: &PgRow) -> sqlx::Result<Brand> {
    let brand: String = row.try_get("brand")?;

    brand.parse().map_err(|e: ValidationError| sqlx::Error::ColumnDecode {
        index: "brand".to_string(),
        source: Box::new(e),
    })
}

fn to_u64(column: &str, value: i64) -> sqlx::Result<u64> {
    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}
