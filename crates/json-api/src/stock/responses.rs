//! Stock response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use stockroom::prelude::*;

/// Stock held for one size of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct SizeEntryResponse {
    /// Size label (`XS` to `5XL`), never prefixed
    pub size: String,

    /// Units in stock
    pub quantity: u64,

    /// `adult` or `youth`
    pub category: String,
}

impl From<&SizeEntry> for SizeEntryResponse {
    fn from(entry: &SizeEntry) -> Self {
        Self {
            size: entry.size.as_str().to_string(),
            quantity: entry.quantity,
            category: entry.category.as_str().to_string(),
        }
    }
}

/// A brand's inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InventoryRecordResponse {
    /// Brand name
    pub brand: String,

    /// Every stocked size entry
    pub sizes: Vec<SizeEntryResponse>,

    /// Sum of all entry quantities
    pub total_quantity: u64,

    /// When the record was last reconciled (RFC 3339)
    pub last_updated: String,

    /// When the record was first stocked (RFC 3339)
    pub created_at: String,

    /// Adult entries only
    pub adult_sizes: Vec<SizeEntryResponse>,

    /// Youth entries only
    pub youth_sizes: Vec<SizeEntryResponse>,
}

impl From<InventoryRecord> for InventoryRecordResponse {
    fn from(record: InventoryRecord) -> Self {
        Self {
            brand: record.brand().as_str().to_string(),
            sizes: record.sizes().iter().map(Into::into).collect(),
            total_quantity: record.total_quantity(),
            last_updated: record.last_updated().to_string(),
            created_at: record.created_at().to_string(),
            adult_sizes: record.adult_sizes().map(Into::into).collect(),
            youth_sizes: record.youth_sizes().map(Into::into).collect(),
        }
    }
}

/// Totals for one brand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrandSummaryResponse {
    /// Brand name
    #[serde(rename = "_id")]
    pub id: String,

    /// Sum of the brand's record totals
    pub total_quantity: u64,

    /// Number of records for the brand
    pub item_count: u64,
}

impl From<BrandSummary> for BrandSummaryResponse {
    fn from(summary: BrandSummary) -> Self {
        Self {
            id: summary.brand.as_str().to_string(),
            total_quantity: summary.total_quantity,
            item_count: summary.item_count,
        }
    }
}
