//! Per-brand summaries

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{brands::Brand, records::InventoryRecord};

/// Stock totals grouped by brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSummary {
    /// Grouping key
    #[serde(rename = "_id")]
    pub brand: Brand,

    /// Sum of the grouped records' totals
    pub total_quantity: u64,

    /// Number of grouped records
    pub item_count: u64,
}

/// Group records by brand, in brand order.
///
/// Brands without a record are omitted.
pub fn summarize<'a, I>(records: I) -> Vec<BrandSummary>
where
    I: IntoIterator<Item = &'a InventoryRecord>,
{
    let mut groups: BTreeMap<Brand, BrandSummary> = BTreeMap::new();

    for record in records {
        let summary = groups.entry(record.brand()).or_insert(BrandSummary {
            brand: record.brand(),
            total_quantity: 0,
            item_count: 0,
        });

        summary.total_quantity = summary
            .total_quantity
            .saturating_add(record.total_quantity());
        summary.item_count = summary.item_count.saturating_add(1);
    }

    groups.into_values().collect()
}

/// Total units across every summary row.
pub fn grand_total<'a, I>(summaries: I) -> u64
where
    I: IntoIterator<Item = &'a BrandSummary>,
{
    summaries
        .into_iter()
        .fold(0_u64, |total, summary| total.saturating_add(summary.total_quantity))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{
        changes::StockAction,
        sizes::{Category, Size},
    };

    use super::*;

    fn record(brand: Brand, quantity: u64) -> InventoryRecord {
        let mut record = InventoryRecord::new(brand, Timestamp::UNIX_EPOCH);

        record.adjust(Size::M, Category::Adult, quantity, StockAction::Add);
        record.reconcile(Timestamp::UNIX_EPOCH);

        record
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(summarize(&Vec::<InventoryRecord>::new()).is_empty());
    }

    #[test]
    fn one_row_per_brand_in_brand_order() {
        let records = [record(Brand::Nike, 4), record(Brand::Gildan, 6)];

        let rows = summarize(&records);

        assert_eq!(
            rows,
            [
                BrandSummary {
                    brand: Brand::Gildan,
                    total_quantity: 6,
                    item_count: 1,
                },
                BrandSummary {
                    brand: Brand::Nike,
                    total_quantity: 4,
                    item_count: 1,
                },
            ]
        );
        assert_eq!(grand_total(&rows), 10);
    }

    #[test]
    fn duplicate_brand_records_are_grouped() {
        let records = [record(Brand::Hanes, 2), record(Brand::Hanes, 3)];

        let rows = summarize(&records);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows.first().map(|row| row.total_quantity), Some(5));
        assert_eq!(rows.first().map(|row| row.item_count), Some(2));
    }

    #[test]
    fn zero_stock_brand_still_counts() -> TestResult {
        let rows = summarize(&[record(Brand::Nike, 0)]);

        assert_eq!(
            serde_json::to_value(&rows)?,
            serde_json::json!([{ "_id": "Nike", "totalQuantity": 0, "itemCount": 1 }])
        );

        Ok(())
    }
}
