//! Brand-by-size grid model.
//!
//! Every fetched record gets a full grid: sizes without a stored entry read as zero.
//! Youth sizes are labelled with a `Y` prefix on screen only.

use smallvec::SmallVec;
use stockroom::prelude::*;

const YOUTH_PREFIX: &str = "Y";

/// On-screen label for a size.
pub(crate) fn display_label(size: Size, category: Category) -> String {
    match category {
        Category::Adult => size.as_str().to_string(),
        Category::Youth => format!("{YOUTH_PREFIX}{}", size.as_str()),
    }
}

/// Read an on-screen label back, stripping the youth prefix.
///
/// No adult size begins with `Y`, so the prefix alone decides the category.
pub(crate) fn parse_display_label(label: &str) -> Option<(Size, Category)> {
    let (raw, category) = match label.strip_prefix(YOUTH_PREFIX) {
        Some(raw) => (raw, Category::Youth),
        None => (label, Category::Adult),
    };

    let size = raw.parse::<Size>().ok()?;

    size.is_offered_in(category).then_some((size, category))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SizeCell {
    pub(crate) size: Size,
    pub(crate) category: Category,
    pub(crate) quantity: u64,
}

impl SizeCell {
    pub(crate) fn label(&self) -> String {
        display_label(self.size, self.category)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BrandGrid {
    pub(crate) brand: Brand,
    pub(crate) adult: SmallVec<[SizeCell; 9]>,
    pub(crate) youth: SmallVec<[SizeCell; 5]>,
    pub(crate) total_quantity: u64,
}

impl BrandGrid {
    pub(crate) fn new(record: &InventoryRecord) -> Self {
        Self {
            brand: record.brand(),
            adult: category_cells(record, Category::Adult),
            youth: category_cells(record, Category::Youth),
            total_quantity: record.total_quantity(),
        }
    }

    pub(crate) fn cells(&self, category: Category) -> &[SizeCell] {
        match category {
            Category::Adult => &self.adult,
            Category::Youth => &self.youth,
        }
    }
}

fn category_cells<C>(record: &InventoryRecord, category: Category) -> C
where
    C: FromIterator<SizeCell>,
{
    category
        .sizes()
        .iter()
        .map(|&size| SizeCell {
            size,
            category,
            quantity: record.quantity_of(size, category),
        })
        .collect()
}

/// One grid per fetched record, in the order the server listed them.
pub(crate) fn build_grids(records: &[InventoryRecord]) -> Vec<BrandGrid> {
    records.iter().map(BrandGrid::new).collect()
}

#[cfg(test)]
mod tests {
    use stockroom::prelude::*;
    use testresult::TestResult;

    use super::*;

    fn hanes_record() -> TestResult<InventoryRecord> {
        let mut record = InventoryRecord::new(Brand::Hanes, "2026-10-18T09:00:00Z".parse()?);

        record.adjust(Size::L, Category::Adult, 7, StockAction::Add);
        record.adjust(Size::S, Category::Youth, 2, StockAction::Add);
        record.reconcile("2026-10-18T09:05:00Z".parse()?);

        Ok(record)
    }

    #[test]
    fn youth_labels_carry_prefix() {
        assert_eq!(display_label(Size::Xl, Category::Youth), "YXL");
        assert_eq!(display_label(Size::Xl3, Category::Adult), "3XL");
    }

    #[test]
    fn labels_read_back_without_prefix() {
        assert_eq!(parse_display_label("YXS"), Some((Size::Xs, Category::Youth)));
        assert_eq!(parse_display_label("XS"), Some((Size::Xs, Category::Adult)));
        assert_eq!(parse_display_label("5XL"), Some((Size::Xl5, Category::Adult)));
    }

    #[test]
    fn labels_outside_a_category_are_rejected() {
        assert_eq!(parse_display_label("Y2XL"), None);
        assert_eq!(parse_display_label("Y"), None);
        assert_eq!(parse_display_label("XXL"), None);
    }

    #[test]
    fn every_size_is_shown_with_missing_entries_as_zero() -> TestResult {
        let record = hanes_record()?;
        let grid = BrandGrid::new(&record);

        assert_eq!(grid.adult.len(), 9);
        assert_eq!(grid.youth.len(), 5);
        assert_eq!(grid.total_quantity, 9);

        let large = grid.adult.iter().find(|cell| cell.size == Size::L);
        let medium = grid.adult.iter().find(|cell| cell.size == Size::M);

        assert_eq!(large.map(|cell| cell.quantity), Some(7));
        assert_eq!(medium.map(|cell| cell.quantity), Some(0));
        assert!(medium.is_some_and(SizeCell::is_empty));

        Ok(())
    }

    #[test]
    fn only_fetched_records_get_grids() -> TestResult {
        let nike = InventoryRecord::new(Brand::Nike, "2026-10-18T08:00:00Z".parse()?);
        let grids = build_grids(&[nike, hanes_record()?]);

        let brands: Vec<Brand> = grids.iter().map(|grid| grid.brand).collect();

        assert_eq!(brands, [Brand::Nike, Brand::Hanes]);
        assert!(build_grids(&[]).is_empty());

        Ok(())
    }

    #[test]
    fn cells_are_split_by_category() -> TestResult {
        let record = hanes_record()?;
        let grid = BrandGrid::new(&record);

        let youth_labels: Vec<String> = grid.cells(Category::Youth).iter().map(SizeCell::label).collect();

        assert_eq!(youth_labels, ["YXS", "YS", "YM", "YL", "YXL"]);
        assert_eq!(grid.cells(Category::Adult).len(), 9);

        Ok(())
    }
}
