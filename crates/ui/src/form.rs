//! Stock management form state.

use std::num::NonZeroU64;

use stockroom::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StockForm {
    pub(crate) brand: Brand,
    pub(crate) size: Size,
    pub(crate) category: Category,
    quantity: NonZeroU64,
}

impl Default for StockForm {
    fn default() -> Self {
        Self {
            brand: Brand::Gildan,
            size: Size::M,
            category: Category::Adult,
            quantity: NonZeroU64::MIN,
        }
    }
}

impl StockForm {
    pub(crate) fn quantity(&self) -> u64 {
        self.quantity.get()
    }

    /// Take a typed quantity. Anything that is not a positive integer becomes 1.
    pub(crate) fn set_quantity_text(&mut self, text: &str) {
        self.quantity = text
            .trim()
            .parse::<u64>()
            .ok()
            .and_then(NonZeroU64::new)
            .unwrap_or(NonZeroU64::MIN);
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn decrement(&mut self) {
        self.quantity = NonZeroU64::new(self.quantity.get() - 1).unwrap_or(NonZeroU64::MIN);
    }

    pub(crate) fn select_brand(&mut self, brand: Brand) {
        self.brand = brand;
    }

    /// Ignored when the size is not offered in the current category.
    pub(crate) fn select_size(&mut self, size: Size) {
        if size.is_offered_in(self.category) {
            self.size = size;
        }
    }

    /// Switching category always resets the size to M.
    pub(crate) fn select_category(&mut self, category: Category) {
        self.category = category;
        self.size = Size::M;
    }

    /// Point the form at a grid cell, without changing any stock.
    pub(crate) fn prefill(&mut self, brand: Brand, size: Size, category: Category) {
        self.brand = brand;
        self.category = category;
        self.size = size;
        self.quantity = NonZeroU64::MIN;
    }

    pub(crate) fn change(&self, action: StockAction) -> Result<StockChange, ValidationError> {
        StockChange::new(self.brand, self.size, self.category, self.quantity, action)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_to_gildan_adult_medium_one() {
        let form = StockForm::default();

        assert_eq!(form.brand, Brand::Gildan);
        assert_eq!(form.size, Size::M);
        assert_eq!(form.category, Category::Adult);
        assert_eq!(form.quantity(), 1);
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let mut form = StockForm::default();

        form.decrement();
        assert_eq!(form.quantity(), 1);

        form.increment();
        form.increment();
        form.decrement();
        assert_eq!(form.quantity(), 2);
    }

    #[test]
    fn typed_quantity_is_floored_at_one() {
        let mut form = StockForm::default();

        form.set_quantity_text(" 12 ");
        assert_eq!(form.quantity(), 12);

        for text in ["0", "-4", "", "lots"] {
            form.set_quantity_text(text);
            assert_eq!(form.quantity(), 1, "{text:?} should floor to 1");
        }
    }

    #[test]
    fn switching_category_resets_size() {
        let mut form = StockForm::default();

        form.select_size(Size::Xl4);
        form.select_category(Category::Youth);

        assert_eq!(form.category, Category::Youth);
        assert_eq!(form.size, Size::M);
    }

    #[test]
    fn sizes_outside_the_category_are_ignored() {
        let mut form = StockForm::default();

        form.select_category(Category::Youth);
        form.select_size(Size::Xl2);

        assert_eq!(form.size, Size::M);
    }

    #[test]
    fn prefill_targets_cell_and_resets_quantity() {
        let mut form = StockForm::default();

        form.set_quantity_text("9");
        form.prefill(Brand::BellaCanvas, Size::Xs, Category::Youth);

        assert_eq!(form.brand, Brand::BellaCanvas);
        assert_eq!(form.size, Size::Xs);
        assert_eq!(form.category, Category::Youth);
        assert_eq!(form.quantity(), 1);
    }

    #[test]
    fn change_carries_form_values() -> TestResult {
        let mut form = StockForm::default();

        form.select_brand(Brand::Nike);
        form.set_quantity_text("3");

        let change = form.change(StockAction::Remove)?;

        assert_eq!(change.brand(), Brand::Nike);
        assert_eq!(change.size(), Size::M);
        assert_eq!(change.category(), Category::Adult);
        assert_eq!(change.quantity().get(), 3);
        assert_eq!(change.action(), StockAction::Remove);

        Ok(())
    }
}
