//! Stock Handlers

pub(crate) mod create;
pub(crate) mod index;
pub(crate) mod summary;

#[cfg(test)]
pub(crate) mod tests {
    use jiff::Timestamp;
    use stockroom::prelude::*;

    /// A stored Nike record holding `quantity` adult M units.
    pub(crate) fn nike_with_m(quantity: u64) -> InventoryRecord {
        InventoryRecord::restore(
            Brand::Nike,
            vec![SizeEntry {
                size: Size::M,
                quantity,
                category: Category::Adult,
            }],
            quantity,
            Timestamp::UNIX_EPOCH,
            Timestamp::UNIX_EPOCH,
        )
    }
}
