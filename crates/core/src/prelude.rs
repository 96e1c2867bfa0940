//! Stockroom prelude

pub use crate::{
    brands::Brand,
    changes::{AppliedChange, StockAction, StockChange, StockChangeDraft, apply_stock_change},
    errors::ValidationError,
    records::{InventoryRecord, SizeEntry},
    sizes::{Category, Size},
    summary::{BrandSummary, grand_total, summarize},
};
