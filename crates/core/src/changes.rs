//! Stock changes

use std::{fmt, num::NonZeroU64, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    brands::Brand,
    errors::ValidationError,
    records::InventoryRecord,
    sizes::{Category, Size},
};

/// Direction of a stock change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockAction {
    /// Increase the entry by the requested quantity.
    Add,

    /// Decrease the entry by the requested quantity, stopping at zero.
    Remove,
}

impl StockAction {
    /// Wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            StockAction::Add => "add",
            StockAction::Remove => "remove",
        }
    }
}

impl fmt::Display for StockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockAction {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "add" => Ok(StockAction::Add),
            "remove" => Ok(StockAction::Remove),
            _ => Err(ValidationError::UnknownAction(value.to_string())),
        }
    }
}

/// A validated request to change one size entry of one brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockChange {
    brand: Brand,
    size: Size,
    category: Category,
    quantity: NonZeroU64,
    action: StockAction,
}

impl StockChange {
    /// Build a change, checking the size is offered in the category.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SizeNotOffered`] for combinations such as youth 2XL.
    pub fn new(
        brand: Brand,
        size: Size,
        category: Category,
        quantity: NonZeroU64,
        action: StockAction,
    ) -> Result<Self, ValidationError> {
        if !size.is_offered_in(category) {
            return Err(ValidationError::SizeNotOffered { size, category });
        }

        Ok(Self {
            brand,
            size,
            category,
            quantity,
            action,
        })
    }

    /// Target brand.
    pub fn brand(&self) -> Brand {
        self.brand
    }

    /// Target size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Target category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Units to add or remove.
    pub fn quantity(&self) -> NonZeroU64 {
        self.quantity
    }

    /// Direction.
    pub fn action(&self) -> StockAction {
        self.action
    }
}

/// Unvalidated stock change fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChangeDraft {
    /// Brand name
    pub brand: Option<String>,

    /// Size label
    pub size: Option<String>,

    /// Category name
    pub category: Option<String>,

    /// Units to add or remove
    pub quantity: Option<i64>,

    /// `add` or `remove`
    pub action: Option<String>,
}

impl StockChangeDraft {
    /// Check presence first, then each field's value.
    ///
    /// Empty strings and a zero quantity count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequiredFields`] when any field is absent or
    /// empty, otherwise the first field-level error found.
    pub fn validate(self) -> Result<StockChange, ValidationError> {
        let (Some(brand), Some(size), Some(category), Some(quantity), Some(action)) = (
            non_empty(self.brand),
            non_empty(self.size),
            non_empty(self.category),
            self.quantity.filter(|quantity| *quantity != 0),
            non_empty(self.action),
        ) else {
            return Err(ValidationError::MissingRequiredFields);
        };

        let quantity = u64::try_from(quantity)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or(ValidationError::InvalidQuantity(quantity))?;

        StockChange::new(
            brand.parse()?,
            size.parse()?,
            category.parse()?,
            quantity,
            action.parse()?,
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Result of applying a [`StockChange`] to a brand's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedChange {
    /// The record after the change, reconciled when modified.
    pub record: InventoryRecord,

    /// The record did not exist before this change.
    pub created: bool,

    /// An entry was created or an existing one was adjusted.
    pub modified: bool,
}

impl AppliedChange {
    /// Whether the record must be written back.
    pub fn needs_write(&self) -> bool {
        self.modified
    }
}

/// Apply a change to the brand's current record, constructing one when absent.
///
/// The record is reconciled at `now` whenever an entry was touched, including a
/// removal from an entry already at zero. Only a removal from an entry that
/// never existed leaves the record as it was and reports `modified: false`.
pub fn apply_stock_change(
    existing: Option<InventoryRecord>,
    change: &StockChange,
    now: Timestamp,
) -> AppliedChange {
    let (mut record, created) = match existing {
        Some(record) => (record, false),
        None => (InventoryRecord::new(change.brand, now), true),
    };

    let modified = record.adjust(
        change.size,
        change.category,
        change.quantity.get(),
        change.action,
    );

    if modified {
        record.reconcile(now);
    }

    AppliedChange {
        record,
        created,
        modified,
    }
}
