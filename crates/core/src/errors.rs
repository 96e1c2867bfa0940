//! Validation errors

use thiserror::Error;

use crate::sizes::{Category, Size};

/// A stock change request that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more of brand, size, category, quantity and action is missing or empty.
    #[error("missing required fields")]
    MissingRequiredFields,

    /// Brand is not one of the tracked brands.
    #[error("unknown brand {0:?}")]
    UnknownBrand(String),

    /// Size label does not exist.
    #[error("unknown size {0:?}")]
    UnknownSize(String),

    /// Category is neither adult nor youth.
    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    /// Size exists but is not offered in the requested category.
    #[error("size {size} is not offered in the {category} category")]
    SizeNotOffered {
        /// Requested size
        size: Size,

        /// Requested category
        category: Category,
    },

    /// Quantity is not a positive integer.
    #[error("quantity must be a positive integer, got {0}")]
    InvalidQuantity(i64),

    /// Action is neither add nor remove.
    #[error("unknown action {0:?}")]
    UnknownAction(String),
}
