//! Brands

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Garment label stock is tracked under. Each brand owns at most one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Brand {
    /// Gildan
    Gildan,

    /// Bella+Canvas
    #[serde(rename = "Bella+Canvas")]
    BellaCanvas,

    /// Hanes
    Hanes,

    /// Nike
    Nike,
}

impl Brand {
    /// Every tracked brand, in display order.
    pub const ALL: [Brand; 4] = [Brand::Gildan, Brand::BellaCanvas, Brand::Hanes, Brand::Nike];

    /// Canonical name, as stored and as sent over the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Brand::Gildan => "Gildan",
            Brand::BellaCanvas => "Bella+Canvas",
            Brand::Hanes => "Hanes",
            Brand::Nike => "Nike",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Gildan" => Ok(Brand::Gildan),
            // Form-encoded query strings decode `+` as a space.
            "Bella+Canvas" | "Bella Canvas" => Ok(Brand::BellaCanvas),
            "Hanes" => Ok(Brand::Hanes),
            "Nike" => Ok(Brand::Nike),
            _ => Err(ValidationError::UnknownBrand(value.to_string())),
        }
    }
}
