//! Sizes and sizing categories

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Sizing line. The same size label means a different garment in each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Adult sizing
    Adult,

    /// Youth sizing
    Youth,
}

impl Category {
    /// Both categories, adult first.
    pub const ALL: [Category; 2] = [Category::Adult, Category::Youth];

    /// Wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Adult => "adult",
            Category::Youth => "youth",
        }
    }

    /// Sizes offered in this category, smallest first.
    pub const fn sizes(self) -> &'static [Size] {
        match self {
            Category::Adult => &Size::ALL,
            Category::Youth => &YOUTH_SIZES,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "adult" => Ok(Category::Adult),
            "youth" => Ok(Category::Youth),
            _ => Err(ValidationError::UnknownCategory(value.to_string())),
        }
    }
}

/// Size label, stored without any category prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Size {
    /// XS
    #[serde(rename = "XS")]
    Xs,

    /// S
    S,

    /// M
    M,

    /// L
    L,

    /// XL
    #[serde(rename = "XL")]
    Xl,

    /// 2XL
    #[serde(rename = "2XL")]
    Xl2,

    /// 3XL
    #[serde(rename = "3XL")]
    Xl3,

    /// 4XL
    #[serde(rename = "4XL")]
    Xl4,

    /// 5XL
    #[serde(rename = "5XL")]
    Xl5,
}

const YOUTH_SIZES: [Size; 5] = [Size::Xs, Size::S, Size::M, Size::L, Size::Xl];

impl Size {
    /// Every size label, smallest first.
    pub const ALL: [Size; 9] = [
        Size::Xs,
        Size::S,
        Size::M,
        Size::L,
        Size::Xl,
        Size::Xl2,
        Size::Xl3,
        Size::Xl4,
        Size::Xl5,
    ];

    /// Stored label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xl2 => "2XL",
            Size::Xl3 => "3XL",
            Size::Xl4 => "4XL",
            Size::Xl5 => "5XL",
        }
    }

    /// Whether this size is offered in `category`.
    pub fn is_offered_in(self, category: Category) -> bool {
        category.sizes().contains(&self)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownSize(value.to_string()))
    }
}
