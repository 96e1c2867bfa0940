//! Inventory Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    brands::Brand,
    changes::StockAction,
    sizes::{Category, Size},
};

/// Stock held for one (size, category) pair of a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    /// Size label, without category prefix
    pub size: Size,

    /// Units in stock
    pub quantity: u64,

    /// Sizing line
    pub category: Category,
}

impl SizeEntry {
    fn matches(&self, size: Size, category: Category) -> bool {
        self.size == size && self.category == category
    }
}

/// A brand's stock across all of its sizes.
///
/// The total is derived from the entries. It is only brought up to date by
/// [`InventoryRecord::reconcile`], which every write path calls before persisting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    brand: Brand,
    sizes: Vec<SizeEntry>,
    total_quantity: u64,
    last_updated: Timestamp,
    created_at: Timestamp,
}

impl InventoryRecord {
    /// Empty record for a brand that has never been stocked.
    pub fn new(brand: Brand, now: Timestamp) -> Self {
        Self {
            brand,
            sizes: Vec::new(),
            total_quantity: 0,
            last_updated: now,
            created_at: now,
        }
    }

    /// Rebuild a record from persisted state, as stored.
    pub fn restore(
        brand: Brand,
        sizes: Vec<SizeEntry>,
        total_quantity: u64,
        last_updated: Timestamp,
        created_at: Timestamp,
    ) -> Self {
        Self {
            brand,
            sizes,
            total_quantity,
            last_updated,
            created_at,
        }
    }

    /// Brand this record belongs to.
    pub fn brand(&self) -> Brand {
        self.brand
    }

    /// All size entries, in insertion order.
    pub fn sizes(&self) -> &[SizeEntry] {
        &self.sizes
    }

    /// Total units as of the last reconcile.
    pub fn total_quantity(&self) -> u64 {
        self.total_quantity
    }

    /// Time of the last reconcile.
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    /// Time the record was first constructed.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Entry for a (size, category) pair, if it has ever been stocked.
    pub fn entry(&self, size: Size, category: Category) -> Option<&SizeEntry> {
        self.sizes.iter().find(|entry| entry.matches(size, category))
    }

    /// Units held for a (size, category) pair. Missing entries hold zero.
    pub fn quantity_of(&self, size: Size, category: Category) -> u64 {
        self.entry(size, category).map_or(0, |entry| entry.quantity)
    }

    /// Entries in the adult category.
    pub fn adult_sizes(&self) -> impl Iterator<Item = &SizeEntry> {
        self.sizes_in(Category::Adult)
    }

    /// Entries in the youth category.
    pub fn youth_sizes(&self) -> impl Iterator<Item = &SizeEntry> {
        self.sizes_in(Category::Youth)
    }

    fn sizes_in(&self, category: Category) -> impl Iterator<Item = &SizeEntry> {
        self.sizes
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// Apply an add or remove to one entry. Returns `false` only when no entry
    /// was touched.
    ///
    /// Adding to a missing entry creates it. Removing from a missing entry is a
    /// no-op and does not create one. Removals clamp at zero; an existing entry
    /// counts as touched even when its quantity is already zero.
    pub fn adjust(
        &mut self,
        size: Size,
        category: Category,
        quantity: u64,
        action: StockAction,
    ) -> bool {
        let existing = self
            .sizes
            .iter_mut()
            .find(|entry| entry.matches(size, category));

        match (existing, action) {
            (Some(entry), StockAction::Add) => {
                entry.quantity = entry.quantity.saturating_add(quantity);

                true
            }
            (Some(entry), StockAction::Remove) => {
                entry.quantity = entry.quantity.saturating_sub(quantity);

                true
            }
            (None, StockAction::Add) => {
                self.sizes.push(SizeEntry {
                    size,
                    quantity,
                    category,
                });

                true
            }
            (None, StockAction::Remove) => false,
        }
    }

    /// Recompute the derived total and stamp the update time.
    ///
    /// Unconditional and idempotent for a fixed `now`.
    pub fn reconcile(&mut self, now: Timestamp) {
        self.total_quantity = self.entries_total();
        self.last_updated = now;
    }

    /// Whether the stored total matches the entries.
    pub fn is_reconciled(&self) -> bool {
        self.total_quantity == self.entries_total()
    }

    fn entries_total(&self) -> u64 {
        self.sizes
            .iter()
            .fold(0_u64, |total, entry| total.saturating_add(entry.quantity))
    }
}
