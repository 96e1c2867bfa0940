//! Stockroom
//!
//! Per-brand, per-size apparel stock records and the rules that keep them consistent.

pub mod brands;
pub mod changes;
pub mod errors;
pub mod prelude;
pub mod records;
pub mod sizes;
pub mod summary;
