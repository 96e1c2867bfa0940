//! Stockroom Domain Concerns

pub mod inventory;
