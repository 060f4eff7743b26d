//! Inventory domain module.
//!
//! This crate contains the business rules for the inventory list, implemented
//! purely as deterministic domain logic (no IO, no terminal, no storage).

pub mod item;
pub mod store;

pub use item::{Item, ItemName, Money, Price, Quantity};
pub use store::{DEFAULT_CAPACITY, InventoryStore};
