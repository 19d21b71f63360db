//! Inventory domain module.
//!
//! This crate contains the item record and its field rules, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod validation;

pub use item::{Item, ItemDraft, ItemFields};
pub use validation::{
    not_found_message, NAME_IN_USE, NAME_INVALID, NAME_REQUIRED, QUANTITY_INVALID,
    SERIAL_IN_USE, SERIAL_INVALID, SERIAL_REQUIRED,
};
