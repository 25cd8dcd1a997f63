//! Shared helpers.

pub mod path;
pub mod plural;

pub use plural::plural_count;
