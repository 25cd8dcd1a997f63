//! Catalogue entry type.

use serde::{Deserialize, Serialize};

/// One artwork in the catalogue, built from exactly one discovered asset.
///
/// Entries are created by [`build`](super::build) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    /// Unique URL-safe key (`[a-z0-9]` groups joined by `-`).
    pub slug: String,
    /// Display title derived from the filename.
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Resolved image URL, copied from the asset.
    pub image: String,
    /// Zero-based position in path order.
    pub index: usize,
    /// Base name of the source file, extension included.
    pub filename: String,
}
