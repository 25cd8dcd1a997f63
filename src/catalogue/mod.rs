//! Artwork catalogue: one entry per discovered image, keyed by slug.
//!
//! ```text
//! assets (any order)          catalogue
//! ─────────────────           ─────────────────────────────────────
//! b/Sunset.png  ──┐           0  sunset     a/sunset.png
//! a/sunset.png  ──┼─ build ─▶ 1  sunset-2   b/Sunset.png
//! x/___.jpg     ──┘           2  item       x/___.jpg
//! ```
//!
//! [`build`] is a pure function: it sorts the assets by path, derives a slug
//! root per filename, disambiguates repeated roots in sorted order, and
//! fills in display metadata. The resulting [`Catalogue`] is immutable; its
//! slug index is folded from the entry list and never maintained separately.

mod builder;
mod entry;
mod error;
mod slug;
mod title;

pub use builder::{build, build_with};
pub use entry::CatalogueEntry;
pub use error::CatalogueError;
pub use slug::slug_root;
pub use title::{FILENAME_PLACEHOLDER, TITLE_PLACEHOLDER, Templates, has_literal_text};

#[cfg(test)]
pub use slug::{FALLBACK_ROOT, is_valid_slug};

use rustc_hash::FxHashMap;

use crate::core::UrlPath;

/// Ordered artwork entries plus a slug index derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
    /// Slug -> position in `entries`.
    by_slug: FxHashMap<String, usize>,
}

impl Catalogue {
    /// Wrap already-built entries and derive the slug index from them.
    fn from_entries(entries: Vec<CatalogueEntry>) -> Self {
        let by_slug = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.slug.clone(), position))
            .collect();
        Self { entries, by_slug }
    }

    /// Look up an entry by slug.
    pub fn get(&self, slug: &str) -> Result<&CatalogueEntry, CatalogueError> {
        self.by_slug
            .get(slug)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| CatalogueError::NotFound(slug.to_string()))
    }

    /// All entries in path order.
    #[inline]
    pub fn list(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogueEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slugs present in the index (unordered).
    #[cfg(test)]
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.by_slug.keys().map(String::as_str)
    }

    /// Resolve a browser path such as `/art/sunset/` against a route prefix.
    ///
    /// The path is percent-decoded and its query string dropped. Anything
    /// that is not exactly one segment below `route` is `NotFound`.
    pub fn resolve(&self, route: &str, browser_path: &str) -> Result<&CatalogueEntry, CatalogueError> {
        let url = UrlPath::from_browser(browser_path);
        match url.segment_after(route) {
            Some(slug) => self.get(slug),
            None => Err(CatalogueError::NotFound(url.to_string())),
        }
    }

    /// Detail page URL of an entry: `{route}/{slug}/`.
    pub fn permalink(route: &str, entry: &CatalogueEntry) -> UrlPath {
        UrlPath::from_page(&format!("{}/{}", route.trim_end_matches('/'), entry.slug))
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a CatalogueEntry;
    type IntoIter = std::slice::Iter<'a, CatalogueEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
