//! Dotted config key, e.g. `catalogue.route`.

use std::fmt;

/// Location of a value in `vitrine.toml`, as `section.key`.
///
/// Sections expose one constant per validated key:
///
/// ```ignore
/// diag.reject_with_hint(CatalogueConfig::EXTENSIONS, "must not be empty", "add \"png\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.0)
    }
}
