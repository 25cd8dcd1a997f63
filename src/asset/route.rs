//! Discovered asset reference: virtual path → resolved URL.

/// A discovered image file.
///
/// `path` is the root-relative virtual path (`/src/art/Sunset.png`) the
/// catalogue sorts and names entries by; `url` is where a renderer loads
/// the image from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRef {
    pub path: String,
    pub url: String,
}

impl AssetRef {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}
