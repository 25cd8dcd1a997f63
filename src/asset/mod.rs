//! Image asset discovery and URL mapping.

mod kind;
mod route;
mod scan;

pub use kind::ImageKind;
pub use route::AssetRef;

// Scanning (reads the filesystem, no side effects)
pub use scan::scan_assets;
