//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vitrine.toml`:
//!
//! | Module      | TOML Section    | Purpose                                   |
//! |-------------|-----------------|-------------------------------------------|
//! | `build`     | `[build]`       | Output directory for the catalogue export |
//! | `catalogue` | `[catalogue]`   | Asset discovery, URLs, routes, templates  |

mod build;
mod catalogue;

pub use build::BuildSectionConfig;
pub use catalogue::CatalogueConfig;
