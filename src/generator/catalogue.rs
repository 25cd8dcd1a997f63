//! Catalogue JSON export.
//!
//! # Format
//!
//! ```json
//! {
//!   "route": "/art",
//!   "count": 1,
//!   "entries": [
//!     {
//!       "slug": "sunset",
//!       "title": "Sunset",
//!       "subtitle": "Project Sunset",
//!       "description": "Identification page – original image: Sunset.png",
//!       "image": "/assets/Sunset.png",
//!       "index": 0,
//!       "filename": "Sunset.png",
//!       "permalink": "/art/sunset/",
//!       "mime": "image/png"
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::asset::ImageKind;
use crate::catalogue::{Catalogue, CatalogueEntry};
use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::log;

/// Serializable view of a catalogue, in list order.
#[derive(Debug, Serialize)]
pub struct CatalogueExport<'a> {
    pub route: &'a str,
    pub count: usize,
    pub entries: Vec<ExportEntry<'a>>,
}

/// One entry plus the values a renderer would otherwise recompute.
#[derive(Debug, Serialize)]
pub struct ExportEntry<'a> {
    #[serde(flatten)]
    pub entry: &'a CatalogueEntry,
    pub permalink: UrlPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<&'static str>,
}

impl<'a> ExportEntry<'a> {
    pub fn new(entry: &'a CatalogueEntry, route: &str) -> Self {
        Self {
            entry,
            permalink: Catalogue::permalink(route, entry),
            mime: ImageKind::from_path(Path::new(&entry.filename)).map(ImageKind::mime),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        to_json(self, pretty)
    }
}

/// Serialize compact or indented.
fn to_json(value: &impl Serialize, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

impl<'a> CatalogueExport<'a> {
    pub fn new(catalogue: &'a Catalogue, route: &'a str) -> Self {
        Self {
            route,
            count: catalogue.len(),
            entries: catalogue
                .list()
                .iter()
                .map(|entry| ExportEntry::new(entry, route))
                .collect(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        to_json(self, pretty)
    }
}

/// Write `catalogue.json` into the output directory.
///
/// Returns the path written.
pub fn write_catalogue(catalogue: &Catalogue, config: &SiteConfig, pretty: bool) -> Result<PathBuf> {
    let path = config.build.export_path();
    let json = CatalogueExport::new(catalogue, &config.catalogue.route).to_json(pretty)?;

    fs::create_dir_all(&config.build.output).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.build.output.display()
        )
    })?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write catalogue to {}", path.display()))?;

    log!("build"; "{}", config.root_relative(&path).display());
    Ok(path)
}
