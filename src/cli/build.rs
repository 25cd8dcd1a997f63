//! Catalogue building orchestration.
//!
//! Build pipeline phases:
//! - **Scan** - Discover image files under `[catalogue].assets`
//! - **Build** - Sort, slug, and describe every image
//! - **Report** - Log disambiguated slugs (verbose)
//! - **Write** - Export `catalogue.json` to the output directory

use std::path::PathBuf;

use anyhow::Result;
use rustc_hash::FxHashMap;

use crate::{
    asset::scan_assets,
    catalogue::{self, Catalogue, CatalogueEntry, slug_root},
    config::SiteConfig,
    debug, debug_do,
    generator::catalogue::write_catalogue,
    log,
    utils::plural_count,
};

/// Scan and build the catalogue, without writing anything.
pub fn load_catalogue(config: &SiteConfig) -> Catalogue {
    let assets = scan_assets(config);
    debug!(
        "scan";
        "{} in {}",
        plural_count(assets.len(), "image"),
        config.root_relative(&config.catalogue.assets).display()
    );
    catalogue::build_with(assets, &config.catalogue.templates())
}

/// Build the catalogue and write the export.
///
/// Returns the path of the written file.
pub fn build_catalogue(config: &SiteConfig, pretty: bool) -> Result<PathBuf> {
    let catalogue = load_catalogue(config);

    debug_do! {
        for (root, entries) in disambiguated(&catalogue) {
            let files: Vec<_> = entries.iter().map(|e| format!("{} -> {}", e.filename, e.slug)).collect();
            debug!("slug"; "`{}` shared by {}: {}", root, plural_count(entries.len(), "image"), files.join(", "));
        }
    }

    if catalogue.is_empty() {
        log!(
            "warning";
            "no images found in {}",
            config.root_relative(&config.catalogue.assets).display()
        );
    }

    let path = write_catalogue(&catalogue, config, pretty)?;
    log!("build"; "catalogued {}", plural_count(catalogue.len(), "image"));
    Ok(path)
}

/// Slug roots claimed by more than one entry, with the entries in catalogue
/// order (the first one holds the bare slug).
fn disambiguated(catalogue: &Catalogue) -> Vec<(String, Vec<&CatalogueEntry>)> {
    let mut groups: FxHashMap<String, Vec<&CatalogueEntry>> = FxHashMap::default();
    for entry in catalogue {
        groups.entry(slug_root(&entry.filename)).or_default().push(entry);
    }

    let mut shared: Vec<_> = groups
        .into_iter()
        .filter(|(_, entries)| entries.len() > 1)
        .collect();
    shared.sort_by_key(|(_, entries)| entries[0].index);
    shared
}
