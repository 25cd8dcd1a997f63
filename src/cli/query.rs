//! `list` and `show` command implementation.
//!
//! Both rebuild the catalogue in memory from the image directory and print
//! JSON to stdout. Nothing is written to disk.

use anyhow::Result;

use crate::catalogue::{Catalogue, CatalogueEntry, CatalogueError};
use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::generator::catalogue::{CatalogueExport, ExportEntry};

use super::build::load_catalogue;

/// Print the whole catalogue.
pub fn run_list(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let catalogue = load_catalogue(config);
    let export = CatalogueExport::new(&catalogue, &config.catalogue.route);
    println!("{}", export.to_json(args.pretty)?);
    Ok(())
}

/// Print the entry matching `target`.
pub fn run_show(target: &str, args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let catalogue = load_catalogue(config);
    let route = &config.catalogue.route;
    let entry = find_entry(&catalogue, route, target)?;

    println!("{}", ExportEntry::new(entry, route).to_json(args.pretty)?);
    Ok(())
}

/// Resolve a slug, or a page path when `target` contains a `/`.
fn find_entry<'a>(
    catalogue: &'a Catalogue,
    route: &str,
    target: &str,
) -> Result<&'a CatalogueEntry, CatalogueError> {
    if target.contains('/') {
        catalogue.resolve(route, target)
    } else {
        catalogue.get(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetRef;
    use crate::catalogue::build;

    fn sample() -> Catalogue {
        build(vec![
            AssetRef::new("/art/b/Sunset.png", "/assets/b/Sunset.png"),
            AssetRef::new("/art/a/sunset.png", "/assets/a/sunset.png"),
        ])
    }

    #[test]
    fn test_find_entry_by_slug() {
        let catalogue = sample();
        let entry = find_entry(&catalogue, "/art", "sunset-2").unwrap();
        assert_eq!(entry.filename, "Sunset.png");
    }

    #[test]
    fn test_find_entry_by_path() {
        let catalogue = sample();
        let entry = find_entry(&catalogue, "/art", "/art/sunset/").unwrap();
        assert_eq!(entry.image, "/assets/a/sunset.png");
    }

    #[test]
    fn test_find_entry_not_found() {
        let catalogue = sample();
        assert_eq!(
            find_entry(&catalogue, "/art", "moon"),
            Err(CatalogueError::NotFound("moon".to_string()))
        );
        assert!(find_entry(&catalogue, "/art", "/works/sunset").is_err());
    }
}
