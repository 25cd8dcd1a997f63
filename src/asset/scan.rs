//! Asset scanning functions (pure, no side effects).

use std::path::Path;

use jwalk::WalkDir;

use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::debug;
use crate::utils::path::to_virtual;

use super::AssetRef;

/// Scan the configured image directory.
///
/// Returns one [`AssetRef`] per image file whose extension is listed in
/// `[catalogue].extensions`. Hidden files are skipped, and subdirectories
/// are only visited when `recursive = true`.
///
/// ```text
/// assets/                    path                        url
/// ├── Sunset.png        ->   /assets/Sunset.png          /assets/Sunset.png
/// ├── My Art.webp       ->   /assets/My Art.webp         /assets/My%20Art.webp
/// ├── notes.txt         ->   (skipped, extension)
/// └── old/
///     └── moon.gif      ->   (skipped unless recursive)
/// ```
///
/// The result is in no particular order; the catalogue builder sorts it.
///
/// # Pure Function
///
/// This function only reads the filesystem and returns data
pub fn scan_assets(config: &SiteConfig) -> Vec<AssetRef> {
    let catalogue = &config.catalogue;
    let assets_dir = &catalogue.assets;
    if !assets_dir.is_dir() {
        debug!("scan"; "assets directory {} does not exist", assets_dir.display());
        return Vec::new();
    }

    let max_depth = if catalogue.recursive { usize::MAX } else { 1 };
    WalkDir::new(assets_dir)
        .max_depth(max_depth)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| catalogue.accepts(path))
        .map(|path| asset_ref(&path, assets_dir, config))
        .collect()
}

/// Build the virtual path and served URL of one image file.
fn asset_ref(path: &Path, assets_dir: &Path, config: &SiteConfig) -> AssetRef {
    let virtual_path = to_virtual(&config.root_relative(path));

    let rel = path.strip_prefix(assets_dir).unwrap_or(path);
    let prefix = config.catalogue.url_prefix.trim_end_matches('/');
    let url = UrlPath::from_asset(&format!("{}{}", prefix, to_virtual(rel)));

    AssetRef::new(virtual_path, url.to_encoded())
}
