//! Catalogue construction from discovered assets.

use crate::asset::AssetRef;

use super::slug::{SlugAllocator, file_base, slug_root};
use super::title::{Templates, file_title};
use super::{Catalogue, CatalogueEntry};

/// Build a catalogue with the default subtitle/description templates.
pub fn build(assets: impl IntoIterator<Item = AssetRef>) -> Catalogue {
    build_with(assets, &Templates::default())
}

/// Build a catalogue from an unordered collection of assets.
///
/// Assets are sorted by path (ties broken by URL), so the result does not
/// depend on enumeration order. Within a group of assets sharing a slug root,
/// the one with the smallest path gets the bare slug.
///
/// Never fails: every asset yields exactly one entry.
pub fn build_with(assets: impl IntoIterator<Item = AssetRef>, templates: &Templates) -> Catalogue {
    let mut assets: Vec<AssetRef> = assets.into_iter().collect();
    assets.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.url.cmp(&b.url)));

    let mut slugs = SlugAllocator::new();
    let entries = assets
        .into_iter()
        .enumerate()
        .map(|(index, asset)| {
            let filename = file_base(&asset.path).to_string();
            let slug = slugs.claim(slug_root(&filename));
            let title = file_title(&filename);

            CatalogueEntry {
                slug,
                subtitle: templates.subtitle(&title),
                description: templates.description(&filename),
                title,
                image: asset.url,
                index,
                filename,
            }
        })
        .collect();

    Catalogue::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{CatalogueError, FALLBACK_ROOT, is_valid_slug};
    use rustc_hash::FxHashSet;

    fn asset(path: &str) -> AssetRef {
        AssetRef::new(path, format!("/assets/{path}"))
    }

    fn slugs(catalogue: &Catalogue) -> Vec<&str> {
        catalogue.list().iter().map(|e| e.slug.as_str()).collect()
    }

    #[test]
    fn test_collision_goes_to_smallest_path() {
        let catalogue = build(vec![
            AssetRef::new("b/Sunset.png", "url-b"),
            AssetRef::new("a/sunset.png", "url-a"),
        ]);

        let entries = catalogue.list();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].slug, "sunset");
        assert_eq!(entries[0].index, 0);
        assert_eq!(entries[0].filename, "sunset.png");
        assert_eq!(entries[0].image, "url-a");

        assert_eq!(entries[1].slug, "sunset-2");
        assert_eq!(entries[1].index, 1);
        assert_eq!(entries[1].filename, "Sunset.png");
        assert_eq!(entries[1].image, "url-b");
    }

    #[test]
    fn test_symbol_only_filename_falls_back() {
        let catalogue = build(vec![asset("folder/___.jpg")]);
        let entry = catalogue.get(FALLBACK_ROOT).unwrap();
        assert_eq!(entry.slug, "item");
        assert_eq!(entry.filename, "___.jpg");
        assert!(!entry.subtitle.is_empty());
        assert!(!entry.description.is_empty());
    }

    #[test]
    fn test_fallback_roots_are_disambiguated() {
        let catalogue = build(vec![asset("x/___.jpg"), asset("x/---.png"), asset("x/!!.gif")]);
        // Sorted: "x/!!.gif" < "x/---.png" < "x/___.jpg"
        assert_eq!(slugs(&catalogue), ["item", "item-2", "item-3"]);
        assert_eq!(catalogue.get("item").unwrap().filename, "!!.gif");
    }

    #[test]
    fn test_title_and_slug_from_mixed_separators() {
        let catalogue = build(vec![asset("x/My_Cool-Art.webp")]);
        let entry = catalogue.get("my-cool-art").unwrap();
        assert_eq!(entry.title, "My Cool Art");
        assert_eq!(entry.subtitle, "Project My Cool Art");
        assert_eq!(
            entry.description,
            "Identification page – original image: My_Cool-Art.webp"
        );
    }

    #[test]
    fn test_empty_input() {
        let catalogue = build(Vec::new());
        assert!(catalogue.is_empty());
        assert_eq!(catalogue.len(), 0);
        assert!(catalogue.list().is_empty());
        assert_eq!(
            catalogue.get("anything"),
            Err(CatalogueError::NotFound("anything".to_string()))
        );
    }

    #[test]
    fn test_order_independent() {
        let paths = ["c/moon.png", "a/Sun.png", "b/sun.jpg", "a/sun.gif", "z/.png"];

        let forward = build(paths.iter().map(|p| asset(p)));
        let backward = build(paths.iter().rev().map(|p| asset(p)));

        assert_eq!(forward, backward);
        assert_eq!(
            slugs(&forward),
            ["sun", "sun-2", "sun-3", "moon", "item"],
            "sorted order is a/Sun.png, a/sun.gif, b/sun.jpg, c/moon.png, z/.png"
        );
    }

    #[test]
    fn test_same_path_tie_broken_by_url() {
        let a = AssetRef::new("art/sun.png", "/cdn/2");
        let b = AssetRef::new("art/sun.png", "/cdn/1");

        let forward = build(vec![a.clone(), b.clone()]);
        let backward = build(vec![b, a]);

        assert_eq!(forward, backward);
        assert_eq!(forward.get("sun").unwrap().image, "/cdn/1");
        assert_eq!(forward.get("sun-2").unwrap().image, "/cdn/2");
    }

    #[test]
    fn test_rebuild_is_identical() {
        let assets = vec![asset("a/one.png"), asset("a/two.png"), asset("b/one.png")];
        assert_eq!(build(assets.clone()), build(assets));
    }

    #[test]
    fn test_catalogue_invariants() {
        let assets: Vec<AssetRef> = [
            "gallery/Sunset.png",
            "gallery/sunset.jpg",
            "gallery/sunset-2.png",
            "gallery/sunset.webp",
            "gallery/___.png",
            "gallery/.gif",
            "gallery/Café Noir.png",
            "gallery/2024 - Self Portrait (final).jpeg",
            "pixel/sunset.png",
            "no-directory.png",
        ]
        .iter()
        .map(|p| asset(p))
        .collect();
        let count = assets.len();

        let catalogue = build(assets);
        let entries = catalogue.list();

        // One entry per asset
        assert_eq!(entries.len(), count);
        assert_eq!(catalogue.len(), count);

        // Contiguous indices in list order
        for (position, entry) in entries.iter().enumerate() {
            assert_eq!(entry.index, position);
        }

        // Valid, pairwise distinct slugs
        let mut seen = FxHashSet::default();
        for entry in entries {
            assert!(is_valid_slug(&entry.slug), "invalid slug {:?}", entry.slug);
            assert!(seen.insert(entry.slug.as_str()), "duplicate slug {}", entry.slug);
        }

        // Every entry reachable through its own slug, and nothing else indexed
        for entry in entries {
            assert_eq!(catalogue.get(&entry.slug), Ok(entry));
        }
        assert_eq!(catalogue.slugs().count(), count);
        for slug in catalogue.slugs() {
            assert!(entries.iter().any(|e| e.slug == slug));
        }
    }

    #[test]
    fn test_title_capitalizes_after_punctuation() {
        let catalogue = build(vec![asset("gallery/2024 - Self Portrait (final).jpeg")]);
        let entry = catalogue.get("2024-self-portrait-final").unwrap();
        assert!(entry.title.ends_with("Self Portrait (Final)"), "{}", entry.title);
        assert!(entry.subtitle.ends_with("(Final)"));
    }

    #[test]
    fn test_suffix_skips_literal_name() {
        let catalogue = build(vec![
            asset("d/sunset.png"),
            asset("c/sunset.png"),
            asset("b/sunset.png"),
            asset("a/sunset-2.png"),
        ]);
        let slugs: Vec<_> = catalogue.iter().map(|e| e.slug.as_str()).collect();
        // `sunset-2` is taken by the literal name, later suffixes move up
        assert_eq!(slugs, ["sunset-2", "sunset", "sunset-3", "sunset-4"]);
    }

    #[test]
    fn test_custom_templates() {
        let templates = Templates {
            subtitle: "Série {title}".to_string(),
            description: "Imagem original: {filename}".to_string(),
        };
        let catalogue = build_with(vec![asset("a/blue_bird.png")], &templates);
        let entry = catalogue.get("blue-bird").unwrap();
        assert_eq!(entry.subtitle, "Série Blue Bird");
        assert_eq!(entry.description, "Imagem original: blue_bird.png");
    }
}
