//! `[catalogue]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [catalogue]
//! assets = "src/lib/assets/test"                   # Scanned image directory
//! extensions = ["webp", "jpeg", "jpg", "png", "gif"]
//! recursive = false                                # Descend into subdirectories
//! url_prefix = "/assets"                           # Base of resolved image URLs
//! route = "/art"                                   # Detail page route: /art/{slug}
//! subtitle = "Project {title}"
//! description = "Identification page – original image: {filename}"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalogue::{
    FILENAME_PLACEHOLDER, TITLE_PLACEHOLDER, Templates, has_literal_text,
};
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Image directory (relative to site root).
    pub assets: PathBuf,

    /// Accepted file extensions, without the leading dot.
    pub extensions: Vec<String>,

    /// Scan subdirectories too.
    pub recursive: bool,

    /// URL prefix under which the assets directory is served.
    pub url_prefix: String,

    /// Route prefix of detail pages.
    pub route: String,

    /// Subtitle template, `{title}` is replaced.
    pub subtitle: String,

    /// Description template, `{filename}` is replaced.
    pub description: String,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        let templates = Templates::default();
        Self {
            assets: "assets".into(),
            extensions: ["webp", "jpeg", "jpg", "png", "gif"]
                .into_iter()
                .map(String::from)
                .collect(),
            recursive: false,
            url_prefix: "/assets".into(),
            route: "/art".into(),
            subtitle: templates.subtitle,
            description: templates.description,
        }
    }
}

impl CatalogueConfig {
    pub const EXTENSIONS: FieldPath = FieldPath::new("catalogue.extensions");
    pub const URL_PREFIX: FieldPath = FieldPath::new("catalogue.url_prefix");
    pub const ROUTE: FieldPath = FieldPath::new("catalogue.route");
    pub const SUBTITLE: FieldPath = FieldPath::new("catalogue.subtitle");
    pub const DESCRIPTION: FieldPath = FieldPath::new("catalogue.description");

    /// Subtitle/description templates for the builder.
    pub fn templates(&self) -> Templates {
        Templates {
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
        }
    }

    /// Whether a file's extension is one of the configured extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.extensions.is_empty() {
            diag.reject_with_hint(
                Self::EXTENSIONS,
                "no extensions configured, nothing would be scanned",
                "e.g. extensions = [\"png\", \"jpg\", \"webp\"]",
            );
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') || ext.contains('/') {
                diag.reject_with_hint(
                    Self::EXTENSIONS,
                    format!("invalid extension `{ext}`"),
                    "write extensions without the leading dot, e.g. \"png\"",
                );
            }
        }

        for (field, value) in [(Self::URL_PREFIX, &self.url_prefix), (Self::ROUTE, &self.route)] {
            if !value.starts_with('/') {
                diag.reject_with_hint(
                    field,
                    format!("`{value}` must start with `/`"),
                    format!("use \"/{}\"", value.trim_start_matches('/')),
                );
            }
        }

        if !has_literal_text(&self.subtitle) {
            diag.reject_with_hint(
                Self::SUBTITLE,
                "template has no literal text, subtitles could be empty",
                format!("e.g. \"Project {TITLE_PLACEHOLDER}\""),
            );
        }
        if !has_literal_text(&self.description) {
            diag.reject_with_hint(
                Self::DESCRIPTION,
                "template has no literal text, descriptions could be empty",
                format!("e.g. \"Original image: {FILENAME_PLACEHOLDER}\""),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(config: &CatalogueConfig) -> Vec<&'static str> {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag.errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let catalogue = &config.catalogue;
        assert_eq!(catalogue.assets, PathBuf::from("assets"));
        assert_eq!(catalogue.extensions, ["webp", "jpeg", "jpg", "png", "gif"]);
        assert!(!catalogue.recursive);
        assert_eq!(catalogue.url_prefix, "/assets");
        assert_eq!(catalogue.route, "/art");
        assert_eq!(catalogue.templates(), Templates::default());
        assert!(validate(catalogue).is_empty());
    }

    #[test]
    fn test_parse_full_section() {
        let config = test_parse_config(
            r#"
[catalogue]
assets = "src/lib/assets/test"
extensions = ["png"]
recursive = true
url_prefix = "/img"
route = "/works"
subtitle = "Projeto {title}"
description = "Imagem original: {filename}"
"#,
        );
        let catalogue = &config.catalogue;
        assert_eq!(catalogue.assets, PathBuf::from("src/lib/assets/test"));
        assert_eq!(catalogue.extensions, ["png"]);
        assert!(catalogue.recursive);
        assert_eq!(catalogue.url_prefix, "/img");
        assert_eq!(catalogue.route, "/works");
        assert_eq!(catalogue.templates().subtitle("Sol"), "Projeto Sol");
    }

    #[test]
    fn test_accepts_case_insensitive() {
        let catalogue = CatalogueConfig::default();
        assert!(catalogue.accepts(Path::new("a/Sunset.PNG")));
        assert!(catalogue.accepts(Path::new("a/photo.jpeg")));
        assert!(!catalogue.accepts(Path::new("a/notes.txt")));
        assert!(!catalogue.accepts(Path::new("a/README")));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let catalogue = CatalogueConfig {
            extensions: vec![".png".into(), String::new()],
            url_prefix: "assets".into(),
            route: "art".into(),
            subtitle: "{title}".into(),
            description: " {filename} ".into(),
            ..Default::default()
        };
        assert_eq!(
            validate(&catalogue),
            [
                "catalogue.extensions",
                "catalogue.extensions",
                "catalogue.url_prefix",
                "catalogue.route",
                "catalogue.subtitle",
                "catalogue.description",
            ]
        );
    }

    #[test]
    fn test_validate_empty_extensions() {
        let catalogue = CatalogueConfig {
            extensions: Vec::new(),
            ..Default::default()
        };
        assert_eq!(validate(&catalogue), ["catalogue.extensions"]);
    }
}
