//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"           # Output directory (relative to site root)
//! file = "catalogue.json"     # Export filename inside `output`
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Build output directory.
    pub output: PathBuf,

    /// Catalogue export filename, written inside `output`.
    pub file: String,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            file: "catalogue.json".into(),
        }
    }
}

impl BuildSectionConfig {
    pub const FILE: FieldPath = FieldPath::new("build.file");

    /// Full path of the catalogue export.
    pub fn export_path(&self) -> PathBuf {
        self.output.join(&self.file)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let file = Path::new(&self.file);
        let is_plain_name = file.file_name().is_some_and(|name| name == file.as_os_str());
        if self.file.is_empty() || !is_plain_name {
            diag.reject_with_hint(
                Self::FILE,
                format!("`{}` is not a plain file name", self.file),
                "use a name like \"catalogue.json\"; set `build.output` to change the directory",
            );
        }
    }
}
