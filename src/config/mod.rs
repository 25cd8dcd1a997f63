//! Site configuration management for `vitrine.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   └── catalogue  # [catalogue]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                           |
//! |---------------|---------------------------------------------------|
//! | `[catalogue]` | Image directory, extensions, URLs, templates      |
//! | `[build]`     | Output directory and export filename              |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildSectionConfig, CatalogueConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    debug, log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vitrine.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Where `vitrine.toml` was found (set by `load`)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory holding `vitrine.toml`; relative paths resolve against it
    #[serde(skip)]
    pub root: PathBuf,

    /// Catalogue settings
    #[serde(default)]
    pub catalogue: CatalogueConfig,

    /// Export settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root
    /// is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            log!(
                "error";
                "config file '{}' not found in this directory or any parent",
                cli.config.display()
            );
            return Err(ConfigError::NotFound(cli.config.clone()).into());
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = normalize_path(&config_path);

        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.finalize(&root, cli);
        debug!("config"; "using {}", config.config_path.display());
        config.validate()?;

        Ok(config)
    }

    /// Resolve paths against `root` and apply CLI overrides.
    fn finalize(&mut self, root: &Path, cli: &Cli) {
        self.apply_command_options(cli);
        self.normalize_paths(root);
    }

    /// Parse `vitrine.toml` content, silently ignoring unknown keys.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Read and parse `path`, warning about keys nothing consumes.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Warn once per unknown key, so typos do not go unnoticed.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// `path` relative to the project root, for log lines.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(self.get_root())
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply the flags of whichever subcommand is running.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose());
        if let Commands::Build { build_args } = &cli.command {
            self.apply_build_args(build_args);
        }
    }

    /// `vitrine build` flags override `[catalogue]` and `[build]` values.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.catalogue.assets, args.assets.as_ref());
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.catalogue.url_prefix, args.url_prefix.as_ref());
    }

    /// Overwrite `config_option` with a flag value when one was given.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Make `assets` and `output` absolute, resolved against `root`.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.set_root(&root);

        self.catalogue.assets = normalize_path(&root.join(&self.catalogue.assets));
        self.build.output = normalize_path(&root.join(&self.build.output));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Every section reports into one `ConfigDiagnostics`, so all problems
    /// surface in a single run.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.catalogue.validate(&mut diag);
        self.build.validate(&mut diag);

        Ok(diag.into_result()?)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML text.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
