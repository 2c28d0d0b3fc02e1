//! Site configuration management for `realnet.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site         # [site]
//! │   ├── organization # [organization]
//! │   ├── sitemap      # [sitemap]
//! │   └── build        # [build], [robots]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every section has a complete `Default`, so a missing file or a partial
//! file both yield a usable configuration: present keys override the
//! built-in site constants field by field.

pub mod section;
pub mod types;
mod util;

pub use section::{
    AddressConfig, BuildConfig, OrganizationConfig, RobotsConfig, RouteConfig, SiteDefaults,
    SitemapConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "realnet.toml";

/// Root configuration structure representing realnet.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteDefaults,

    #[serde(default)]
    pub organization: OrganizationConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub robots: RobotsConfig,

    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Locate and load the config file, searching upward from cwd.
    ///
    /// A missing `realnet.toml` falls back to the built-in defaults; any
    /// other missing name is an error.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let Some(path) = find_config_file(config_name, &cwd) else {
            if config_name != Path::new(DEFAULT_CONFIG_NAME) {
                return Err(ConfigError::NotFound(config_name.to_path_buf()).into());
            }
            debug!("config"; "{} not found, using built-in site defaults", config_name.display());
            return Ok(Self::default());
        };

        let mut config = Self::from_path(&path)?;
        config.config_path = path;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

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

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Directory relative paths in the config resolve against.
    pub fn root(&self) -> &Path {
        self.config_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Absolute output directory for generated files.
    pub fn output_dir(&self) -> PathBuf {
        self.root().join(&self.build.output)
    }

    /// Validate every section, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.organization.validate(&mut diag);
        self.sitemap.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
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
