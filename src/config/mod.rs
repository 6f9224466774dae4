//! Plugin configuration management for `llms.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `[site]`   | Site identity (name, description, url)         |
//! | `[mirror]` | Staging dir, private prefix, auxiliary files   |
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "LLMs Unplugged"
//! description = "Ready-to-use teaching resources."
//! url = "https://www.llmsunplugged.org"
//!
//! [mirror]
//! staging = ".llms-generated"
//! private_prefix = "_"
//! static_files = ["CNAME", "favicon.svg"]
//! ```

pub mod defaults;
mod error;
mod mirror;
mod site;

pub use error::ConfigError;
pub use mirror::MirrorConfig;
pub use site::SiteIdentity;

use anyhow::{Result, bail};
use educe::Educe;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing llms.toml
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity for the manifest
    #[serde(default)]
    pub site: SiteIdentity,

    /// Mirror pipeline settings
    #[serde(default)]
    pub mirror: MirrorConfig,
}

impl PluginConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: PluginConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = Self::normalize_path(path);
        Ok(config)
    }

    /// Anchor relative paths to a project root directory.
    ///
    /// The staging directory is the only configurable path; everything else
    /// (content root, output dir) arrives per-build from the host context.
    pub fn with_root(mut self, root: &Path) -> Self {
        if self.mirror.staging.is_relative() {
            self.mirror.staging = Self::normalize_path(&root.join(&self.mirror.staging));
        }
        self
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before a build
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.site.url
            && !url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[site.url] must start with http:// or https://".into()
            ));
        }

        if self.mirror.private_prefix.is_empty() {
            bail!(ConfigError::Validation(
                "[mirror.private_prefix] must not be empty".into()
            ));
        }

        if self.mirror.extension.is_empty() || self.mirror.extension.starts_with('.') {
            bail!(ConfigError::Validation(
                "[mirror.extension] must be a bare extension without the leading dot".into()
            ));
        }

        for name in [&self.mirror.manifest, &self.mirror.feed] {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                bail!(ConfigError::Validation(format!(
                    "`{name}` must be a plain file name at the staging root"
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
