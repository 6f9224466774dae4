//! llms-mirror - a build-pipeline plugin for static-site hosts.
//!
//! Mirrors markdown content sources byte-for-byte into a staging directory
//! and synthesizes an `llms.txt` manifest listing every document, so each
//! rendered page ships with a machine-readable `.md` twin.
//!
//! The plugin hooks into the host build as two explicit phases:
//!
//! ```ignore
//! let config = PluginConfig::from_path(Path::new("llms.toml"))?.with_root(root);
//! config.validate()?;
//!
//! let plugin = MirrorPlugin::new(config);
//! plugin.run(&ctx, |ctx| host.render(ctx))?;
//! ```

pub mod config;
pub mod discover;
pub mod error;
pub mod frontmatter;
pub mod logger;
pub mod manifest;
pub mod mirror;
pub mod plugin;

pub use config::{PluginConfig, SiteIdentity};
pub use discover::{Document, discover};
pub use error::MirrorError;
pub use manifest::build_manifest;
pub use plugin::{BuildContext, MirrorPlugin};
