//! `[mirror]` section configuration.
//!
//! Controls the staging directory, the private-path convention, and the
//! auxiliary files copied alongside the mirrored documents.

use super::defaults;
use educe::Educe;
use serde::Deserialize;
use std::path::PathBuf;

/// `[mirror]` section in llms.toml - pipeline behavior.
///
/// # Example
/// ```toml
/// [mirror]
/// staging = ".llms-generated"
/// private_prefix = "_"
/// extension = "md"
/// static_files = ["CNAME", "favicon.svg"]
/// feed = "feed.xml"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct MirrorConfig {
    /// Staging directory consumed by the bundler as passthrough assets.
    /// Cleared and recreated at the start of every build.
    #[serde(default = "defaults::mirror::staging")]
    #[educe(Default = defaults::mirror::staging())]
    pub staging: PathBuf,

    /// Name prefix marking a directory or file as private. Private
    /// directories are pruned whole during discovery.
    #[serde(default = "defaults::mirror::private_prefix")]
    #[educe(Default = defaults::mirror::private_prefix())]
    pub private_prefix: String,

    /// Content file extension, without the leading dot.
    #[serde(default = "defaults::mirror::extension")]
    #[educe(Default = defaults::mirror::extension())]
    pub extension: String,

    /// Manifest file name, written at the staging root.
    #[serde(default = "defaults::mirror::manifest")]
    #[educe(Default = defaults::mirror::manifest())]
    pub manifest: String,

    /// Auxiliary files copied from the content root into staging when
    /// present. Missing entries are skipped, never an error.
    #[serde(default = "defaults::mirror::static_files")]
    #[educe(Default = defaults::mirror::static_files())]
    pub static_files: Vec<String>,

    /// Feed file captured from the host output after rendering, if the
    /// host generated one.
    #[serde(default = "defaults::mirror::feed")]
    #[educe(Default = defaults::mirror::feed())]
    pub feed: String,
}
