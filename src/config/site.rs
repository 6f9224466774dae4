//! `[site]` section configuration.
//!
//! Static, caller-supplied site identity used verbatim in the manifest
//! header and for building absolute document URLs.

use super::defaults;
use educe::Educe;
use serde::Deserialize;

/// `[site]` section in llms.toml - site identity for the manifest.
///
/// # Example
/// ```toml
/// [site]
/// name = "LLMs Unplugged"
/// description = "Ready-to-use teaching resources."
/// url = "https://www.llmsunplugged.org"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteIdentity {
    /// Site name, rendered as the manifest H1.
    pub name: String,

    /// Site description, rendered as the manifest blockquote.
    pub description: String,

    /// Absolute base URL for document links. A trailing slash is tolerated
    /// and stripped when URLs are built. When unset, links are site-relative.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: Option<String>,
}
