//! Front-matter parsing for content files.
//!
//! A content file may begin with a YAML metadata block delimited by `---`
//! lines. Only `title` is interpreted by the pipeline; any other keys are
//! preserved as opaque extra fields.

use serde::Deserialize;
use std::collections::HashMap;

/// Front-matter metadata for a content file.
///
/// Absence of `title` is a normal case, not an error: the discoverer falls
/// back to the document's relative path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    /// Page title, used as the manifest link text.
    #[serde(default)]
    pub title: Option<String>,

    /// Remaining front-matter fields (date, tags, layout, ...).
    #[serde(default, flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// YAML front-matter delimiter line.
const DELIMITER: &str = "---";

/// Split content into a raw front-matter block and the remaining body.
///
/// Returns `None` when the content does not start with a delimiter or the
/// closing delimiter is missing.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let trimmed = content.trim_start();
    if !trimmed.starts_with(DELIMITER) {
        return None;
    }

    let after_open = &trimmed[DELIMITER.len()..];
    let closing_pos = after_open.find(&format!("\n{DELIMITER}"))?;

    let block = after_open[..closing_pos].trim();
    let body = after_open[closing_pos + 1 + DELIMITER.len()..].trim_start();

    Some((block, body))
}

/// Parse front-matter from raw content.
///
/// Content without a front-matter block yields the default (titleless)
/// record and the full text as body. A present but malformed block is a
/// parse error, surfaced to the caller.
pub fn parse_frontmatter(content: &str) -> Result<(FrontMatter, &str), serde_yaml::Error> {
    let Some((block, body)) = split_frontmatter(content) else {
        return Ok((FrontMatter::default(), content));
    };

    // An empty block ("---\n---") carries no metadata
    if block.is_empty() {
        return Ok((FrontMatter::default(), body));
    }

    let front_matter: FrontMatter = serde_yaml::from_str(block)?;
    Ok((front_matter, body))
}
