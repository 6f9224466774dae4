//! llms.txt manifest generation.
//!
//! Renders the discovered documents into the fixed llms.txt shape: an H1
//! with the site name, a blockquote description, a `## Documentation`
//! heading, and one markdown link per document.

use crate::config::SiteIdentity;
use crate::discover::Document;
use crate::error::MirrorError;
use crate::log;
use std::fs;
use std::path::{Path, PathBuf};

/// Render the manifest text for the given documents.
///
/// Never fails: an empty document sequence yields the header sections and
/// zero list items. Output always ends with a trailing newline.
pub fn build_manifest(documents: &[Document], site: &SiteIdentity) -> String {
    let mut lines = vec![
        format!("# {}", site.name),
        String::new(),
        format!("> {}", site.description),
        String::new(),
        "## Documentation".to_string(),
        String::new(),
    ];

    for doc in documents {
        lines.push(format!("- [{}]({})", doc.title, document_url(doc, site)));
    }

    lines.join("\n") + "\n"
}

/// Render the manifest and write it into the staging directory.
pub fn write_manifest(
    documents: &[Document],
    site: &SiteIdentity,
    staging: &Path,
    file_name: &str,
) -> Result<PathBuf, MirrorError> {
    let text = build_manifest(documents, site);
    let path = staging.join(file_name);

    fs::create_dir_all(staging)
        .map_err(|e| MirrorError::ManifestWrite(path.clone(), e))?;
    fs::write(&path, text).map_err(|e| MirrorError::ManifestWrite(path.clone(), e))?;

    log!("manifest"; "{} ({} documents)", file_name, documents.len());
    Ok(path)
}

/// Compute the manifest URL for a document.
///
/// With a site URL: `{url minus trailing slash}/{relative_path}`.
/// Without one: `/{relative_path}`.
fn document_url(doc: &Document, site: &SiteIdentity) -> String {
    match site.url.as_deref() {
        Some(url) => format!("{}/{}", url.trim_end_matches('/'), doc.relative_path),
        None => format!("/{}", doc.relative_path),
    }
}
