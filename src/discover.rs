//! Content discovery: recursive traversal with private-subtree pruning.
//!
//! Walks the content root, collects every file with the content extension,
//! reads it, and extracts its front-matter title. Directories and files
//! whose name starts with the private prefix are invisible: a private
//! directory is pruned whole, so nothing beneath it is ever visited.
//!
//! The returned sequence is sorted lexicographically by relative path so
//! every downstream consumer is deterministic across platforms and runs.

use crate::error::MirrorError;
use crate::frontmatter::parse_frontmatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One discovered content file.
#[derive(Debug, Clone)]
pub struct Document {
    /// Location of the original file on disk.
    pub source_path: PathBuf,

    /// Path relative to the content root, forward-slash separated.
    /// Doubles as the site-relative URL path (e.g. `news/launch.md`).
    pub relative_path: String,

    /// Front-matter `title`, falling back to `relative_path`.
    pub title: String,

    /// Raw file text, preserved verbatim for mirroring.
    pub content: String,
}

/// Recursively discover content files under `root`.
///
/// Fails fast: the first unreadable file or malformed front-matter block
/// aborts the whole discovery, identifying the offending path. Partial
/// results are never returned.
pub fn discover(
    root: &Path,
    private_prefix: &str,
    extension: &str,
) -> Result<Vec<Document>, MirrorError> {
    // Probe the root up front so a missing or unlistable content directory
    // gets its own error kind instead of a generic walk failure
    fs::read_dir(root).map_err(|e| MirrorError::ContentRootUnreadable(root.to_path_buf(), e))?;

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        // The root itself is never pruned, whatever its name
        entry.depth() == 0 || !is_private(entry.file_name().to_string_lossy().as_ref(), private_prefix)
    });

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry.map_err(walk_error)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        documents.push(read_document(path, root)?);
    }

    documents.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(documents)
}

/// Read one content file and extract its front-matter title.
fn read_document(path: &Path, root: &Path) -> Result<Document, MirrorError> {
    let relative_path = relative_url_path(path, root)?;

    let content = fs::read_to_string(path)
        .map_err(|e| MirrorError::DocumentRead(path.to_path_buf(), e))?;

    let (front_matter, _body) = parse_frontmatter(&content)
        .map_err(|e| MirrorError::Frontmatter(path.to_path_buf(), e.to_string()))?;

    let title = front_matter.title.unwrap_or_else(|| relative_path.clone());

    Ok(Document {
        source_path: path.to_path_buf(),
        relative_path,
        title,
        content,
    })
}

/// Compute the forward-slash relative path of `path` under `root`.
fn relative_url_path(path: &Path, root: &Path) -> Result<String, MirrorError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        MirrorError::DocumentRead(
            path.to_path_buf(),
            io::Error::other("path escapes the content root"),
        )
    })?;

    let segments: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(segments.join("/"))
}

/// Whether a directory or file name falls under the private convention.
fn is_private(name: &str, prefix: &str) -> bool {
    !prefix.is_empty() && name.starts_with(prefix)
}

/// Convert a walk failure into a fatal error naming the offending path.
fn walk_error(err: walkdir::Error) -> MirrorError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let io_err = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("directory traversal failed"));
    MirrorError::DocumentRead(path, io_err)
}
