//! Fatal error kinds for the mirror pipeline.
//!
//! Every variant aborts the build and names the offending path. Absence of
//! an auxiliary file (CNAME, icon, feed) is deliberately *not* represented
//! here: those are ordinary skipped branches in the lifecycle adapter.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a build.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The content root cannot be listed at all.
    #[error("content root is not readable: `{0}`")]
    ContentRootUnreadable(PathBuf, #[source] std::io::Error),

    /// A discovered document cannot be read.
    #[error("failed to read document `{0}`")]
    DocumentRead(PathBuf, #[source] std::io::Error),

    /// A document's front-matter block cannot be parsed.
    #[error("invalid front-matter in `{0}`: {1}")]
    Frontmatter(PathBuf, String),

    /// The manifest cannot be written to the staging directory.
    #[error("failed to write manifest `{0}`")]
    ManifestWrite(PathBuf, #[source] std::io::Error),

    /// A document copy into the staging directory failed.
    #[error("failed to mirror `{0}`")]
    MirrorWrite(PathBuf, #[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_mirror_error_display() {
        let read_err = MirrorError::DocumentRead(
            PathBuf::from("src/broken.md"),
            Error::new(ErrorKind::PermissionDenied, "permission denied"),
        );
        let display = format!("{read_err}");
        assert!(display.contains("failed to read document"));
        assert!(display.contains("broken.md"));

        let fm_err = MirrorError::Frontmatter(
            PathBuf::from("src/bad.md"),
            "mapping values are not allowed".to_string(),
        );
        let display = format!("{fm_err}");
        assert!(display.contains("bad.md"));
        assert!(display.contains("mapping values"));
    }

    #[test]
    fn test_mirror_error_source_chain() {
        use std::error::Error as _;

        let err = MirrorError::ManifestWrite(
            PathBuf::from(".llms-generated/llms.txt"),
            Error::new(ErrorKind::StorageFull, "disk full"),
        );
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("disk full"));
    }
}
