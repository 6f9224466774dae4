//! Byte-for-byte mirroring of content sources into the staging directory.
//!
//! Each mirrored file is the canonical machine-readable counterpart of its
//! rendered page, so the copy must preserve the original bytes exactly: no
//! re-serialization, no front-matter stripping.

use crate::discover::Document;
use crate::error::MirrorError;
use std::fs;
use std::path::Path;

/// Copy every document verbatim to `dest_root/{relative_path}`.
///
/// Intermediate directories are created as needed. The first failing copy
/// aborts the whole operation: a partial mirror is a build defect, not a
/// recoverable condition.
pub fn mirror(documents: &[Document], dest_root: &Path) -> Result<(), MirrorError> {
    for doc in documents {
        let dest = dest_root.join(&doc.relative_path);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| MirrorError::MirrorWrite(doc.source_path.clone(), e))?;
        }

        fs::copy(&doc.source_path, &dest)
            .map_err(|e| MirrorError::MirrorWrite(doc.source_path.clone(), e))?;
    }

    Ok(())
}
