//! Build-lifecycle adapter: two explicit phases around the host render.
//!
//! The host's asset bundler consumes passthrough files from a single
//! staging directory, so the mirrored documents and the manifest must be
//! in place *before* the host renders, while the feed (generated by the
//! host later in its pipeline) can only be captured *after*.
//!
//! # Build Flow
//!
//! ```text
//! before_render() ──► host render ──► after_render()
//!       │                                  │
//!       ├─ clear + recreate staging        └─ capture feed.xml
//!       ├─ discover()                         (if the host made one)
//!       ├─ mirror()
//!       ├─ write_manifest()
//!       └─ copy static files (CNAME, icon)
//! ```

use crate::config::PluginConfig;
use crate::discover::discover;
use crate::log;
use crate::manifest::write_manifest;
use crate::mirror::mirror;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-build directories supplied by the host pipeline events.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Content root holding the markdown sources.
    pub content_dir: PathBuf,

    /// Final output directory of the host pipeline.
    pub output_dir: PathBuf,
}

/// The llms.txt mirror plugin.
///
/// Owns a validated configuration; each build invocation starts from a
/// fresh filesystem scan, so the plugin itself carries no per-build state.
pub struct MirrorPlugin {
    config: PluginConfig,
}

impl MirrorPlugin {
    /// Create a plugin from a validated configuration.
    pub fn new(config: PluginConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Pre-render phase: stage mirrors, manifest, and static files.
    ///
    /// Clears and recreates the staging directory, then discovers content,
    /// mirrors it, and writes the manifest. Any document failure is fatal;
    /// a missing static file is skipped.
    pub fn before_render(&self, ctx: &BuildContext) -> Result<()> {
        let staging = &self.config.mirror.staging;

        // Stale files from the previous build must never leak through
        if staging.exists() {
            fs::remove_dir_all(staging).with_context(|| {
                format!("failed to clear staging directory: {}", staging.display())
            })?;
        }
        fs::create_dir_all(staging).with_context(|| {
            format!("failed to create staging directory: {}", staging.display())
        })?;

        let documents = discover(
            &ctx.content_dir,
            &self.config.mirror.private_prefix,
            &self.config.mirror.extension,
        )?;
        log!("discover"; "found {} documents", documents.len());

        mirror(&documents, staging)?;
        log!("mirror"; "{} files staged", documents.len());

        write_manifest(
            &documents,
            &self.config.site,
            staging,
            &self.config.mirror.manifest,
        )?;

        let copied = self.copy_static_files(&ctx.content_dir, staging)?;
        if copied > 0 {
            log!("static"; "{copied} auxiliary files staged");
        }

        Ok(())
    }

    /// Post-render phase: capture the feed the host may have generated.
    ///
    /// Feeds are optional; absence is a logged no-op, not an error.
    pub fn after_render(&self, ctx: &BuildContext) -> Result<()> {
        let feed = &self.config.mirror.feed;
        let feed_src = ctx.output_dir.join(feed);

        if !feed_src.exists() {
            log!("feed"; "no {feed} in output, skipping");
            return Ok(());
        }

        let feed_dest = self.config.mirror.staging.join(feed);
        fs::copy(&feed_src, &feed_dest)
            .with_context(|| format!("failed to capture feed: {}", feed_src.display()))?;
        log!("feed"; "captured {feed}");

        Ok(())
    }

    /// Run the full two-phase lifecycle around the host render step.
    ///
    /// Owns the ordering: staging is populated before the host renders,
    /// and the feed is captured after it finishes.
    pub fn run<F>(&self, ctx: &BuildContext, render: F) -> Result<()>
    where
        F: FnOnce(&BuildContext) -> Result<()>,
    {
        self.before_render(ctx)?;
        render(ctx)?;
        self.after_render(ctx)
    }

    /// Copy the configured auxiliary files from the content root into
    /// staging. Returns how many were present and copied.
    ///
    /// Absence is an explicit skipped branch; a file that exists but cannot
    /// be copied is still fatal.
    fn copy_static_files(&self, content_dir: &Path, staging: &Path) -> Result<usize> {
        let mut copied = 0;
        for name in &self.config.mirror.static_files {
            let src = content_dir.join(name);
            if !src.exists() {
                continue;
            }

            fs::copy(&src, staging.join(name))
                .with_context(|| format!("failed to copy static file: {}", src.display()))?;
            copied += 1;
        }
        Ok(copied)
    }
}
