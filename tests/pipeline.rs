//! End-to-end tests for the two-phase mirror pipeline.

use llms_mirror::{BuildContext, MirrorPlugin, PluginConfig};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn make_plugin(root: &Path, config: &str) -> MirrorPlugin {
    let config = PluginConfig::from_str(config).unwrap().with_root(root);
    config.validate().unwrap();
    MirrorPlugin::new(config)
}

fn make_context(root: &Path) -> BuildContext {
    BuildContext {
        content_dir: root.join("src"),
        output_dir: root.join("_site"),
    }
}

/// Snapshot every file under a directory as relative-path -> bytes.
fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(dir).unwrap().to_path_buf();
                files.insert(rel, fs::read(&path).unwrap());
            }
        }
    }
    files
}

const SITE_CONFIG: &str = r#"
    [site]
    name = "Example"
    description = "Demo site."
    url = "https://example.com/"
"#;

#[test]
fn full_pipeline_produces_reference_manifest() {
    let tmp = TempDir::new().unwrap();
    let ctx = make_context(tmp.path());
    write_file(&ctx.content_dir, "index.md", "---\ntitle: Home\n---\n\nWelcome.\n");
    write_file(&ctx.content_dir, "about.md", "# About\n");
    write_file(&ctx.content_dir, "_drafts/secret.md", "not yet\n");

    let plugin = make_plugin(tmp.path(), SITE_CONFIG);
    plugin
        .run(&ctx, |ctx| {
            fs::create_dir_all(&ctx.output_dir)?;
            Ok(())
        })
        .unwrap();

    let staging = &plugin.config().mirror.staging;
    let manifest = fs::read_to_string(staging.join("llms.txt")).unwrap();

    // Entries sorted lexicographically by relative path
    assert_eq!(
        manifest,
        "\
# Example

> Demo site.

## Documentation

- [about.md](https://example.com/about.md)
- [Home](https://example.com/index.md)
"
    );

    // Private subtree is invisible to mirroring too
    assert!(!staging.join("_drafts").exists());
}

#[test]
fn mirrors_are_byte_identical_to_sources() {
    let tmp = TempDir::new().unwrap();
    let ctx = make_context(tmp.path());
    let raw = "---\ntitle: Launch\ndate: 2024-01-01\n---\n\nWe launched! €42\n";
    write_file(&ctx.content_dir, "news/2024-01-01-launch.md", raw);

    let plugin = make_plugin(tmp.path(), SITE_CONFIG);
    plugin.before_render(&ctx).unwrap();

    let mirrored = plugin
        .config()
        .mirror
        .staging
        .join("news/2024-01-01-launch.md");
    assert_eq!(fs::read(mirrored).unwrap(), raw.as_bytes());
}

#[test]
fn pipeline_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let ctx = make_context(tmp.path());
    write_file(&ctx.content_dir, "index.md", "---\ntitle: Home\n---\nHi\n");
    write_file(&ctx.content_dir, "guide/setup.md", "# Setup\n");
    write_file(&ctx.content_dir, "CNAME", "example.com\n");

    let plugin = make_plugin(tmp.path(), SITE_CONFIG);
    let render = |ctx: &BuildContext| -> anyhow::Result<()> {
        fs::create_dir_all(&ctx.output_dir)?;
        fs::write(ctx.output_dir.join("feed.xml"), "<rss/>")?;
        Ok(())
    };

    plugin.run(&ctx, render).unwrap();
    let first = snapshot(&plugin.config().mirror.staging);

    plugin.run(&ctx, render).unwrap();
    let second = snapshot(&plugin.config().mirror.staging);

    assert_eq!(first, second);
    assert!(first.contains_key(Path::new("llms.txt")));
    assert!(first.contains_key(Path::new("feed.xml")));
    assert!(first.contains_key(Path::new("CNAME")));
}

#[test]
fn empty_content_tree_yields_header_only_manifest() {
    let tmp = TempDir::new().unwrap();
    let ctx = make_context(tmp.path());
    fs::create_dir_all(&ctx.content_dir).unwrap();

    let plugin = make_plugin(tmp.path(), SITE_CONFIG);
    plugin.before_render(&ctx).unwrap();

    let staging = &plugin.config().mirror.staging;
    let manifest = fs::read_to_string(staging.join("llms.txt")).unwrap();
    assert!(manifest.starts_with("# Example\n"));
    assert!(manifest.contains("## Documentation"));
    assert!(!manifest.contains("- ["));

    // Zero mirror writes: only the manifest sits in staging
    let files = snapshot(staging);
    assert_eq!(files.len(), 1);
}

#[test]
fn document_failure_aborts_before_manifest_write() {
    let tmp = TempDir::new().unwrap();
    let ctx = make_context(tmp.path());
    write_file(&ctx.content_dir, "good.md", "fine\n");
    write_file(&ctx.content_dir, "broken.md", "---\ntitle: [unclosed\n---\n");

    let plugin = make_plugin(tmp.path(), SITE_CONFIG);
    let err = plugin.before_render(&ctx).unwrap_err();

    assert!(format!("{err:#}").contains("broken.md"));
    assert!(!plugin.config().mirror.staging.join("llms.txt").exists());
    // Fail-fast means no partial mirror either
    assert!(!plugin.config().mirror.staging.join("good.md").exists());
}

#[test]
fn custom_extension_and_prefix_are_honored() {
    let tmp = TempDir::new().unwrap();
    let ctx = make_context(tmp.path());
    write_file(&ctx.content_dir, "page.markdown", "# Page\n");
    write_file(&ctx.content_dir, "page.md", "ignored extension\n");
    write_file(&ctx.content_dir, ".hidden/inner.markdown", "hidden\n");

    let plugin = make_plugin(
        tmp.path(),
        r#"
        [site]
        name = "Example"
        description = "Demo site."

        [mirror]
        private_prefix = "."
        extension = "markdown"
    "#,
    );
    plugin.before_render(&ctx).unwrap();

    let staging = &plugin.config().mirror.staging;
    assert!(staging.join("page.markdown").exists());
    assert!(!staging.join("page.md").exists());
    assert!(!staging.join(".hidden").exists());

    let manifest = fs::read_to_string(staging.join("llms.txt")).unwrap();
    assert!(manifest.contains("- [page.markdown](/page.markdown)"));
}
