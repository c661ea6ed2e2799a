use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use manifestdb::{Manifest, ManifestBuilder, ManifestConfig};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let base = std::env::temp_dir();
    base.join(format!("mfdbtest-builder-{prefix}-{pid}-{t}-{id}"))
}

#[test]
fn defaults_match_classic_layout() {
    let cfg = ManifestConfig::default();
    assert_eq!(cfg.indent, 1);
    assert!(cfg.atomic_write);
    assert!(!cfg.fsync);
    assert!(!cfg.require_existing);

    let shown = cfg.to_string();
    assert!(shown.contains("indent: 1"), "{shown}");
    assert!(ManifestConfig::default().with_indent(0).to_string().contains("indent: compact"));
}

#[test]
fn builder_overrides_fields() {
    let cfg = ManifestBuilder::from_default()
        .indent(4)
        .atomic_write(false)
        .fsync(true)
        .require_existing(true)
        .build();
    assert_eq!(
        cfg,
        ManifestConfig::default()
            .with_indent(4)
            .with_atomic_write(false)
            .with_fsync(true)
            .with_require_existing(true)
    );
}

#[test]
fn builder_opens_manifest_with_its_config() -> Result<()> {
    let root = unique_root("open");
    fs::create_dir_all(&root)?;
    let path = root.join("m.json");

    let mut m = Manifest::builder().indent(2).require_existing(false).open(&path)?;
    assert_eq!(m.config().indent, 2);
    m.create_entry("1", ["a"])?;
    assert_eq!(fs::read_to_string(&path)?, "{\n  \"1\": [\n    \"a\"\n  ]\n}");

    let strict = ManifestBuilder::from_default().require_existing(true);
    assert!(strict.open(root.join("missing.json")).is_err());
    Ok(())
}
