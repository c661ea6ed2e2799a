use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use manifestdb::metrics;
use manifestdb::{Manifest, ManifestConfig};

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let base = std::env::temp_dir();
    base.join(format!("mfdbtest-metrics-{prefix}-{pid}-{t}"))
}

// Единственный тест в этом бинаре: глобальные счётчики не делятся с другими тестами.
#[test]
fn counters_track_loads_writes_and_skips() -> Result<()> {
    metrics::reset();
    let root = unique_root("all");
    fs::create_dir_all(&root)?;
    let path = root.join("m.json");

    let mut m = Manifest::open_with_config(&path, ManifestConfig::default())?;
    m.create_entry("1", ["a"])?;
    m.add_artifact_to_entry("1", "b")?;
    m.remove_entry("ghost")?;
    let _again = Manifest::open_with_config(&path, ManifestConfig::default())?;

    m.set_path(root.join("no-such-dir").join("m.json"))?;
    assert!(m.add_artifact_to_entry("1", "c").is_err());

    let s = metrics::snapshot();
    assert_eq!(s.loads_missing, 1);
    assert_eq!(s.loads_total, 1);
    assert_eq!(s.writes_total, 2);
    assert_eq!(s.writes_skipped, 1);
    assert_eq!(s.writes_failed, 1);
    assert_eq!(s.mutations_total, 3);
    assert!(s.write_bytes > 0);
    assert!(s.avg_write_bytes() > 0.0);
    Ok(())
}
