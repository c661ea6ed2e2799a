use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use manifestdb::{Artifact, EntryId, Manifest, ManifestConfig, Op};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let base = std::env::temp_dir();
    base.join(format!("mfdbtest-ops-{prefix}-{pid}-{t}-{id}"))
}

fn fresh(prefix: &str) -> Result<(PathBuf, Manifest)> {
    let root = unique_root(prefix);
    fs::create_dir_all(&root)?;
    let path = root.join("m.json");
    let m = Manifest::open_with_config(&path, ManifestConfig::default())?;
    Ok((path, m))
}

#[test]
fn invalid_inputs_leave_memory_and_file_untouched() -> Result<()> {
    let (path, mut m) = fresh("invalid")?;
    m.create_entry("1", ["a"])?;
    let before = m.content();
    let file_before = fs::read(&path)?;

    let bad = [
        json!({"op": "create_entry", "id": {"nested": 1}, "artifacts": ["x"]}),
        json!({"op": "create_entry", "id": "1", "artifacts": "a.out"}),
        json!({"op": "add_artifacts", "id": "1", "artifacts": ["ok", null]}),
        json!({"op": "add_artifact", "id": [1], "artifact": "x"}),
        json!({"op": "add_artifact", "id": "1", "artifact": {"x": 1}}),
        json!({"op": "remove_artifact", "id": "1", "artifact": true}),
        json!({"op": "remove_artifacts", "id": "1", "artifacts": {"a": 1}}),
        json!({"op": "remove_entry", "id": null}),
        json!({"op": "remove_entry", "id": 1.5}),
        json!({"op": "create_entry", "id": "1"}),
        json!({"op": "frobnicate", "id": "1"}),
        json!({"id": "1"}),
        json!("create_entry"),
    ];
    for v in &bad {
        let err = m.apply_json(v).expect_err("must be rejected");
        assert!(err.is_invalid_argument(), "{v}: expected InvalidArgument, got {err}");
        assert_eq!(m.content(), before, "{v}: content changed");
    }
    assert_eq!(fs::read(&path)?, file_before, "file changed on invalid input");
    Ok(())
}

#[test]
fn ops_parse_both_naming_styles() -> Result<()> {
    let a = Op::from_value(&json!({"op": "addArtifactToEntry", "id": 7, "artifact": "x"}))?;
    let b = Op::from_value(&json!({"op": "add_artifact", "id": 7, "artifact": "x"}))?;
    assert_eq!(a, b);
    assert_eq!(
        a,
        Op::AddArtifact {
            id: EntryId::Int(7),
            artifact: Artifact::from("x"),
        }
    );
    assert_eq!(a.name(), "add_artifact");
    assert_eq!(a.id(), &EntryId::Int(7));
    Ok(())
}

#[test]
fn apply_json_matches_direct_calls() -> Result<()> {
    let (_p1, mut via_json) = fresh("json")?;
    let (_p2, mut direct) = fresh("direct")?;

    let ops = json!([
        {"op": "create_entry", "id": "42", "artifacts": ["a.out", "a.log", "a.out"]},
        {"op": "add_artifact", "id": 42, "artifact": 3},
        {"op": "add_artifacts", "id": "build-7", "artifacts": ["x.o", "y.o"]},
        {"op": "remove_artifact", "id": "42", "artifact": "a.out"},
        {"op": "remove_artifacts", "id": "build-7", "artifacts": ["y.o", "nope"]},
        {"op": "removeEntry", "id": "ghost"}
    ]);
    assert_eq!(via_json.apply_all_json(&ops)?, 6);

    direct.create_entry("42", ["a.out", "a.log", "a.out"])?;
    direct.add_artifact_to_entry(42, 3)?;
    direct.add_artifacts_to_entry("build-7", ["x.o", "y.o"])?;
    direct.remove_artifact_from_entry("42", "a.out")?;
    direct.remove_artifacts_from_entry("build-7", ["y.o", "nope"])?;
    direct.remove_entry("ghost")?;

    assert_eq!(via_json.content(), direct.content());
    assert_eq!(
        via_json.artifacts("42").map(|l| l.to_vec()),
        Some(vec![Artifact::from("a.log"), Artifact::from("a.out"), Artifact::from(3)])
    );
    Ok(())
}

#[test]
fn apply_all_stops_at_first_invalid_op() -> Result<()> {
    let (path, mut m) = fresh("stop")?;
    let ops = json!([
        {"op": "create_entry", "id": "1", "artifacts": ["a"]},
        {"op": "add_artifact", "id": "1", "artifact": {"bad": true}},
        {"op": "add_artifact", "id": "1", "artifact": "never"}
    ]);
    let err = m.apply_all_json(&ops).expect_err("second op is invalid");
    assert!(err.is_invalid_argument());

    // first op stays applied (not transactional), third never ran
    assert_eq!(m.artifacts("1").map(|l| l.to_vec()), Some(vec![Artifact::from("a")]));
    let on_disk: Value = serde_json::from_slice(&fs::read(&path)?)?;
    assert_eq!(on_disk, json!({"1": ["a"]}));

    assert!(m.apply_all_json(&json!({"op": "remove_entry"})).unwrap_err().is_invalid_argument());
    Ok(())
}
