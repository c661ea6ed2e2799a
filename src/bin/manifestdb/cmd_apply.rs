use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::path::PathBuf;

use super::util::open;

pub fn exec(path: PathBuf, ops_file: Option<PathBuf>, ops_json: Option<String>) -> Result<()> {
    let raw = if let Some(p) = ops_file {
        std::fs::read_to_string(&p).with_context(|| format!("read ops file {}", p.display()))?
    } else if let Some(s) = ops_json {
        s
    } else {
        return Err(anyhow!("provide --ops-file or --ops-json"));
    };

    let ops: Value = serde_json::from_str(&raw).context("parse ops json (array of objects)")?;
    if ops.as_array().map(|a| a.is_empty()).unwrap_or(false) {
        println!("No ops to execute.");
        return Ok(());
    }

    let mut m = open(&path)?;
    let applied = m.apply_all_json(&ops)?;
    println!("Apply: OK ({} op(s))", applied);
    Ok(())
}
