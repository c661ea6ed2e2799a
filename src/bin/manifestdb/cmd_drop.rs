use anyhow::Result;
use std::path::PathBuf;

use super::util::{decode_artifact_args, open};

pub fn exec(path: PathBuf, id: String, artifacts: Vec<String>) -> Result<()> {
    let list = decode_artifact_args(&artifacts)?;
    let mut m = open(&path)?;
    let removed = if list.len() == 1 {
        usize::from(m.remove_artifact_from_entry(id.as_str(), &list[0])?)
    } else {
        m.remove_artifacts_from_entry(id.as_str(), list)?
    };
    println!("OK drop: '{}' removed {} of {}", id, removed, artifacts.len());
    Ok(())
}
