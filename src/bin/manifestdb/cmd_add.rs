use anyhow::Result;
use std::path::PathBuf;

use super::util::{decode_artifact_args, open};

pub fn exec(path: PathBuf, id: String, artifacts: Vec<String>) -> Result<()> {
    let mut list = decode_artifact_args(&artifacts)?;
    let mut m = open(&path)?;
    if list.len() == 1 {
        m.add_artifact_to_entry(id.as_str(), list.remove(0))?;
    } else {
        m.add_artifacts_to_entry(id.as_str(), list)?;
    }
    let total = m.artifacts(id.as_str()).map(|l| l.len()).unwrap_or(0);
    println!("OK add: '{}' +{} (now {})", id, artifacts.len(), total);
    Ok(())
}
