use anyhow::Result;
use std::path::PathBuf;

use super::util::{decode_artifact_args, open};

pub fn exec(path: PathBuf, id: String, artifacts: Vec<String>) -> Result<()> {
    let list = decode_artifact_args(&artifacts)?;
    let mut m = open(&path)?;
    m.create_entry(id.as_str(), list)?;
    println!("OK create: '{}' ({} artifact(s))", id, artifacts.len());
    Ok(())
}
