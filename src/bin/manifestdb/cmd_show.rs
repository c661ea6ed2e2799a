use anyhow::{anyhow, Result};
use std::path::PathBuf;

use super::util::{open, render_list};

pub fn exec(path: PathBuf, id: Option<String>, json: bool) -> Result<()> {
    let m = open(&path)?;

    if let Some(id) = id {
        let list = m
            .artifacts(id.as_str())
            .ok_or_else(|| anyhow!("entry '{}' not found in {}", id, path.display()))?;
        if json {
            println!("{}", serde_json::to_string_pretty(list)?);
        } else {
            println!("{}: {}", id, render_list(list));
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&m.content())?);
        return Ok(());
    }

    println!("manifest: {} ({} entries)", m.path().display(), m.len());
    for key in m.ids() {
        if let Some(list) = m.artifacts(key) {
            println!("  {}: {}", key, render_list(list));
        }
    }
    Ok(())
}
