use anyhow::Result;
use std::path::PathBuf;

use super::util::open;

pub fn exec(path: PathBuf, id: String) -> Result<()> {
    let mut m = open(&path)?;
    if m.remove_entry(id.as_str())? {
        println!("OK remove: '{}'", id);
    } else {
        println!("remove: '{}' not present (nothing written)", id);
    }
    Ok(())
}
