//! manifest/entry — create_entry / remove_entry.

use log::debug;

use crate::error::Result;
use crate::metrics::record_write_skipped;
use crate::value::{Artifact, EntryId};

use super::core::Manifest;

impl Manifest {
    /// Set the entry to exactly `artifacts`, replacing whatever was there.
    pub fn create_entry<I, A, T>(&mut self, id: I, artifacts: T) -> Result<()>
    where
        I: Into<EntryId>,
        A: Into<Artifact>,
        T: IntoIterator<Item = A>,
    {
        let key = id.into().as_key();
        let list: Vec<Artifact> = artifacts.into_iter().map(Into::into).collect();
        debug!("create_entry: '{}' <- {} artifact(s)", key, list.len());
        self.content.insert(key, list);
        self.commit("create_entry")
    }

    /// Remove the entry. Returns false (and writes nothing) when it was absent.
    pub fn remove_entry<I: Into<EntryId>>(&mut self, id: I) -> Result<bool> {
        let key = id.into().as_key();
        if self.content.remove(&key).is_none() {
            debug!("remove_entry: '{}' absent, write skipped", key);
            record_write_skipped();
            return Ok(false);
        }
        debug!("remove_entry: '{}'", key);
        self.commit("remove_entry")?;
        Ok(true)
    }
}
