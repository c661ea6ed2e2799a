//! manifest/core — структура Manifest, открытие, доступ к содержимому, запись.
//!
//! Политика загрузки: файла нет -> пустой манифест (или NotFound при
//! require_existing); файл есть, но битый -> MalformedPersistedState, open() падает.
//!
//! Политика записи: синхронно, результат возвращается вызывающему. При ошибке
//! записи память уже изменена; повторить запись можно через persist().

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::{ManifestBuilder, ManifestConfig};
use crate::error::{ManifestError, Result};
use crate::metrics::record_mutation;
use crate::persist::{read_content, write_content};
use crate::value::{Artifact, EntryId};

use super::Content;

#[derive(Debug)]
pub struct Manifest {
    pub(crate) path: PathBuf,
    pub(crate) content: Content,
    pub(crate) cfg: ManifestConfig,
}

fn check_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ManifestError::invalid("path must be a non-empty string"));
    }
    Ok(())
}

impl Manifest {
    /// Open the manifest at `path` with the default configuration.
    /// Env (MF_*) is never consulted here; use `Manifest::builder()` for that.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, ManifestConfig::default())
    }

    /// Open the manifest at `path`: parse the file if it exists, else start empty.
    pub fn open_with_config<P: AsRef<Path>>(path: P, cfg: ManifestConfig) -> Result<Self> {
        let path = path.as_ref();
        check_path(path)?;

        let content = match read_content(path)? {
            Some(c) => {
                debug!("manifest open: {} ({} entries)", path.display(), c.len());
                c
            }
            None if cfg.require_existing => {
                return Err(ManifestError::NotFound(path.to_path_buf()));
            }
            None => {
                info!("manifest {} does not exist, starting empty", path.display());
                Content::new()
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            content,
            cfg,
        })
    }

    pub fn builder() -> ManifestBuilder {
        ManifestBuilder::new()
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rebind the manifest to another file. Nothing is read or written now;
    /// the next mutation writes the full content to the new path.
    pub fn set_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        check_path(path)?;
        debug!(
            "manifest path: {} -> {}",
            self.path.display(),
            path.display()
        );
        self.path = path.to_path_buf();
        Ok(())
    }

    #[inline]
    pub fn config(&self) -> &ManifestConfig {
        &self.cfg
    }

    /// Deep copy of the whole mapping. Changing it never touches the manifest.
    pub fn content(&self) -> Content {
        self.content.clone()
    }

    /// Borrow the artifact list of one entry.
    pub fn artifacts<I: Into<EntryId>>(&self, id: I) -> Option<&[Artifact]> {
        self.content.get(&id.into().as_key()).map(|v| v.as_slice())
    }

    pub fn contains_entry<I: Into<EntryId>>(&self, id: I) -> bool {
        self.content.contains_key(&id.into().as_key())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Entry keys in file order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.content.keys().map(|k| k.as_str())
    }

    /// Write the current content to the backing file.
    /// Use it to retry after a failed mutation write.
    pub fn persist(&self) -> Result<()> {
        write_content(&self.path, &self.content, &self.cfg)?;
        Ok(())
    }

    /// Replace in-memory content with what the backing file holds now.
    pub fn reload(&mut self) -> Result<()> {
        self.content = match read_content(&self.path)? {
            Some(c) => c,
            None if self.cfg.require_existing => {
                return Err(ManifestError::NotFound(self.path.clone()));
            }
            None => Content::new(),
        };
        Ok(())
    }

    /// Common tail of every mutation: count it and write the file.
    pub(crate) fn commit(&self, what: &str) -> Result<()> {
        record_mutation();
        if let Err(e) = write_content(&self.path, &self.content, &self.cfg) {
            warn!(
                "{what}: write of {} failed, memory and disk may disagree: {e}",
                self.path.display()
            );
            return Err(e);
        }
        Ok(())
    }

    /// Entry list for `key`, created empty when absent.
    pub(crate) fn entry_mut(&mut self, key: String) -> &mut Vec<Artifact> {
        self.content.entry(key).or_default()
    }
}
