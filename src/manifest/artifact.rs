//! manifest/artifact — добавление/удаление артефактов записи.
//!
//! - add_*: отсутствующая запись создаётся пустой, затем append в порядке аргументов
//!   (дубликаты допустимы).
//! - remove_*: удаляется только ПЕРВОЕ вхождение значения; список артефактов
//!   обрабатывается по порядку, как серия одиночных удалений. Запись, ставшая
//!   пустой, остаётся в манифесте как [].
//!   Файл перезаписывается даже если удалять было нечего.

use log::debug;

use crate::error::Result;
use crate::value::{Artifact, EntryId};

use super::core::Manifest;

impl Manifest {
    pub fn add_artifact_to_entry<I, A>(&mut self, id: I, artifact: A) -> Result<()>
    where
        I: Into<EntryId>,
        A: Into<Artifact>,
    {
        let key = id.into().as_key();
        let artifact = artifact.into();
        debug!("add_artifact_to_entry: '{}' += {}", key, artifact);
        self.entry_mut(key).push(artifact);
        self.commit("add_artifact_to_entry")
    }

    pub fn add_artifacts_to_entry<I, A, T>(&mut self, id: I, artifacts: T) -> Result<()>
    where
        I: Into<EntryId>,
        A: Into<Artifact>,
        T: IntoIterator<Item = A>,
    {
        let key = id.into().as_key();
        let list = self.entry_mut(key);
        let before = list.len();
        list.extend(artifacts.into_iter().map(Into::into));
        debug!("add_artifacts_to_entry: +{} artifact(s)", list.len() - before);
        self.commit("add_artifacts_to_entry")
    }

    /// Remove the first occurrence of `artifact`. Returns whether one was found.
    pub fn remove_artifact_from_entry<I, A>(&mut self, id: I, artifact: A) -> Result<bool>
    where
        I: Into<EntryId>,
        A: Into<Artifact>,
    {
        let key = id.into().as_key();
        let removed = self.remove_first(&key, &artifact.into());
        debug!("remove_artifact_from_entry: '{}' removed={}", key, removed);
        self.commit("remove_artifact_from_entry")?;
        Ok(removed)
    }

    /// Remove the first occurrence of each artifact, in order; one write at the end.
    /// Returns how many artifacts were actually removed.
    pub fn remove_artifacts_from_entry<I, A, T>(&mut self, id: I, artifacts: T) -> Result<usize>
    where
        I: Into<EntryId>,
        A: Into<Artifact>,
        T: IntoIterator<Item = A>,
    {
        let key = id.into().as_key();
        let mut removed = 0usize;
        for a in artifacts {
            if self.remove_first(&key, &a.into()) {
                removed += 1;
            }
        }
        debug!("remove_artifacts_from_entry: '{}' removed {}", key, removed);
        self.commit("remove_artifacts_from_entry")?;
        Ok(removed)
    }

    fn remove_first(&mut self, key: &str, artifact: &Artifact) -> bool {
        let Some(list) = self.content.get_mut(key) else {
            return false;
        };
        match list.iter().position(|a| a == artifact) {
            Some(idx) => {
                list.remove(idx);
                true
            }
            None => false,
        }
    }
}
