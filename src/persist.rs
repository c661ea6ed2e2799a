//! persist — read/write of the whole manifest file.
//!
//! Формат: UTF-8 JSON-объект { "<id>": [artifact, ...], ... }, pretty с отступом
//! `indent` пробелов (0 — компактно).
//!
//! Запись:
//! - atomic_write=true: пишем <path>.tmp и переименовываем поверх <path>;
//! - atomic_write=false: перезаписываем <path> на месте (truncate).
//!   Родительские каталоги не создаются: запись в несуществующий каталог — ошибка Io.
//!
//! Чтение: отсутствующий файл -> Ok(None); всё, что не парсится как объект
//! массивов строк/чисел -> MalformedPersistedState.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::config::ManifestConfig;
use crate::error::{ManifestError, Result};
use crate::manifest::Content;
use crate::metrics::{record_load, record_load_missing, record_write, record_write_failed};

/// Read and parse the manifest at `path`. Ok(None) when the file does not exist.
pub fn read_content(path: &Path) -> Result<Option<Content>> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("read_content: {} not found", path.display());
            record_load_missing();
            return Ok(None);
        }
        Err(e) => return Err(ManifestError::io("read manifest", path, e)),
    };

    let content: Content =
        serde_json::from_slice(&bytes).map_err(|e| ManifestError::MalformedPersistedState {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    debug!(
        "read_content: {} ({} B, {} entries)",
        path.display(),
        bytes.len(),
        content.len()
    );
    record_load();
    Ok(Some(content))
}

/// Serialize `content` and overwrite the file at `path`. Returns bytes written.
pub fn write_content(path: &Path, content: &Content, cfg: &ManifestConfig) -> Result<u64> {
    let res = write_inner(path, content, cfg);
    match &res {
        Ok(n) => record_write(*n),
        Err(_) => record_write_failed(),
    }
    res
}

fn write_inner(path: &Path, content: &Content, cfg: &ManifestConfig) -> Result<u64> {
    let bytes = encode(content, cfg.indent).map_err(|e| {
        ManifestError::io(
            "serialize manifest",
            path,
            io::Error::new(io::ErrorKind::InvalidData, e),
        )
    })?;

    if cfg.atomic_write {
        let tmp = tmp_path(path);
        if let Err(e) = write_file(&tmp, &bytes, cfg.fsync) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(ManifestError::io("rename tmp manifest", path, e));
        }
    } else {
        write_file(path, &bytes, cfg.fsync)?;
    }

    debug!(
        "write_content: {} ({} B, {} entries, atomic={})",
        path.display(),
        bytes.len(),
        content.len(),
        cfg.atomic_write
    );
    Ok(bytes.len() as u64)
}

fn encode(content: &Content, indent: usize) -> serde_json::Result<Vec<u8>> {
    if indent == 0 {
        return serde_json::to_vec(content);
    }
    let pad = vec![b' '; indent];
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(&pad);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    content.serialize(&mut ser)?;
    Ok(buf)
}

fn write_file(path: &Path, bytes: &[u8], fsync: bool) -> Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| ManifestError::io("open manifest for write", path, e))?;
    f.write_all(bytes)
        .and_then(|_| f.flush())
        .map_err(|e| ManifestError::io("write manifest", path, e))?;
    if fsync {
        f.sync_all()
            .map_err(|e| ManifestError::io("fsync manifest", path, e))?;
    }
    Ok(())
}

/// Sibling temp file: "<file name>.tmp" (m.json -> m.json.tmp).
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(".tmp");
    PathBuf::from(s)
}
