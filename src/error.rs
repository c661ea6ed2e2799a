//! error — typed errors of the manifest store.
//!
//! Три класса ошибок:
//! - InvalidArgument — не прошла проверка типа/формы аргумента; состояние и файл не тронуты.
//! - MalformedPersistedState — файл существует, но это не JSON-объект вида id -> [artifact].
//! - Io / NotFound — ошибки файловой системы (чтение при open, запись при мутации).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// Argument failed its type/shape check. Raised before any mutation or I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Backing file exists but does not hold an object of arrays.
    #[error("malformed manifest {}: {reason}", .path.display())]
    MalformedPersistedState { path: PathBuf, reason: String },

    /// Backing file is missing and the config requires it to exist.
    #[error("manifest file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        ManifestError::InvalidArgument(msg.into())
    }

    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ManifestError::InvalidArgument(_))
    }

    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, ManifestError::MalformedPersistedState { .. })
    }

    #[inline]
    pub fn is_io(&self) -> bool {
        matches!(self, ManifestError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;
