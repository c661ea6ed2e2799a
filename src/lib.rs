//! manifestdb — small persistent manifest: entry id -> ordered list of artifacts,
//! stored as one JSON object in one file.

// Базовые модули
pub mod config;
pub mod error;
pub mod metrics;
pub mod value;

// Чтение/запись файла целиком
pub mod persist;

// Сам манифест (src/manifest/{mod,core,entry,artifact,ops}.rs)
pub mod manifest;

// Удобные реэкспорты
pub use config::{ManifestBuilder, ManifestConfig};
pub use error::{ManifestError, Result};
pub use manifest::{Content, Manifest, Op};
pub use value::{artifacts_from_value, Artifact, EntryId};
