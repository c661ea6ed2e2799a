//! manifest — persistent map entry id -> ordered list of artifacts.
//!
//! Разделение по подмодулям:
//! - core.rs     — структура Manifest, open/open_with_config, path, content(), persist/reload
//! - entry.rs    — create_entry / remove_entry
//! - artifact.rs — add/remove одного артефакта и списка артефактов
//! - ops.rs      — динамический слой: операции из JSON (проверка типов -> InvalidArgument)
//!
//! Каждая мутация сначала меняет память, затем синхронно перезаписывает файл целиком.
//! Исключение: remove_entry для отсутствующего id файл не трогает.

use std::collections::BTreeMap;

use crate::value::Artifact;

pub mod artifact;
pub mod core;
pub mod entry;
pub mod ops;

pub use self::core::Manifest;
pub use ops::Op;

/// In-memory and on-disk shape: canonical id key -> artifacts in insertion order.
pub type Content = BTreeMap<String, Vec<Artifact>>;
