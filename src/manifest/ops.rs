//! manifest/ops — mutations described as JSON values.
//!
//! Формат одной операции (объект):
//!   {"op":"create_entry",     "id": <id>, "artifacts": [..]}
//!   {"op":"remove_entry",     "id": <id>}
//!   {"op":"add_artifacts",    "id": <id>, "artifacts": [..]}
//!   {"op":"remove_artifacts", "id": <id>, "artifacts": [..]}
//!   {"op":"add_artifact",     "id": <id>, "artifact": <a>}
//!   {"op":"remove_artifact",  "id": <id>, "artifact": <a>}
//! Имена в camelCase (createEntry, addArtifactsToEntry, ...) тоже принимаются.
//!
//! <id> — строка или целое число; <a> — строка или число.
//! Любое несоответствие типов -> InvalidArgument ДО изменения памяти и файла.

use log::debug;
use serde_json::{Map, Value};

use crate::error::{ManifestError, Result};
use crate::value::{artifacts_from_value, kind_of, Artifact, EntryId};

use super::core::Manifest;

const OP_NAMES: &[(&str, &str)] = &[
    ("create_entry", "createEntry"),
    ("remove_entry", "removeEntry"),
    ("add_artifacts", "addArtifactsToEntry"),
    ("remove_artifacts", "removeArtifactsFromEntry"),
    ("add_artifact", "addArtifactToEntry"),
    ("remove_artifact", "removeArtifactFromEntry"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    CreateEntry { id: EntryId, artifacts: Vec<Artifact> },
    RemoveEntry { id: EntryId },
    AddArtifacts { id: EntryId, artifacts: Vec<Artifact> },
    RemoveArtifacts { id: EntryId, artifacts: Vec<Artifact> },
    AddArtifact { id: EntryId, artifact: Artifact },
    RemoveArtifact { id: EntryId, artifact: Artifact },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::CreateEntry { .. } => "create_entry",
            Op::RemoveEntry { .. } => "remove_entry",
            Op::AddArtifacts { .. } => "add_artifacts",
            Op::RemoveArtifacts { .. } => "remove_artifacts",
            Op::AddArtifact { .. } => "add_artifact",
            Op::RemoveArtifact { .. } => "remove_artifact",
        }
    }

    pub fn id(&self) -> &EntryId {
        match self {
            Op::CreateEntry { id, .. }
            | Op::RemoveEntry { id }
            | Op::AddArtifacts { id, .. }
            | Op::RemoveArtifacts { id, .. }
            | Op::AddArtifact { id, .. }
            | Op::RemoveArtifact { id, .. } => id,
        }
    }

    /// Parse and type-check one op object.
    pub fn from_value(v: &Value) -> Result<Self> {
        let obj = v.as_object().ok_or_else(|| {
            ManifestError::invalid(format!("op must be an object, got {}", kind_of(v)))
        })?;
        let name = obj
            .get("op")
            .and_then(Value::as_str)
            .ok_or_else(|| ManifestError::invalid("op: missing string field 'op'"))?;

        if !OP_NAMES.iter().any(|(snake, camel)| name == *snake || name == *camel) {
            return Err(ManifestError::invalid(format!("unknown op '{name}'")));
        }

        let id = EntryId::try_from(field(obj, name, "id")?)?;
        let op = match name {
            "create_entry" | "createEntry" => Op::CreateEntry {
                id,
                artifacts: artifacts_from_value(field(obj, name, "artifacts")?)?,
            },
            "remove_entry" | "removeEntry" => Op::RemoveEntry { id },
            "add_artifacts" | "addArtifactsToEntry" => Op::AddArtifacts {
                id,
                artifacts: artifacts_from_value(field(obj, name, "artifacts")?)?,
            },
            "remove_artifacts" | "removeArtifactsFromEntry" => Op::RemoveArtifacts {
                id,
                artifacts: artifacts_from_value(field(obj, name, "artifacts")?)?,
            },
            "add_artifact" | "addArtifactToEntry" => Op::AddArtifact {
                id,
                artifact: Artifact::try_from(field(obj, name, "artifact")?)?,
            },
            "remove_artifact" | "removeArtifactFromEntry" => Op::RemoveArtifact {
                id,
                artifact: Artifact::try_from(field(obj, name, "artifact")?)?,
            },
            other => return Err(ManifestError::invalid(format!("unknown op '{other}'"))),
        };
        Ok(op)
    }
}

fn field<'a>(obj: &'a Map<String, Value>, op: &str, name: &str) -> Result<&'a Value> {
    obj.get(name)
        .ok_or_else(|| ManifestError::invalid(format!("{op}: missing field '{name}'")))
}

impl Manifest {
    /// Apply one op. Same semantics as calling the matching method.
    pub fn apply(&mut self, op: &Op) -> Result<()> {
        debug!("apply: {} '{}'", op.name(), op.id());
        match op {
            Op::CreateEntry { id, artifacts } => self.create_entry(id, artifacts),
            Op::RemoveEntry { id } => self.remove_entry(id).map(|_| ()),
            Op::AddArtifacts { id, artifacts } => self.add_artifacts_to_entry(id, artifacts),
            Op::RemoveArtifacts { id, artifacts } => {
                self.remove_artifacts_from_entry(id, artifacts).map(|_| ())
            }
            Op::AddArtifact { id, artifact } => self.add_artifact_to_entry(id, artifact),
            Op::RemoveArtifact { id, artifact } => {
                self.remove_artifact_from_entry(id, artifact).map(|_| ())
            }
        }
    }

    /// Parse one op from JSON and apply it. Invalid input leaves the manifest untouched.
    pub fn apply_json(&mut self, v: &Value) -> Result<()> {
        let op = Op::from_value(v)?;
        self.apply(&op)
    }

    /// Apply an array of ops in order, each with its own write.
    /// Stops at the first error; ops before it stay applied. Returns how many were applied.
    pub fn apply_all_json(&mut self, v: &Value) -> Result<usize> {
        let arr = v.as_array().ok_or_else(|| {
            ManifestError::invalid(format!("ops must be an array, got {}", kind_of(v)))
        })?;
        let mut applied = 0usize;
        for item in arr {
            self.apply_json(item)?;
            applied += 1;
        }
        Ok(applied)
    }
}
