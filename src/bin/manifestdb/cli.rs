use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI для manifestdb: просмотр и правка JSON-манифеста артефактов
#[derive(Parser, Debug)]
#[command(name = "manifestdb", version, about = "manifestdb CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print the manifest (or one entry)
    Show {
        #[arg(long)]
        path: PathBuf,
        /// Only this entry
        #[arg(long)]
        id: Option<String>,
        /// Print JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Create (or overwrite) an entry with the given artifacts
    Create {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        id: String,
        /// Artifact value; repeat for several. Prefix "num:" stores a number.
        #[arg(long = "artifact")]
        artifacts: Vec<String>,
    },
    /// Remove an entry (no-op if absent)
    Remove {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        id: String,
    },
    /// Append artifacts to an entry (creates it if absent)
    Add {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        id: String,
        #[arg(long = "artifact", required = true)]
        artifacts: Vec<String>,
    },
    /// Remove the first occurrence of each artifact from an entry
    #[command(name = "drop")]
    DropArtifacts {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        id: String,
        #[arg(long = "artifact", required = true)]
        artifacts: Vec<String>,
    },
    /// Apply ops from JSON, in order, one write per op
    ///
    /// JSON формат (массив объектов):
    /// [
    ///   {"op":"create_entry","id":"42","artifacts":["a.out","a.log"]},
    ///   {"op":"add_artifact","id":42,"artifact":"a.map"},
    ///   {"op":"remove_artifacts","id":"42","artifacts":["a.log"]},
    ///   {"op":"remove_entry","id":"build-7"}
    /// ]
    Apply {
        #[arg(long)]
        path: PathBuf,
        /// JSON-файл с операциями
        #[arg(long)]
        ops_file: Option<PathBuf>,
        /// JSON-строка с операциями (если ops_file не задан)
        #[arg(long)]
        ops_json: Option<String>,
    },
}
