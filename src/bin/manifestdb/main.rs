use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use log::debug;

use manifestdb::metrics;

mod cli;
mod util;
mod cmd_show;
mod cmd_create;
mod cmd_remove;
mod cmd_add;
mod cmd_drop;
mod cmd_apply;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug manifestdb show --path m.json
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    let res = match cli.cmd {
        cli::Cmd::Show { path, id, json } =>
            cmd_show::exec(path, id, json),

        cli::Cmd::Create { path, id, artifacts } =>
            cmd_create::exec(path, id, artifacts),

        cli::Cmd::Remove { path, id } =>
            cmd_remove::exec(path, id),

        cli::Cmd::Add { path, id, artifacts } =>
            cmd_add::exec(path, id, artifacts),

        cli::Cmd::DropArtifacts { path, id, artifacts } =>
            cmd_drop::exec(path, id, artifacts),

        cli::Cmd::Apply { path, ops_file, ops_json } =>
            cmd_apply::exec(path, ops_file, ops_json),
    };
    debug!("metrics: {:?}", metrics::snapshot());
    res
}
