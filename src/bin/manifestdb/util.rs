use anyhow::{anyhow, Context, Result};
use std::path::Path;

use manifestdb::{Artifact, Manifest};

/// "num:<n>" -> number artifact, anything else -> text artifact as is.
pub fn decode_artifact_arg(arg: &str) -> Result<Artifact> {
    if let Some(n) = arg.strip_prefix("num:") {
        let n = n.trim();
        if let Ok(i) = n.parse::<i64>() {
            return Ok(Artifact::from(i));
        }
        let x: f64 = n
            .parse()
            .map_err(|_| anyhow!("invalid number artifact '{}'", arg))?;
        return Ok(Artifact::try_from(x)?);
    }
    Ok(Artifact::from(arg))
}

pub fn decode_artifact_args(args: &[String]) -> Result<Vec<Artifact>> {
    args.iter().map(|a| decode_artifact_arg(a)).collect()
}

pub fn open(path: &Path) -> Result<Manifest> {
    // CLI honours MF_* env overrides via the builder.
    Manifest::builder().open(path).with_context(|| format!("open manifest {}", path.display()))
}

pub fn render_list(list: &[Artifact]) -> String {
    let parts: Vec<String> = list
        .iter()
        .map(|a| match a {
            Artifact::Text(s) => format!("{:?}", s),
            Artifact::Number(n) => n.to_string(),
        })
        .collect();
    format!("[{}]", parts.join(", "))
}
