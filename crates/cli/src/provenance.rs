//! Provenance sidecars: every artifact `out/<stem>.<ext>` gets an
//! `out/<stem>.provenance.json` naming the command, its parameters, the engine
//! build and the source revision that produced it.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Provenance document for `outputs` (no file written).
#[track_caller]
pub fn document(payload: &Payload, outputs: &[String]) -> Value {
    let callsite = Location::caller();
    json!({
        "code_rev": code_rev(),
        "engine": {
            "crate": "hullscan",
            "version": hullscan::VERSION,
            "comparator": "sign-pair regions + cross product",
            "collinear": "pruned",
        },
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "command": payload.command,
        "params": payload.params,
        "outputs": outputs,
    })
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let doc = document(&payload, &[artifact.display().to_string()]);
    let path = sidecar_path(artifact);
    let bytes = serde_json::to_vec_pretty(&doc)?;
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(sidecar = %path.display(), command = payload.command, "provenance");
    Ok(path)
}

/// `dir/hull.json` -> `dir/hull.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Source revision: `GIT_COMMIT` (build time, then run time), else
/// `git rev-parse HEAD`, else `null`.
fn code_rev() -> Option<String> {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    from_env.or_else(|| {
        let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
        if !output.status.success() {
            return None;
        }
        let rev = String::from_utf8(output.stdout).ok()?;
        Some(rev.trim().to_string()).filter(|rev| !rev.is_empty())
    })
}
