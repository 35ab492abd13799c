//! Provenance sidecars: `report.json` gets a `report.provenance.json` next to
//! it recording which build and which call produced it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Callsite {
    pub file: String,
    pub line: u32,
}

/// Contents of a sidecar file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provenance {
    pub code_rev: String,
    pub crate_version: String,
    pub callsite: Callsite,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    /// Record the current build and the location this is called from.
    #[track_caller]
    pub fn capture(params: Value) -> Self {
        let caller = Location::caller();
        Self {
            code_rev: current_git_rev(),
            crate_version: rat_trig::VERSION.to_string(),
            callsite: Callsite {
                file: caller.file().to_string(),
                line: caller.line(),
            },
            params,
            outputs: Vec::new(),
        }
    }

    pub fn with_output(mut self, artifact: &Path) -> Self {
        self.outputs.push(artifact.to_string_lossy().into_owned());
        self
    }

    /// Write the sidecar for `artifact` and return its path. The artifact's
    /// directory must already exist.
    pub fn write_next_to(&self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        let bytes = serde_json::to_vec_pretty(self)?;
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }
}

/// `dir/report.json` -> `dir/report.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Git commit of the build. A non-empty `GIT_COMMIT` wins (compile time
/// first, then run time); otherwise ask git, falling back to `"unknown"`.
pub fn current_git_rev() -> String {
    let overrides = [
        option_env!("GIT_COMMIT").map(str::to_string),
        std::env::var("GIT_COMMIT").ok(),
    ];
    overrides
        .into_iter()
        .flatten()
        .find(|rev| !rev.is_empty())
        .or_else(rev_from_git)
        .unwrap_or_else(|| "unknown".to_string())
}

fn rev_from_git() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}
