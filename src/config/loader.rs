/* src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::PackConfig;

/// Walk upward from `start` to find `pack.toml`, like Cargo.toml discovery
pub fn find_pack_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("pack.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("pack.toml not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_pack_config(path: &Path) -> Result<PackConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: PackConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  if config.project.name.trim().is_empty() {
    bail!("project.name must not be empty in {}", path.display());
  }
  config.version.validate()?;
  Ok(config)
}
