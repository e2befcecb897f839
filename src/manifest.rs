/* src/manifest.rs */

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Frontend package descriptor (the asset tree's `package.json`).
/// Supplies the canonical version string for the whole application.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetManifest {
  pub version: String,
  #[serde(default)]
  pub name: Option<String>,
}

pub fn read_asset_manifest(path: &Path) -> Result<AssetManifest> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let manifest: AssetManifest =
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  Ok(manifest)
}
