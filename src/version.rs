/* src/version.rs */

// Version descriptor: resolved once per invocation, stamped into the asset
// tree so the running application can self-report its build.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::{PackConfig, VersionSource};
use crate::manifest::read_asset_manifest;
use crate::ui;

/// Written as a JSON object with exactly these two keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
  #[serde(rename = "GIT_SHA")]
  pub git_sha: String,
  pub version: String,
}

/// Resolve the version string via the configured strategy.
pub fn resolve_version(config: &PackConfig, base_dir: &Path) -> Result<String> {
  match config.version.source {
    VersionSource::Manifest => {
      let path = config.asset_manifest_path(base_dir);
      Ok(read_asset_manifest(&path)?.version)
    }
    VersionSource::Literal => match &config.version.literal {
      Some(literal) => Ok(literal.clone()),
      None => bail!("version.literal is required when version.source = \"literal\""),
    },
    VersionSource::Env => std::env::var(&config.version.env_var).with_context(|| {
      format!("environment variable {} is not set (version.source = \"env\")", config.version.env_var)
    }),
  }
}

/// Current commit hash, or the empty string when the lookup fails for any
/// reason (git missing, not a repository). Must never error: the revision is
/// a diagnostic field, not a packaging input.
pub fn git_sha(repo_dir: &Path) -> String {
  let sha = Command::new("git")
    .args(["rev-parse", "HEAD"])
    .current_dir(repo_dir)
    .output()
    .ok()
    .filter(|o| o.status.success())
    .and_then(|o| String::from_utf8(o.stdout).ok())
    .map(|s| s.trim().to_string());
  sha.unwrap_or_else(|| {
    ui::warn("revision lookup failed -- recording empty GIT_SHA");
    String::new()
  })
}

/// Overwrites any previous stamp.
pub fn write_version_info(path: &Path, info: &VersionInfo) -> Result<()> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  let json = serde_json::to_string(info)?;
  std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
  Ok(())
}

/// Resolve version + revision and write the stamp file.
pub fn stamp(config: &PackConfig, base_dir: &Path) -> Result<VersionInfo> {
  let version = resolve_version(config, base_dir)?;
  let info = VersionInfo { git_sha: git_sha(base_dir), version };

  let path = config.version_info_path(base_dir);
  write_version_info(&path, &info)?;

  ui::detail(&format!("version {} ({})", info.version, config.version.source.as_str()));
  if !info.git_sha.is_empty() {
    ui::detail(&format!("revision {}", info.git_sha));
  }
  ui::detail_ok(&config.version.info_file);
  Ok(info)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::PackConfig;

  fn parse_config(toml_str: &str) -> PackConfig {
    toml::from_str(toml_str).unwrap()
  }

  #[test]
  fn manifest_strategy_reads_version_field() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = tmp.path().join("static/assets");
    std::fs::create_dir_all(&assets).unwrap();
    std::fs::write(assets.join("package.json"), r#"{"version": "0.26.3"}"#).unwrap();

    let config = parse_config("[project]\nname = \"atrium\"\n");
    assert_eq!(resolve_version(&config, tmp.path()).unwrap(), "0.26.3");
  }

  #[test]
  fn literal_strategy_ignores_manifest() {
    let tmp = tempfile::tempdir().unwrap();
    let config = parse_config(
      r#"
[project]
name = "atrium"

[version]
source = "literal"
literal = "0.26.3"
"#,
    );
    // No manifest on disk at all -- the literal wins without touching it.
    assert_eq!(resolve_version(&config, tmp.path()).unwrap(), "0.26.3");
  }

  #[test]
  fn env_strategy_reads_variable() {
    let tmp = tempfile::tempdir().unwrap();
    let config = parse_config(
      r#"
[project]
name = "atrium"

[version]
source = "env"
env_var = "PACK_TEST_RELEASE"
"#,
    );

    let err = resolve_version(&config, tmp.path()).unwrap_err().to_string();
    assert!(err.contains("PACK_TEST_RELEASE"));

    unsafe { std::env::set_var("PACK_TEST_RELEASE", "1.2.3") };
    assert_eq!(resolve_version(&config, tmp.path()).unwrap(), "1.2.3");
    unsafe { std::env::remove_var("PACK_TEST_RELEASE") };
  }

  #[test]
  fn git_sha_outside_repo_is_empty() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(git_sha(tmp.path()), "");
  }

  #[test]
  fn stamp_writes_exactly_two_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let assets = tmp.path().join("static/assets");
    std::fs::create_dir_all(&assets).unwrap();
    std::fs::write(assets.join("package.json"), r#"{"version": "0.26.3"}"#).unwrap();
    // Pre-existing stamp content must be overwritten wholesale.
    std::fs::write(assets.join("version_info.json"), r#"{"stale": true, "other": 1}"#).unwrap();

    let config = parse_config("[project]\nname = \"atrium\"\n");
    let info = stamp(&config, tmp.path()).unwrap();
    assert_eq!(info.version, "0.26.3");

    let content = std::fs::read_to_string(assets.join("version_info.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["version"], "0.26.3");
    assert!(object["GIT_SHA"].is_string());
  }
}
