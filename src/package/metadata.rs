/* src/package/metadata.rs */

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::PackConfig;
use crate::requirements::parse_requirements;
use crate::version::VersionInfo;

/// Artifact metadata written as `metadata.json` into every archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
  pub name: String,
  pub version: String,
  pub git_sha: String,
  pub install_requires: Vec<String>,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub extras: BTreeMap<String, Vec<String>>,
}

impl PackageMetadata {
  pub fn collect(config: &PackConfig, base_dir: &Path, info: &VersionInfo) -> Result<Self> {
    let install_requires = parse_requirements(&config.requirements_path(base_dir))?;
    Ok(Self {
      name: config.project.name.clone(),
      version: info.version.clone(),
      git_sha: info.git_sha.clone(),
      install_requires,
      extras: config.package.extras.clone(),
    })
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn collect_pulls_requirements_and_extras() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("requirements.txt"), "# core\nflask==1.0.2\nsqlalchemy\n")
      .unwrap();

    let config: PackConfig = toml::from_str(
      r#"
[project]
name = "atrium"

[package.extras]
cors = ["flask-cors>=2.0.0"]
"#,
    )
    .unwrap();
    let info = VersionInfo { git_sha: "abc123".to_string(), version: "0.26.3".to_string() };

    let metadata = PackageMetadata::collect(&config, tmp.path(), &info).unwrap();
    assert_eq!(metadata.name, "atrium");
    assert_eq!(metadata.version, "0.26.3");
    assert_eq!(metadata.install_requires, vec!["flask==1.0.2", "sqlalchemy"]);
    assert_eq!(metadata.extras["cors"], vec!["flask-cors>=2.0.0"]);
  }

  #[test]
  fn missing_requirements_manifest_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let config: PackConfig = toml::from_str("[project]\nname = \"atrium\"\n").unwrap();
    let info = VersionInfo { git_sha: String::new(), version: "0.1.0".to_string() };
    assert!(PackageMetadata::collect(&config, tmp.path(), &info).is_err());
  }
}
