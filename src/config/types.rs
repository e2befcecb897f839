/* src/config/types.rs */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PackConfig {
  pub project: ProjectSection,
  #[serde(default)]
  pub assets: AssetsSection,
  #[serde(default)]
  pub version: VersionSection,
  #[serde(default)]
  pub package: PackageSection,
  #[serde(default)]
  pub clean: CleanSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsSection {
  #[serde(default = "default_asset_dir")]
  pub dir: String,
  /// Package descriptor filename, relative to `dir`.
  #[serde(default = "default_asset_manifest")]
  pub manifest: String,
  /// Override for the dependency sync step (run through the shell).
  pub install_command: Option<String>,
  /// Bundler binary name, resolved under node_modules/.bin.
  #[serde(default = "default_bundler")]
  pub bundler: String,
  /// Override for the bundling step (run through the shell).
  pub bundler_command: Option<String>,
}

impl Default for AssetsSection {
  fn default() -> Self {
    Self {
      dir: default_asset_dir(),
      manifest: default_asset_manifest(),
      install_command: None,
      bundler: default_bundler(),
      bundler_command: None,
    }
  }
}

fn default_asset_dir() -> String {
  "static/assets".to_string()
}

fn default_asset_manifest() -> String {
  "package.json".to_string()
}

fn default_bundler() -> String {
  "webpack".to_string()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionSource {
  /// Read the `version` field of the asset manifest.
  #[default]
  Manifest,
  /// Fixed string from `version.literal`.
  Literal,
  /// Read from the environment variable named by `version.env_var`.
  Env,
}

impl VersionSource {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Manifest => "manifest",
      Self::Literal => "literal",
      Self::Env => "env",
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionSection {
  #[serde(default)]
  pub source: VersionSource,
  pub literal: Option<String>,
  #[serde(default = "default_env_var")]
  pub env_var: String,
  /// Stamp file written on every run, relative to the asset dir.
  #[serde(default = "default_info_file")]
  pub info_file: String,
}

impl Default for VersionSection {
  fn default() -> Self {
    Self {
      source: VersionSource::default(),
      literal: None,
      env_var: default_env_var(),
      info_file: default_info_file(),
    }
  }
}

impl VersionSection {
  pub fn validate(&self) -> Result<()> {
    if self.source == VersionSource::Literal
      && self.literal.as_deref().is_none_or(|l| l.trim().is_empty())
    {
      bail!("version.literal is required when version.source = \"literal\"");
    }
    Ok(())
  }
}

fn default_env_var() -> String {
  "PACK_VERSION".to_string()
}

fn default_info_file() -> String {
  "version_info.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageSection {
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
  #[serde(default = "default_requirements")]
  pub requirements: String,
  /// Paths packed into every archive, relative to the project root.
  #[serde(default = "default_include")]
  pub include: Vec<String>,
  /// Named optional dependency groups, carried into artifact metadata.
  #[serde(default)]
  pub extras: BTreeMap<String, Vec<String>>,
}

impl Default for PackageSection {
  fn default() -> Self {
    Self {
      out_dir: default_out_dir(),
      requirements: default_requirements(),
      include: default_include(),
      extras: BTreeMap::new(),
    }
  }
}

fn default_out_dir() -> String {
  "dist".to_string()
}

fn default_requirements() -> String {
  "requirements.txt".to_string()
}

fn default_include() -> Vec<String> {
  vec!["src".to_string()]
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CleanSection {
  #[serde(default)]
  pub commands: Vec<String>,
}

impl PackConfig {
  pub fn asset_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.assets.dir)
  }

  pub fn asset_manifest_path(&self, base_dir: &Path) -> PathBuf {
    self.asset_dir(base_dir).join(&self.assets.manifest)
  }

  pub fn version_info_path(&self, base_dir: &Path) -> PathBuf {
    self.asset_dir(base_dir).join(&self.version.info_file)
  }

  pub fn out_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.package.out_dir)
  }

  pub fn requirements_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.package.requirements)
  }
}
