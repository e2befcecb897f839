/* src/package/mod.rs */

// Default packaging delegates: assemble distribution archives once the
// asset pipeline has succeeded.

mod metadata;

pub use metadata::PackageMetadata;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use zip::write::{FileOptions, ZipWriter};

use crate::config::PackConfig;
use crate::ui;
use crate::version::VersionInfo;

/// Source distribution: includes, requirements manifest, README, and the
/// asset tree with freshly built bundles.
pub fn assemble_sdist(config: &PackConfig, base_dir: &Path, info: &VersionInfo) -> Result<PathBuf> {
  let path = archive_path(config, base_dir, info, "");
  let root = archive_root(config, info);
  let mut archive = Archive::create(&path)?;

  write_metadata(&mut archive, config, base_dir, info, &root)?;

  let requirements = config.requirements_path(base_dir);
  archive.add_file(&requirements, &format!("{root}/{}", config.package.requirements))?;

  let readme = base_dir.join("README.md");
  if readme.is_file() {
    archive.add_file(&readme, &format!("{root}/README.md"))?;
  }

  add_includes(&mut archive, config, base_dir, &root)?;
  archive.add_tree(&config.asset_dir(base_dir), &format!("{root}/{}", config.assets.dir))?;

  finish(archive, &path)
}

/// Build artifact: the runnable payload only -- includes plus the asset tree.
pub fn assemble_bdist(config: &PackConfig, base_dir: &Path, info: &VersionInfo) -> Result<PathBuf> {
  let path = archive_path(config, base_dir, info, "-bundle");
  let root = archive_root(config, info);
  let mut archive = Archive::create(&path)?;

  write_metadata(&mut archive, config, base_dir, info, &root)?;
  add_includes(&mut archive, config, base_dir, &root)?;
  archive.add_tree(&config.asset_dir(base_dir), &format!("{root}/{}", config.assets.dir))?;

  finish(archive, &path)
}

fn archive_root(config: &PackConfig, info: &VersionInfo) -> String {
  format!("{}-{}", config.project.name, info.version)
}

fn archive_path(config: &PackConfig, base_dir: &Path, info: &VersionInfo, suffix: &str) -> PathBuf {
  config.out_dir(base_dir).join(format!("{}{suffix}.zip", archive_root(config, info)))
}

fn write_metadata(
  archive: &mut Archive,
  config: &PackConfig,
  base_dir: &Path,
  info: &VersionInfo,
  root: &str,
) -> Result<()> {
  let metadata = PackageMetadata::collect(config, base_dir, info)?;
  archive.add_bytes(&format!("{root}/metadata.json"), metadata.to_json()?.as_bytes())
}

fn add_includes(
  archive: &mut Archive,
  config: &PackConfig,
  base_dir: &Path,
  root: &str,
) -> Result<()> {
  for include in &config.package.include {
    if include == &config.package.out_dir {
      continue;
    }
    let path = base_dir.join(include);
    let rel = format!("{root}/{include}");
    if path.is_dir() {
      archive.add_tree(&path, &rel)?;
    } else if path.is_file() {
      archive.add_file(&path, &rel)?;
    } else {
      bail!("include path not found: {}", path.display());
    }
  }
  Ok(())
}

fn finish(archive: Archive, path: &Path) -> Result<PathBuf> {
  archive.finish()?;
  let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
  let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("archive");
  ui::detail_ok(&format!("{name}  {}", ui::format_size(size)));
  Ok(path.to_path_buf())
}

struct Archive {
  zip: ZipWriter<std::fs::File>,
}

impl Archive {
  fn create(path: &Path) -> Result<Self> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
      .with_context(|| format!("failed to create {}", path.display()))?;
    Ok(Self { zip: ZipWriter::new(file) })
  }

  fn add_bytes(&mut self, rel: &str, bytes: &[u8]) -> Result<()> {
    self.zip.start_file::<_, ()>(rel, FileOptions::default())?;
    self.zip.write_all(bytes)?;
    Ok(())
  }

  fn add_file(&mut self, src: &Path, rel: &str) -> Result<()> {
    let bytes =
      std::fs::read(src).with_context(|| format!("failed to read {}", src.display()))?;
    self.add_bytes(rel, &bytes)
  }

  /// Recursively add a directory, sorted for deterministic archives.
  /// node_modules trees are never shipped.
  fn add_tree(&mut self, dir: &Path, prefix: &str) -> Result<()> {
    let mut entries = std::fs::read_dir(dir)
      .with_context(|| format!("failed to read {}", dir.display()))?
      .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
      let name = entry.file_name().to_string_lossy().to_string();
      if name == "node_modules" {
        continue;
      }
      let path = entry.path();
      let rel = format!("{prefix}/{name}");
      if path.is_dir() {
        self.add_tree(&path, &rel)?;
      } else {
        self.add_file(&path, &rel)?;
      }
    }
    Ok(())
  }

  fn finish(mut self) -> Result<()> {
    self.zip.finish()?;
    Ok(())
  }
}
