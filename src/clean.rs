/* src/clean.rs */

// `atrium-pack clean`: removes archives and the version stamp,
// and runs user-defined cleanup commands.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::PackConfig;
use crate::shell::run_command;
use crate::ui;

pub fn run_clean(config: &PackConfig, base_dir: &Path) -> Result<()> {
  ui::arrow("cleaning project");

  delete_dir_if_exists(&config.out_dir(base_dir))?;
  delete_file_if_exists(&config.version_info_path(base_dir))?;
  run_clean_commands(&config.clean.commands, base_dir)?;

  ui::ok("clean complete");
  Ok(())
}

fn delete_dir_if_exists(path: &Path) -> Result<()> {
  if path.exists() {
    std::fs::remove_dir_all(path)
      .with_context(|| format!("failed to remove {}", path.display()))?;
    ui::detail(&format!("deleted {}", path.display()));
  }
  Ok(())
}

fn delete_file_if_exists(path: &Path) -> Result<()> {
  if path.is_file() {
    std::fs::remove_file(path).with_context(|| format!("failed to remove {}", path.display()))?;
    ui::detail(&format!("deleted {}", path.display()));
  }
  Ok(())
}

fn run_clean_commands(commands: &[String], cwd: &Path) -> Result<()> {
  for cmd in commands {
    run_command(cwd, cmd, "clean", &[])?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn delete_dir_if_exists_noop_on_missing() {
    let path = std::env::temp_dir().join("pack-test-clean-nonexistent");
    let _ = std::fs::remove_dir_all(&path);
    assert!(delete_dir_if_exists(&path).is_ok());
  }

  #[test]
  fn clean_removes_out_dir_and_stamp() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path();
    let out = base.join("dist");
    let assets = base.join("static/assets");
    std::fs::create_dir_all(&out).unwrap();
    std::fs::create_dir_all(&assets).unwrap();
    std::fs::write(out.join("atrium-0.26.3.zip"), "zip").unwrap();
    std::fs::write(assets.join("version_info.json"), "{}").unwrap();
    std::fs::write(assets.join("package.json"), r#"{"version": "0.26.3"}"#).unwrap();

    let config: PackConfig = toml::from_str("[project]\nname = \"atrium\"\n").unwrap();
    run_clean(&config, base).unwrap();

    assert!(!out.exists());
    assert!(!assets.join("version_info.json").exists());
    // The manifest itself is untouched.
    assert!(assets.join("package.json").exists());
  }

  #[test]
  fn clean_runs_user_commands() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("stale.txt"), "stale").unwrap();

    let config: PackConfig = toml::from_str(
      r#"
[project]
name = "atrium"

[clean]
commands = ["rm stale.txt"]
"#,
    )
    .unwrap();
    run_clean(&config, tmp.path()).unwrap();
    assert!(!tmp.path().join("stale.txt").exists());
  }
}
