/* src/main.rs */

mod assets;
mod clean;
mod config;
mod dist;
mod manifest;
mod package;
mod requirements;
mod shell;
mod ui;
mod version;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{PackConfig, find_pack_config, load_pack_config};

#[derive(Parser)]
#[command(name = "atrium-pack", about = "Release packaging for the Atrium web application")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Build frontend assets, then assemble a source distribution archive
  Sdist {
    /// Path to pack.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Build frontend assets, then assemble a deployable bundle archive
  Bdist {
    /// Path to pack.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Resolve the version and write version_info.json, nothing else
  Stamp {
    /// Path to pack.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Remove archives and the version stamp, and run cleanup commands
  Clean {
    /// Path to pack.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, PackConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_pack_config(&cwd)?
    }
  };
  let config = load_pack_config(&path)?;
  Ok((path, config))
}

fn run(command: Command) -> Result<()> {
  match command {
    Command::Sdist { config } => {
      let (config_path, pack_config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
      dist::run_dist(&pack_config, base_dir, dist::DistKind::Sdist)
    }
    Command::Bdist { config } => {
      let (config_path, pack_config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
      dist::run_dist(&pack_config, base_dir, dist::DistKind::Bdist)
    }
    Command::Stamp { config } => {
      let (config_path, pack_config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
      ui::banner("stamp", Some(&pack_config.project.name));
      version::stamp(&pack_config, base_dir)?;
      ui::blank();
      ui::ok("stamp complete");
      Ok(())
    }
    Command::Clean { config } => {
      let (config_path, pack_config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
      clean::run_clean(&pack_config, base_dir)
    }
  }
}

fn main() {
  let cli = Cli::parse();
  if let Err(e) = run(cli.command) {
    ui::fail(&format!("{e:#}"));
    std::process::exit(1);
  }
}
