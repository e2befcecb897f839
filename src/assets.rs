/* src/assets.rs */

// Frontend asset pipeline: dependency sync, then bundling, then the
// packaging delegate. Any step failing aborts before the delegate runs, so
// no artifact is ever assembled against stale or missing bundles.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::PackConfig;
use crate::shell::{append_streams, resolve_node_bin, run_command, run_tool, which_exists};
use crate::ui::{self, DIM, RESET};

/// Run the asset pipeline, then the delegate exactly once. The working
/// directory is never mutated, so the delegate observes the same cwd the
/// hook was entered with.
pub fn run_hooked<T>(
  config: &PackConfig,
  base_dir: &Path,
  delegate: impl FnOnce() -> Result<T>,
) -> Result<T> {
  build_assets(config, base_dir)?;
  delegate()
}

pub fn build_assets(config: &PackConfig, base_dir: &Path) -> Result<()> {
  let asset_dir = config.asset_dir(base_dir);
  if !asset_dir.is_dir() {
    bail!("asset directory not found: {}", asset_dir.display());
  }
  sync_dependencies(config, &asset_dir)?;
  run_bundler(config, &asset_dir)?;
  Ok(())
}

/// Ensure the frontend's declared dependencies are installed. Yarn when
/// available, npm otherwise; a configured install_command takes priority.
/// Failure propagates unchanged -- no retry, no partial continuation.
fn sync_dependencies(config: &PackConfig, asset_dir: &Path) -> Result<()> {
  if let Some(command) = &config.assets.install_command {
    return run_command(asset_dir, command, "dependency sync", &[]);
  }

  let (bin, args): (&str, &[&str]) =
    if which_exists("yarn") { ("yarn", &["install"]) } else { ("npm", &["install"]) };
  ui::detail(&format!("{DIM}{bin} install{RESET}"));

  let spinner = ui::spinner("syncing frontend dependencies");
  let output = run_tool(asset_dir, Path::new(bin), args, "dependency sync", &[])?;
  spinner.finish_and_clear();

  if !output.status.success() {
    let mut msg = format!("dependency sync exited with status {}", output.status);
    append_streams(&mut msg, &output);
    bail!("{msg}");
  }
  Ok(())
}

/// Regenerate the compiled bundles. The bundler binary is resolved from the
/// installed frontend dependencies and spawned with a structured argument
/// list from the asset directory; a non-zero exit names the directory and
/// the exit code.
fn run_bundler(config: &PackConfig, asset_dir: &Path) -> Result<()> {
  if let Some(command) = &config.assets.bundler_command {
    return run_command(asset_dir, command, "bundler", &[("NODE_ENV", "production")])
      .with_context(|| format!("bundling failed in {}", asset_dir.display()));
  }

  let bundler = &config.assets.bundler;
  let bin = resolve_node_bin(asset_dir, bundler).ok_or_else(|| {
    anyhow::anyhow!(
      "{bundler} not found under node_modules/.bin in {} -- did the dependency sync install it?",
      asset_dir.display()
    )
  })?;
  ui::detail(&format!("{DIM}{}{RESET}", bin.display()));

  let spinner = ui::spinner("bundling frontend assets");
  let output = run_tool(asset_dir, &bin, &[], "bundler", &[("NODE_ENV", "production")])?;
  spinner.finish_and_clear();

  if !output.status.success() {
    let code =
      output.status.code().map_or_else(|| "terminated by signal".to_string(), |c| c.to_string());
    let mut msg = format!("bundler exited with code {code} in {}", asset_dir.display());
    append_streams(&mut msg, &output);
    bail!("{msg}");
  }
  Ok(())
}
