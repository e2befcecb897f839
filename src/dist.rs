/* src/dist.rs */

// Distribution orchestrator: stamp, asset hook, then the archive delegate.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::config::PackConfig;
use crate::{assets, package, ui, version};

#[derive(Debug, Clone, Copy)]
pub enum DistKind {
  /// Source distribution archive.
  Sdist,
  /// Deployable bundle archive.
  Bdist,
}

impl DistKind {
  fn label(self) -> &'static str {
    match self {
      Self::Sdist => "sdist",
      Self::Bdist => "bdist",
    }
  }
}

pub fn run_dist(config: &PackConfig, base_dir: &Path, kind: DistKind) -> Result<()> {
  let started = Instant::now();
  ui::banner(kind.label(), Some(&config.project.name));

  // [1/3] Stamp version
  ui::step(1, 3, "Stamping version");
  let info = version::stamp(config, base_dir)?;
  ui::blank();

  // [2/3] Asset pipeline, [3/3] archive -- the delegate only runs once the
  // pipeline has succeeded, so a bundler failure can never ship stale assets.
  ui::step(2, 3, "Building frontend assets");
  let path = assets::run_hooked(config, base_dir, || {
    ui::blank();
    ui::step(3, 3, "Assembling archive");
    match kind {
      DistKind::Sdist => package::assemble_sdist(config, base_dir, &info),
      DistKind::Bdist => package::assemble_bdist(config, base_dir, &info),
    }
  })?;
  ui::blank();

  let elapsed = started.elapsed().as_secs_f64();
  ui::ok(&format!("{} complete in {elapsed:.1}s", kind.label()));
  ui::detail(&path.display().to_string());
  Ok(())
}
