/* src/requirements.rs */

use std::path::Path;

use anyhow::{Context, Result};

/// Load requirement specifiers from a newline-delimited manifest.
/// Lines are trimmed; blank lines and `#` comments are dropped; everything
/// else is passed through verbatim, in declaration order. Malformed
/// specifiers are the installer's problem, not ours.
pub fn parse_requirements(path: &Path) -> Result<Vec<String>> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  Ok(
    content
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty() && !line.starts_with('#'))
      .map(str::to_string)
      .collect(),
  )
}
