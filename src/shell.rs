/* src/shell.rs */

// Subprocess helpers shared across the asset pipeline and clean.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result, bail};

use crate::ui::{self, DIM, RESET};

/// Run a user-configured override command through the shell, bail on failure
/// (shows both stdout and stderr on error).
pub(crate) fn run_command(
  base_dir: &Path,
  command: &str,
  label: &str,
  env: &[(&str, &str)],
) -> Result<()> {
  ui::detail(&format!("{DIM}{command}{RESET}"));
  let mut cmd = Command::new("sh");
  cmd.args(["-c", command]);
  cmd.current_dir(base_dir);
  for (k, v) in env {
    cmd.env(k, v);
  }
  let output = cmd.output().with_context(|| format!("failed to run {label}"))?;
  if !output.status.success() {
    let mut msg = format!("{label} exited with status {}", output.status);
    append_streams(&mut msg, &output);
    bail!("{msg}");
  }
  Ok(())
}

/// Spawn a binary directly with a structured argument list and an explicit
/// working directory -- no shell interpretation, no cwd mutation.
/// Callers inspect the returned output for step-specific failure messages.
pub(crate) fn run_tool(
  base_dir: &Path,
  bin: &Path,
  args: &[&str],
  label: &str,
  env: &[(&str, &str)],
) -> Result<Output> {
  let mut cmd = Command::new(bin);
  cmd.args(args);
  cmd.current_dir(base_dir);
  for (k, v) in env {
    cmd.env(k, v);
  }
  cmd.output().with_context(|| format!("failed to run {label} ({})", bin.display()))
}

/// Fold captured stderr and stdout into a failure message, stderr first.
pub(crate) fn append_streams(msg: &mut String, output: &Output) {
  let stderr = String::from_utf8_lossy(&output.stderr);
  let stdout = String::from_utf8_lossy(&output.stdout);
  if !stderr.is_empty() {
    msg.push('\n');
    msg.push_str(&stderr);
  }
  if !stdout.is_empty() {
    msg.push('\n');
    msg.push_str(&stdout);
  }
}

/// Resolve an installed tool under node_modules/.bin by walking up parent
/// directories, mirroring Node.js module resolution.
pub(crate) fn resolve_node_bin(start: &Path, name: &str) -> Option<PathBuf> {
  let mut dir = start.to_path_buf();
  loop {
    let candidate = dir.join("node_modules").join(".bin").join(name);
    if candidate.exists() {
      return Some(candidate);
    }
    if !dir.pop() {
      break;
    }
  }
  None
}

/// Check if a command exists on PATH.
pub(crate) fn which_exists(cmd: &str) -> bool {
  Command::new("which")
    .arg(cmd)
    .stdout(std::process::Stdio::null())
    .stderr(std::process::Stdio::null())
    .status()
    .map(|s| s.success())
    .unwrap_or(false)
}
