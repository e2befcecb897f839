/* src/ui.rs */

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn ok(msg: &str) {
  println!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn fail(msg: &str) {
  eprintln!("  {RED}\u{2717}{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  println!("  {GREEN}\u{2192}{RESET} {msg}");
}

pub fn warn(msg: &str) {
  println!("  {YELLOW}!{RESET} {msg}");
}

pub fn step(n: u32, total: u32, msg: &str) {
  println!("  {BOLD}[{n}/{total}]{RESET} {msg}...");
}

pub fn detail(msg: &str) {
  println!("        {msg}");
}

pub fn detail_ok(msg: &str) {
  println!("        {GREEN}\u{2713}{RESET} {msg}");
}

pub fn banner(cmd: &str, subtitle: Option<&str>) {
  println!();
  match subtitle {
    Some(s) => println!("  {BOLD}Atrium{RESET} {cmd} {DIM}v{VERSION} \u{00b7} {s}{RESET}"),
    None => println!("  {BOLD}Atrium{RESET} {cmd} {DIM}v{VERSION}{RESET}"),
  }
  println!();
}

pub fn blank() {
  println!();
}

/// Spinner for long-running subprocess steps (dependency sync, bundling).
pub fn spinner(msg: &str) -> ProgressBar {
  let pb = ProgressBar::new_spinner();
  let style = ProgressStyle::with_template("  {spinner:.green} {msg}")
    .unwrap_or_else(|_| ProgressStyle::default_spinner());
  pb.set_style(style);
  pb.set_message(msg.to_string());
  pb.enable_steady_tick(Duration::from_millis(80));
  pb
}

pub fn format_size(bytes: u64) -> String {
  if bytes >= 1_000_000 {
    format!("{:.1} MB", bytes as f64 / 1_000_000.0)
  } else if bytes >= 1_000 {
    format!("{:.1} kB", bytes as f64 / 1_000.0)
  } else {
    format!("{bytes} B")
  }
}
