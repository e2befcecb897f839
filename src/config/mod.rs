/* src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_pack_config, load_pack_config};
pub use types::{
  AssetsSection, CleanSection, PackConfig, PackageSection, ProjectSection, VersionSection,
  VersionSource,
};
