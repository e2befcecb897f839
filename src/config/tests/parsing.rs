/* src/config/tests/parsing.rs */

use super::*;

#[test]
fn minimal_config_gets_defaults() {
  let config: PackConfig = toml::from_str(
    r#"
[project]
name = "atrium"
"#,
  )
  .unwrap();

  assert_eq!(config.project.name, "atrium");
  assert_eq!(config.assets.dir, "static/assets");
  assert_eq!(config.assets.manifest, "package.json");
  assert_eq!(config.assets.bundler, "webpack");
  assert!(config.assets.install_command.is_none());
  assert_eq!(config.version.source, VersionSource::Manifest);
  assert_eq!(config.version.env_var, "PACK_VERSION");
  assert_eq!(config.version.info_file, "version_info.json");
  assert_eq!(config.package.out_dir, "dist");
  assert_eq!(config.package.requirements, "requirements.txt");
  assert_eq!(config.package.include, vec!["src"]);
  assert!(config.package.extras.is_empty());
  assert!(config.clean.commands.is_empty());
}

#[test]
fn full_config_round_trip() {
  let config: PackConfig = toml::from_str(
    r#"
[project]
name = "atrium"

[assets]
dir = "webapp/static/assets"
manifest = "package.json"
install_command = "yarn install --frozen-lockfile"
bundler = "webpack"

[version]
source = "env"
env_var = "ATRIUM_RELEASE"
info_file = "version_info.json"

[package]
out_dir = "build/dist"
requirements = "requirements/base.txt"
include = ["atrium", "bin"]

[package.extras]
cors = ["flask-cors>=2.0.0"]

[clean]
commands = ["rm -rf webapp/static/assets/dist"]
"#,
  )
  .unwrap();

  assert_eq!(config.assets.dir, "webapp/static/assets");
  assert_eq!(config.assets.install_command.as_deref(), Some("yarn install --frozen-lockfile"));
  assert_eq!(config.version.source, VersionSource::Env);
  assert_eq!(config.version.env_var, "ATRIUM_RELEASE");
  assert_eq!(config.package.include, vec!["atrium", "bin"]);
  assert_eq!(config.package.extras["cors"], vec!["flask-cors>=2.0.0"]);
  assert_eq!(config.clean.commands.len(), 1);
}

#[test]
fn literal_source_requires_literal() {
  let config: PackConfig = toml::from_str(
    r#"
[project]
name = "atrium"

[version]
source = "literal"
"#,
  )
  .unwrap();
  let err = config.version.validate().unwrap_err().to_string();
  assert!(err.contains("version.literal"));

  let config: PackConfig = toml::from_str(
    r#"
[project]
name = "atrium"

[version]
source = "literal"
literal = "0.26.3"
"#,
  )
  .unwrap();
  assert!(config.version.validate().is_ok());
  assert_eq!(config.version.literal.as_deref(), Some("0.26.3"));
}

#[test]
fn load_rejects_empty_project_name() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("pack.toml");
  std::fs::write(&path, "[project]\nname = \"  \"\n").unwrap();

  let err = load_pack_config(&path).unwrap_err().to_string();
  assert!(err.contains("project.name"));
}

#[test]
fn find_config_walks_upward() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("pack.toml"), "[project]\nname = \"atrium\"\n").unwrap();
  let nested = tmp.path().join("webapp/static");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_pack_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join("pack.toml"));

  let config = load_pack_config(&found).unwrap();
  assert_eq!(config.project.name, "atrium");
}
