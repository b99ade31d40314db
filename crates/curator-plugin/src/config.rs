// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin configuration file loading.
//!
//! Configuration files are TOML bodies under a `.conf` suffix, one file per
//! plugin family, with one table per plugin name. File names are unique
//! across the union of all configured directories: a second occurrence of a
//! name is a conflict, never an override.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use curator_core::CuratorError;
use tracing::debug;

use crate::paths;

/// Suffix marking a file as plugin configuration.
pub const CONF_SUFFIX: &str = ".conf";

/// A parsed plugin configuration file: named sections keyed by plugin name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginConfig {
    file_name: String,
    sections: toml::Table,
}

impl PluginConfig {
    /// The empty default handed to plugins without a matching config file.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Name of the file this configuration was parsed from (empty for the
    /// default configuration).
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the section named after a plugin, if present.
    pub fn section(&self, name: &str) -> Option<&toml::Table> {
        match self.sections.get(name) {
            Some(toml::Value::Table(table)) => Some(table),
            _ => None,
        }
    }

    /// The full parsed table, as handed to plugin factories.
    pub fn table(&self) -> &toml::Table {
        &self.sections
    }
}

/// Scan directories in order for `*.conf` files and parse each into a
/// [`PluginConfig`], keyed by file name.
///
/// Fails with [`CuratorError::ConflictingPlugin`] on a duplicate file name
/// and [`CuratorError::Config`] on an unreadable or unparseable file.
pub fn load_configs(
    config_paths: &[PathBuf],
) -> Result<HashMap<String, PluginConfig>, CuratorError> {
    let mut configs = HashMap::new();
    for dir in config_paths {
        for file_name in paths::list_files(dir, CONF_SUFFIX)? {
            if configs.contains_key(&file_name) {
                return Err(CuratorError::ConflictingPlugin(format!(
                    "more than one configuration file found for {file_name}"
                )));
            }
            let path = dir.join(&file_name);
            let raw = fs::read_to_string(&path).map_err(|e| {
                CuratorError::Config(format!("cannot read {}: {e}", path.display()))
            })?;
            let sections: toml::Table = toml::from_str(&raw).map_err(|e| {
                CuratorError::Config(format!("cannot parse {}: {e}", path.display()))
            })?;
            debug!(file = %file_name, dir = %dir.display(), "loaded plugin configuration");
            configs.insert(
                file_name.clone(),
                PluginConfig {
                    file_name,
                    sections,
                },
            );
        }
    }
    Ok(configs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &std::path::Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn load_configs_parses_sections() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "rpm.conf",
            r#"
[rpm]
enabled = true
feed_timeout = 30
"#,
        );

        let configs = load_configs(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(configs.len(), 1);

        let config = &configs["rpm.conf"];
        assert_eq!(config.file_name(), "rpm.conf");
        let section = config.section("rpm").expect("rpm section");
        assert_eq!(section.get("enabled"), Some(&toml::Value::Boolean(true)));
        assert_eq!(section.get("feed_timeout"), Some(&toml::Value::Integer(30)));
    }

    #[test]
    fn load_configs_ignores_other_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "rpm.conf", "");
        write(dir.path(), "README.md", "not a config");

        let configs = load_configs(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(configs.len(), 1);
        assert!(configs.contains_key("rpm.conf"));
    }

    #[test]
    fn duplicate_file_name_across_directories_conflicts() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        // Identical contents still conflict: identity is the file name.
        write(first.path(), "rpm.conf", "[rpm]\n");
        write(second.path(), "rpm.conf", "[rpm]\n");

        let result = load_configs(&[first.path().to_path_buf(), second.path().to_path_buf()]);
        let err = result.expect_err("duplicate name should conflict");
        assert!(matches!(err, CuratorError::ConflictingPlugin(_)));
        assert!(err.to_string().contains("rpm.conf"));
    }

    #[test]
    fn unparseable_config_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "broken.conf", "[rpm\nenabled = ???");

        let result = load_configs(&[dir.path().to_path_buf()]);
        assert!(matches!(result, Err(CuratorError::Config(_))));
    }

    #[test]
    fn section_lookup_misses_on_non_table_values() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "odd.conf", "rpm = \"not a table\"\n");

        let configs = load_configs(&[dir.path().to_path_buf()]).unwrap();
        assert!(configs["odd.conf"].section("rpm").is_none());
    }

    #[test]
    fn empty_config_has_no_sections() {
        let config = PluginConfig::empty();
        assert_eq!(config.file_name(), "");
        assert!(config.section("anything").is_none());
        assert!(config.table().is_empty());
    }
}
