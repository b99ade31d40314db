// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk fixture tree following the plugin filesystem convention.

use std::fs;
use std::path::{Path, PathBuf};

use curator_config::PluginsConfig;
use tempfile::TempDir;

/// A temporary directory tree with the four convention directories:
/// importer/distributor configs and importer/distributor modules.
///
/// The tree is removed when the fixture is dropped.
pub struct FixtureTree {
    root: TempDir,
}

impl FixtureTree {
    /// Creates the four convention directories under a fresh tempdir.
    pub fn new() -> Self {
        let root = TempDir::new().expect("create fixture tempdir");
        for dir in [
            "etc/importers",
            "etc/distributors",
            "lib/importers",
            "lib/distributors",
        ] {
            fs::create_dir_all(root.path().join(dir)).expect("create fixture subdir");
        }
        Self { root }
    }

    pub fn importer_conf_dir(&self) -> PathBuf {
        self.root.path().join("etc/importers")
    }

    pub fn distributor_conf_dir(&self) -> PathBuf {
        self.root.path().join("etc/distributors")
    }

    pub fn importer_module_dir(&self) -> PathBuf {
        self.root.path().join("lib/importers")
    }

    pub fn distributor_module_dir(&self) -> PathBuf {
        self.root.path().join("lib/distributors")
    }

    /// A `[plugins]` config section pointing at this tree.
    pub fn plugins_config(&self) -> PluginsConfig {
        PluginsConfig {
            importer_conf_dir: self.importer_conf_dir(),
            distributor_conf_dir: self.distributor_conf_dir(),
            importer_module_dir: self.importer_module_dir(),
            distributor_module_dir: self.distributor_module_dir(),
            importer_namespace: "curator.importers".to_string(),
            distributor_namespace: "curator.distributors".to_string(),
        }
    }

    /// Writes an importer configuration file (`name` includes the suffix).
    pub fn write_importer_conf(&self, name: &str, body: &str) {
        write(&self.importer_conf_dir(), name, body);
    }

    /// Writes a distributor configuration file.
    pub fn write_distributor_conf(&self, name: &str, body: &str) {
        write(&self.distributor_conf_dir(), name, body);
    }

    /// Writes an importer module descriptor.
    pub fn write_importer_module(&self, name: &str, body: &str) {
        write(&self.importer_module_dir(), name, body);
    }

    /// Writes a distributor module descriptor.
    pub fn write_distributor_module(&self, name: &str, body: &str) {
        write(&self.distributor_module_dir(), name, body);
    }
}

impl Default for FixtureTree {
    fn default() -> Self {
        Self::new()
    }
}

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).expect("write fixture file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_creates_all_four_directories() {
        let tree = FixtureTree::new();
        assert!(tree.importer_conf_dir().is_dir());
        assert!(tree.distributor_conf_dir().is_dir());
        assert!(tree.importer_module_dir().is_dir());
        assert!(tree.distributor_module_dir().is_dir());
    }

    #[test]
    fn written_files_land_in_the_right_directory() {
        let tree = FixtureTree::new();
        tree.write_importer_conf("rpm.conf", "[rpm]\n");
        tree.write_importer_module("rpm.toml", "[module]\nexports = []\n");

        assert!(tree.importer_conf_dir().join("rpm.conf").is_file());
        assert!(tree.importer_module_dir().join("rpm.toml").is_file());
        assert!(!tree.distributor_conf_dir().join("rpm.conf").exists());
    }

    #[test]
    fn plugins_config_points_at_the_tree() {
        let tree = FixtureTree::new();
        let config = tree.plugins_config();
        assert_eq!(config.importer_conf_dir, tree.importer_conf_dir());
        assert_eq!(config.distributor_module_dir, tree.distributor_module_dir());
    }
}
