// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration of the directories one discovery pass scans.
//!
//! Paths are validated once, at registration time; discovery trusts them
//! afterwards. Order of registration is preserved and determines scan order.

use std::fs;
use std::path::{Path, PathBuf};

use curator_core::CuratorError;

/// A plugin module directory tagged with its namespace label.
///
/// The namespace prefixes the logical identity of every module loaded from
/// the directory (`namespace.stem`); an empty namespace leaves the stem bare.
#[derive(Debug, Clone)]
pub struct PluginDir {
    pub path: PathBuf,
    pub namespace: String,
}

/// Ordered lists of configuration and plugin module directories.
#[derive(Debug, Clone, Default)]
pub struct PathRegistry {
    config_paths: Vec<PathBuf>,
    plugin_dirs: Vec<PluginDir>,
}

impl PathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory to scan for plugin configuration files.
    ///
    /// Fails with [`CuratorError::Path`] if the directory does not exist or
    /// cannot be read.
    pub fn add_config_path(&mut self, path: impl AsRef<Path>) -> Result<(), CuratorError> {
        let path = path.as_ref();
        check_path(path)?;
        self.config_paths.push(path.to_path_buf());
        Ok(())
    }

    /// Adds a directory to scan for plugin module descriptors, with an
    /// optional namespace label (default: empty string).
    pub fn add_plugin_path(
        &mut self,
        path: impl AsRef<Path>,
        namespace: Option<&str>,
    ) -> Result<(), CuratorError> {
        let path = path.as_ref();
        check_path(path)?;
        self.plugin_dirs.push(PluginDir {
            path: path.to_path_buf(),
            namespace: namespace.unwrap_or("").to_string(),
        });
        Ok(())
    }

    /// Configuration directories in registration order.
    pub fn config_paths(&self) -> &[PathBuf] {
        &self.config_paths
    }

    /// Plugin module directories in registration order.
    pub fn plugin_dirs(&self) -> &[PluginDir] {
        &self.plugin_dirs
    }
}

/// Probe a directory for existence and read permission.
fn check_path(path: &Path) -> Result<(), CuratorError> {
    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(source) => Err(CuratorError::Path {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// List the file names in `dir` ending with `suffix`, sorted for a
/// deterministic scan order.
pub(crate) fn list_files(dir: &Path, suffix: &str) -> Result<Vec<String>, CuratorError> {
    let entries = fs::read_dir(dir).map_err(|source| CuratorError::Path {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CuratorError::Path {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            if name.ends_with(suffix) {
                names.push(name);
            }
        }
    }
    names.sort();
    Ok(names)
}
