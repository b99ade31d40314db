// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Curator server.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level Curator configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CuratorConfig {
    /// Content plugin discovery settings.
    #[serde(default)]
    pub plugins: PluginsConfig,
}

/// Content plugin discovery configuration.
///
/// Names the convention directories scanned once at startup: one config
/// directory and one module directory per plugin family.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginsConfig {
    /// Directory holding importer plugin configuration files (`*.conf`).
    #[serde(default = "default_importer_conf_dir")]
    pub importer_conf_dir: PathBuf,

    /// Directory holding distributor plugin configuration files (`*.conf`).
    #[serde(default = "default_distributor_conf_dir")]
    pub distributor_conf_dir: PathBuf,

    /// Directory holding importer module descriptors (`*.toml`).
    #[serde(default = "default_importer_module_dir")]
    pub importer_module_dir: PathBuf,

    /// Directory holding distributor module descriptors (`*.toml`).
    #[serde(default = "default_distributor_module_dir")]
    pub distributor_module_dir: PathBuf,

    /// Namespace label prefixed to importer module identities.
    #[serde(default = "default_importer_namespace")]
    pub importer_namespace: String,

    /// Namespace label prefixed to distributor module identities.
    #[serde(default = "default_distributor_namespace")]
    pub distributor_namespace: String,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            importer_conf_dir: default_importer_conf_dir(),
            distributor_conf_dir: default_distributor_conf_dir(),
            importer_module_dir: default_importer_module_dir(),
            distributor_module_dir: default_distributor_module_dir(),
            importer_namespace: default_importer_namespace(),
            distributor_namespace: default_distributor_namespace(),
        }
    }
}

fn default_importer_conf_dir() -> PathBuf {
    PathBuf::from("/etc/curator/importers")
}

fn default_distributor_conf_dir() -> PathBuf {
    PathBuf::from("/etc/curator/distributors")
}

fn default_importer_module_dir() -> PathBuf {
    PathBuf::from("/usr/lib/curator/importers")
}

fn default_distributor_module_dir() -> PathBuf {
    PathBuf::from("/usr/lib/curator/distributors")
}

fn default_importer_namespace() -> String {
    "curator.importers".to_string()
}

fn default_distributor_namespace() -> String {
    "curator.distributors".to_string()
}
