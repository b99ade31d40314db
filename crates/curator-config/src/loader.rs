// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./curator.toml` > `~/.config/curator/curator.toml`
//! > `/etc/curator/curator.toml` with environment variable overrides via the
//! `CURATOR_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::CuratorConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/curator/curator.toml` (system-wide)
/// 3. `~/.config/curator/curator.toml` (user XDG config)
/// 4. `./curator.toml` (local directory)
/// 5. `CURATOR_*` environment variables
pub fn load_config() -> Result<CuratorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CuratorConfig::default()))
        .merge(Toml::file("/etc/curator/curator.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("curator/curator.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("curator.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config file specification.
pub fn load_config_from_str(toml_content: &str) -> Result<CuratorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CuratorConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CuratorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CuratorConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `CURATOR_PLUGINS_IMPORTER_CONF_DIR` must
/// map to `plugins.importer_conf_dir`, not `plugins.importer.conf.dir`.
fn env_provider() -> Env {
    Env::prefixed("CURATOR_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: CURATOR_PLUGINS_IMPORTER_CONF_DIR -> "plugins_importer_conf_dir"
        key.as_str().replacen("plugins_", "plugins.", 1).into()
    })
}
