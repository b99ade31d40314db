// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-plugin enablement resolution.

use curator_core::CuratorError;

use crate::config::PluginConfig;

/// Decide whether a plugin is enabled by its resolved configuration.
///
/// Absent config, absent section, and absent `enabled` key all mean
/// enabled. A present `enabled` key must be a TOML boolean; any other shape
/// is a configuration error, never a silent default.
pub fn is_enabled(
    plugin_name: &str,
    config: Option<&PluginConfig>,
) -> Result<bool, CuratorError> {
    let Some(config) = config else {
        return Ok(true);
    };
    let Some(section) = config.section(plugin_name) else {
        return Ok(true);
    };
    match section.get("enabled") {
        None => Ok(true),
        Some(toml::Value::Boolean(enabled)) => Ok(*enabled),
        Some(other) => Err(CuratorError::Config(format!(
            "{}: [{plugin_name}] enabled must be a boolean, got {}",
            config.file_name(),
            other.type_str()
        ))),
    }
}
