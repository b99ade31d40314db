// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Curator content plugin subsystem.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::PluginKind;

/// The primary error type used across plugin discovery and lookup.
///
/// Discovery-time variants (`Path`, `MalformedPlugin`, `ConflictingPlugin`,
/// `ModuleLoad`, `Config`) are fatal to the load pass that raised them and
/// indicate a misconfigured deployment. `PluginNotFound` is a normal
/// lookup-time condition callers are expected to handle.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// A registered config or plugin directory does not exist or is unreadable.
    #[error("cannot access path {}: {source}", path.display())]
    Path {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A discovered plugin lacks required metadata.
    #[error("malformed plugin {symbol}: {reason}")]
    MalformedPlugin { symbol: String, reason: String },

    /// Two configuration files share a name, or two plugins claim the same
    /// (name, version) identity.
    #[error("conflicting plugin: {0}")]
    ConflictingPlugin(String),

    /// A plugin module descriptor could not be loaded.
    #[error("failed to load module {module}: {reason}")]
    ModuleLoad { module: String, reason: String },

    /// A configuration value has the wrong shape (e.g. a non-boolean
    /// `enabled` key), or a plugin config file failed to parse.
    #[error("configuration error: {0}")]
    Config(String),

    /// A lookup requested a name or (name, version) that was never
    /// registered, including plugins disabled by configuration.
    #[error("{kind} not found: {name} ({version})")]
    PluginNotFound {
        kind: PluginKind,
        name: String,
        version: String,
    },

    /// Lifecycle misuse: double initialization, finalize without
    /// initialize, or a repeated load call on the same manager.
    #[error("precondition failed: {0}")]
    Precondition(String),
}
