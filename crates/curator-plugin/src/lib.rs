// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content plugin registry for the Curator server.
//!
//! Discovers importer and distributor plugins from on-disk module
//! descriptors and configuration files, validates and versions them, and
//! serves a conflict-free name+version lookup API for the lifetime of the
//! process.
//!
//! Discovery runs once, synchronously, during server startup:
//! configuration files and module descriptors are scanned from the
//! registered directories, exported symbols are resolved against the
//! compiled-in [`ExportTable`] and classified by capability family,
//! enablement is read from each plugin's configuration, and surviving
//! candidates land in per-family version registries. Every discovery error
//! is fatal to the pass that raised it: a partially loaded plugin set is
//! never published.

pub mod classify;
pub mod config;
pub mod enablement;
pub mod manager;
pub mod module;
pub mod paths;
pub mod version;

pub use config::PluginConfig;
pub use manager::{
    PluginManager, finalize, initialize, initialize_with_paths, manager,
};
pub use module::{ExportTable, LoadedModule, PluginSymbol};
pub use paths::{PathRegistry, PluginDir};
pub use version::{PluginEntry, PluginVersion, VersionRegistry};
