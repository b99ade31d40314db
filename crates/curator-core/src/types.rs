// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the plugin contracts and the registry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two plugin capability families, keyed independently by name+version.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum PluginKind {
    /// Pulls content into repositories.
    Importer,
    /// Publishes content out of repositories.
    Distributor,
}

/// Metadata reported by a plugin factory, extracted once per discovered
/// candidate and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Plugin name; required, must be non-empty.
    pub name: String,

    /// Version identifier. `None` is the implicit version, still
    /// distinguishable from any explicit version of the same name.
    pub version: Option<String>,

    /// Content type identifiers this plugin supports, in declaration order.
    #[serde(default)]
    pub types: Vec<String>,

    /// Name of the configuration file this plugin expects, if any.
    #[serde(default)]
    pub conf_file: Option<String>,
}

// --- Operational placeholder types ---
//
// The request/report payloads belong to the repository model owned by the
// surrounding server, which is out of scope here.

/// A request to pull content into a repository.
#[derive(Debug, Clone)]
pub struct SyncRequest {
    pub _placeholder: (),
}

/// The outcome of a sync operation.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub _placeholder: (),
}

/// A request to publish a repository's content.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub _placeholder: (),
}

/// The outcome of a publish operation.
#[derive(Debug, Clone)]
pub struct PublishReport {
    pub _placeholder: (),
}
