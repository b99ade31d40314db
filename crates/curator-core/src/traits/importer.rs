// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The importer capability contract: plugins that pull content in.

use async_trait::async_trait;

use crate::error::CuratorError;
use crate::types::{PluginMetadata, SyncReport, SyncRequest};

/// A content importer instance bound to a repository.
///
/// The registry only locates and classifies importers; executing sync logic
/// is the caller's concern.
#[async_trait]
pub trait Importer: Send + Sync + 'static {
    /// Pulls content into the repository this importer was created for.
    async fn sync_repo(&self, request: SyncRequest) -> Result<SyncReport, CuratorError>;
}

/// Factory for a single importer plugin, registered under a module's
/// exported symbol name.
///
/// The factory is the unit of discovery: its `metadata()` identifies the
/// plugin and `create()` instantiates it with its resolved configuration.
pub trait ImporterFactory: std::fmt::Debug + Send + Sync + 'static {
    /// Returns the identifying metadata for this plugin.
    fn metadata(&self) -> PluginMetadata;

    /// Creates a new importer instance from the given configuration.
    fn create(&self, config: &toml::Table) -> Result<Box<dyn Importer>, CuratorError>;
}
