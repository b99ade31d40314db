// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The distributor capability contract: plugins that push content out.

use async_trait::async_trait;

use crate::error::CuratorError;
use crate::types::{PluginMetadata, PublishReport, PublishRequest};

/// A content distributor instance bound to a repository.
#[async_trait]
pub trait Distributor: Send + Sync + 'static {
    /// Publishes the content of the repository this distributor was
    /// created for.
    async fn publish_repo(
        &self,
        request: PublishRequest,
    ) -> Result<PublishReport, CuratorError>;
}

/// Factory for a single distributor plugin, registered under a module's
/// exported symbol name.
pub trait DistributorFactory: std::fmt::Debug + Send + Sync + 'static {
    /// Returns the identifying metadata for this plugin.
    fn metadata(&self) -> PluginMetadata;

    /// Creates a new distributor instance from the given configuration.
    fn create(&self, config: &toml::Table) -> Result<Box<dyn Distributor>, CuratorError>;
}
