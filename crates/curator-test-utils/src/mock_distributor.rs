// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock distributor plugin for deterministic testing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use curator_core::types::{PluginMetadata, PublishReport, PublishRequest};
use curator_core::{CuratorError, Distributor, DistributorFactory};

/// A mock distributor factory with builder-style metadata configuration.
#[derive(Debug)]
pub struct MockDistributorFactory {
    metadata: PluginMetadata,
    created: Arc<AtomicUsize>,
}

impl MockDistributorFactory {
    /// Create a factory for a plugin with the given name, no version, no
    /// supported types, and no config file.
    pub fn named(name: &str) -> Self {
        Self {
            metadata: PluginMetadata {
                name: name.to_string(),
                version: None,
                types: Vec::new(),
                conf_file: None,
            },
            created: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set the version identifier.
    pub fn with_version(mut self, version: &str) -> Self {
        self.metadata.version = Some(version.to_string());
        self
    }

    /// Set the supported content types.
    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.metadata.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Set the expected configuration file name.
    pub fn with_conf_file(mut self, conf_file: &str) -> Self {
        self.metadata.conf_file = Some(conf_file.to_string());
        self
    }

    /// Number of distributor instances this factory created.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl DistributorFactory for MockDistributorFactory {
    fn metadata(&self) -> PluginMetadata {
        self.metadata.clone()
    }

    fn create(&self, _config: &toml::Table) -> Result<Box<dyn Distributor>, CuratorError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockDistributor {
            publishes: AtomicUsize::new(0),
        }))
    }
}

/// A mock distributor that counts publish calls and always succeeds.
pub struct MockDistributor {
    publishes: AtomicUsize,
}

impl MockDistributor {
    /// Number of publish calls made against this instance.
    pub fn publishes(&self) -> usize {
        self.publishes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Distributor for MockDistributor {
    async fn publish_repo(
        &self,
        _request: PublishRequest,
    ) -> Result<PublishReport, CuratorError> {
        self.publishes.fetch_add(1, Ordering::SeqCst);
        Ok(PublishReport { _placeholder: () })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_counts_and_instances_publish() {
        let factory = MockDistributorFactory::named("http").with_version("0.9");
        assert_eq!(factory.created(), 0);

        let distributor = factory.create(&toml::Table::new()).unwrap();
        assert_eq!(factory.created(), 1);
        assert_eq!(factory.metadata().version.as_deref(), Some("0.9"));

        distributor
            .publish_repo(PublishRequest { _placeholder: () })
            .await
            .unwrap();
    }
}
