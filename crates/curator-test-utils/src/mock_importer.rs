// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock importer plugin for deterministic testing.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use curator_core::types::{PluginMetadata, SyncReport, SyncRequest};
use curator_core::{CuratorError, Importer, ImporterFactory};

/// A mock importer factory with builder-style metadata configuration.
///
/// Counts how many instances it created, so tests can assert that lookup
/// hands back the factory they expect.
#[derive(Debug)]
pub struct MockImporterFactory {
    metadata: PluginMetadata,
    created: Arc<AtomicUsize>,
}

impl MockImporterFactory {
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

    /// Number of importer instances this factory created.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl ImporterFactory for MockImporterFactory {
    fn metadata(&self) -> PluginMetadata {
        self.metadata.clone()
    }

    fn create(&self, _config: &toml::Table) -> Result<Box<dyn Importer>, CuratorError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockImporter {
            syncs: AtomicUsize::new(0),
        }))
    }
}

/// A mock importer that counts sync calls and always succeeds.
pub struct MockImporter {
    syncs: AtomicUsize,
}

impl MockImporter {
    /// Number of sync calls made against this instance.
    pub fn syncs(&self) -> usize {
        self.syncs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Importer for MockImporter {
    async fn sync_repo(&self, _request: SyncRequest) -> Result<SyncReport, CuratorError> {
        self.syncs.fetch_add(1, Ordering::SeqCst);
        Ok(SyncReport { _placeholder: () })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_populates_metadata() {
        let factory = MockImporterFactory::named("rpm")
            .with_version("1.0")
            .with_types(&["rpm", "srpm"])
            .with_conf_file("rpm.conf");

        let metadata = factory.metadata();
        assert_eq!(metadata.name, "rpm");
        assert_eq!(metadata.version.as_deref(), Some("1.0"));
        assert_eq!(metadata.types, vec!["rpm", "srpm"]);
        assert_eq!(metadata.conf_file.as_deref(), Some("rpm.conf"));
    }

    #[tokio::test]
    async fn create_counts_and_instances_sync() {
        let factory = MockImporterFactory::named("rpm");
        assert_eq!(factory.created(), 0);

        let importer = factory.create(&toml::Table::new()).unwrap();
        assert_eq!(factory.created(), 1);

        importer
            .sync_repo(SyncRequest { _placeholder: () })
            .await
            .unwrap();
    }
}
