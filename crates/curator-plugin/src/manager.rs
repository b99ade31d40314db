// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The content plugin manager.
//!
//! Owns the importer and distributor version registries and runs the
//! discovery pipeline for each family exactly once: load configs → load
//! modules → classify → enablement-filtered registration. After the load
//! methods return the registries are read-only and the manager may be
//! shared freely across threads.
//!
//! The module-level [`initialize`]/[`manager`]/[`finalize`] functions hold
//! the process-wide manager slot the server uses; test harnesses and
//! alternate startup flows can instead construct a [`PluginManager`]
//! directly.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use curator_config::PluginsConfig;
use curator_core::{CuratorError, DistributorFactory, ImporterFactory, PluginKind};
use tracing::{debug, info};

use crate::classify::{self, Candidate};
use crate::config::{self, PluginConfig};
use crate::enablement;
use crate::module::{self, ExportTable};
use crate::paths::PathRegistry;
use crate::version::{PluginEntry, VersionRegistry};

/// Discovers and serves importer and distributor plugins for the lifetime
/// of the process.
#[derive(Debug)]
pub struct PluginManager {
    exports: ExportTable,
    importer_paths: PathRegistry,
    distributor_paths: PathRegistry,
    importers: VersionRegistry<Arc<dyn ImporterFactory>>,
    distributors: VersionRegistry<Arc<dyn DistributorFactory>>,
    importers_loaded: bool,
    distributors_loaded: bool,
}

impl PluginManager {
    /// Creates a manager over the given compiled-in export table, with no
    /// paths registered and nothing loaded.
    pub fn new(exports: ExportTable) -> Self {
        Self {
            exports,
            importer_paths: PathRegistry::new(),
            distributor_paths: PathRegistry::new(),
            importers: VersionRegistry::new(PluginKind::Importer),
            distributors: VersionRegistry::new(PluginKind::Distributor),
            importers_loaded: false,
            distributors_loaded: false,
        }
    }

    // --- discovery path registration ---

    /// Adds a directory of importer configuration files.
    pub fn add_importer_config_path(&mut self, path: impl AsRef<Path>) -> Result<(), CuratorError> {
        self.importer_paths.add_config_path(path)
    }

    /// Adds a directory of importer module descriptors with an optional
    /// namespace label.
    pub fn add_importer_plugin_path(
        &mut self,
        path: impl AsRef<Path>,
        namespace: Option<&str>,
    ) -> Result<(), CuratorError> {
        self.importer_paths.add_plugin_path(path, namespace)
    }

    /// Adds a directory of distributor configuration files.
    pub fn add_distributor_config_path(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<(), CuratorError> {
        self.distributor_paths.add_config_path(path)
    }

    /// Adds a directory of distributor module descriptors with an optional
    /// namespace label.
    pub fn add_distributor_plugin_path(
        &mut self,
        path: impl AsRef<Path>,
        namespace: Option<&str>,
    ) -> Result<(), CuratorError> {
        self.distributor_paths.add_plugin_path(path, namespace)
    }

    // --- discovery ---

    /// Runs the importer discovery pass. Callable exactly once per manager;
    /// any error leaves nothing registered for the family.
    pub fn load_importers(&mut self) -> Result<(), CuratorError> {
        if self.importers_loaded {
            return Err(CuratorError::Precondition(
                "importers already loaded".to_string(),
            ));
        }
        self.importers_loaded = true;

        let configs = config::load_configs(self.importer_paths.config_paths())?;
        let modules = module::load_modules(self.importer_paths.plugin_dirs(), &self.exports)?;
        let candidates = classify::importer_candidates(&modules)?;

        let mut registry = VersionRegistry::new(PluginKind::Importer);
        register_candidates(&mut registry, candidates, &configs)?;
        info!(count = registry.len(), "importer plugins loaded");
        self.importers = registry;
        Ok(())
    }

    /// Runs the distributor discovery pass. Callable exactly once per
    /// manager; any error leaves nothing registered for the family.
    pub fn load_distributors(&mut self) -> Result<(), CuratorError> {
        if self.distributors_loaded {
            return Err(CuratorError::Precondition(
                "distributors already loaded".to_string(),
            ));
        }
        self.distributors_loaded = true;

        let configs = config::load_configs(self.distributor_paths.config_paths())?;
        let modules = module::load_modules(self.distributor_paths.plugin_dirs(), &self.exports)?;
        let candidates = classify::distributor_candidates(&modules)?;

        let mut registry = VersionRegistry::new(PluginKind::Distributor);
        register_candidates(&mut registry, candidates, &configs)?;
        info!(count = registry.len(), "distributor plugins loaded");
        self.distributors = registry;
        Ok(())
    }

    // --- lookup ---

    /// Returns the factory for an importer, latest version when none is
    /// given.
    pub fn get_importer_factory(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<Arc<dyn ImporterFactory>, CuratorError> {
        self.importers
            .resolve(name, version)
            .map(|entry| Arc::clone(&entry.factory))
    }

    /// Returns the resolved configuration for an importer.
    pub fn get_importer_config(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<PluginConfig, CuratorError> {
        self.importers
            .resolve(name, version)
            .map(|entry| entry.config.clone())
    }

    /// Returns the factory for a distributor, latest version when none is
    /// given.
    pub fn get_distributor_factory(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<Arc<dyn DistributorFactory>, CuratorError> {
        self.distributors
            .resolve(name, version)
            .map(|entry| Arc::clone(&entry.factory))
    }

    /// Returns the resolved configuration for a distributor.
    pub fn get_distributor_config(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<PluginConfig, CuratorError> {
        self.distributors
            .resolve(name, version)
            .map(|entry| entry.config.clone())
    }

    /// All registered importer (name, version) pairs.
    pub fn loaded_importers(&self) -> Vec<(String, Option<String>)> {
        self.importers.loaded()
    }

    /// All registered distributor (name, version) pairs.
    pub fn loaded_distributors(&self) -> Vec<(String, Option<String>)> {
        self.distributors.loaded()
    }
}

/// Register every enabled candidate, attaching its matched configuration
/// (or the empty default).
fn register_candidates<F>(
    registry: &mut VersionRegistry<F>,
    candidates: Vec<Candidate<F>>,
    configs: &HashMap<String, PluginConfig>,
) -> Result<(), CuratorError> {
    for Candidate { factory, metadata } in candidates {
        let matched = metadata
            .conf_file
            .as_deref()
            .and_then(|file| configs.get(file));
        if !enablement::is_enabled(&metadata.name, matched)? {
            debug!(
                kind = %registry.kind(),
                plugin = %metadata.name,
                "plugin disabled by configuration, skipping"
            );
            continue;
        }

        let name = metadata.name.clone();
        let version = metadata.version.clone();
        let types = metadata.types.join(", ");
        registry.register(PluginEntry {
            metadata,
            factory,
            config: matched.cloned().unwrap_or_else(PluginConfig::empty),
        })?;
        info!(
            kind = %registry.kind(),
            plugin = %name,
            version = version.as_deref().unwrap_or("unversioned"),
            types = %types,
            "content plugin loaded"
        );
    }
    Ok(())
}

// --- process-wide lifecycle ---

static MANAGER: Mutex<Option<Arc<PluginManager>>> = Mutex::new(None);

fn manager_slot() -> std::sync::MutexGuard<'static, Option<Arc<PluginManager>>> {
    MANAGER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Builds the process-wide manager from the server configuration's
/// `[plugins]` section and runs both discovery passes.
///
/// Fails with [`CuratorError::Precondition`] if a manager is already
/// published.
pub fn initialize(exports: ExportTable) -> Result<Arc<PluginManager>, CuratorError> {
    let config =
        curator_config::load_config().map_err(|e| CuratorError::Config(e.to_string()))?;
    initialize_with_paths(exports, &config.plugins)
}

/// Builds the process-wide manager from explicit discovery paths.
///
/// The entry point for test harnesses and alternate startup flows; behaves
/// exactly like [`initialize`] otherwise.
pub fn initialize_with_paths(
    exports: ExportTable,
    plugins: &PluginsConfig,
) -> Result<Arc<PluginManager>, CuratorError> {
    let mut slot = manager_slot();
    if slot.is_some() {
        return Err(CuratorError::Precondition(
            "plugin manager already initialized".to_string(),
        ));
    }

    let mut manager = PluginManager::new(exports);
    manager.add_importer_config_path(&plugins.importer_conf_dir)?;
    manager.add_importer_plugin_path(
        &plugins.importer_module_dir,
        Some(&plugins.importer_namespace),
    )?;
    manager.add_distributor_config_path(&plugins.distributor_conf_dir)?;
    manager.add_distributor_plugin_path(
        &plugins.distributor_module_dir,
        Some(&plugins.distributor_namespace),
    )?;
    manager.load_importers()?;
    manager.load_distributors()?;

    let manager = Arc::new(manager);
    *slot = Some(Arc::clone(&manager));
    Ok(manager)
}

/// Returns the published process-wide manager.
pub fn manager() -> Result<Arc<PluginManager>, CuratorError> {
    manager_slot().as_ref().map(Arc::clone).ok_or_else(|| {
        CuratorError::Precondition("plugin manager not initialized".to_string())
    })
}

/// Drops the published process-wide manager so a fresh initialize cycle
/// can run. Not expected during normal server operation.
pub fn finalize() -> Result<(), CuratorError> {
    match manager_slot().take() {
        Some(_) => Ok(()),
        None => Err(CuratorError::Precondition(
            "plugin manager not initialized".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use curator_test_utils::{FixtureTree, MockImporterFactory};

    use super::*;

    fn manager_over(tree: &FixtureTree, exports: ExportTable) -> PluginManager {
        let mut manager = PluginManager::new(exports);
        manager.add_importer_config_path(tree.importer_conf_dir()).unwrap();
        manager
            .add_importer_plugin_path(tree.importer_module_dir(), Some("curator.importers"))
            .unwrap();
        manager
            .add_distributor_config_path(tree.distributor_conf_dir())
            .unwrap();
        manager
            .add_distributor_plugin_path(
                tree.distributor_module_dir(),
                Some("curator.distributors"),
            )
            .unwrap();
        manager
    }

    #[test]
    fn load_importers_is_callable_exactly_once() {
        let tree = FixtureTree::new();
        let mut manager = manager_over(&tree, ExportTable::new());

        manager.load_importers().unwrap();
        let err = manager.load_importers().unwrap_err();
        assert!(matches!(err, CuratorError::Precondition(_)));
    }

    #[test]
    fn failed_pass_still_consumes_the_one_call() {
        let tree = FixtureTree::new();
        tree.write_importer_module("broken.toml", "[module]\nexports = [\"Ghost\"]\n");
        let mut manager = manager_over(&tree, ExportTable::new());

        let err = manager.load_importers().unwrap_err();
        assert!(matches!(err, CuratorError::ModuleLoad { .. }));
        assert!(manager.loaded_importers().is_empty());

        let err = manager.load_importers().unwrap_err();
        assert!(matches!(err, CuratorError::Precondition(_)));
    }

    #[test]
    fn families_load_independently() {
        let tree = FixtureTree::new();
        tree.write_importer_module("rpm.toml", "[module]\nexports = [\"Rpm\"]\n");

        let mut exports = ExportTable::new();
        exports.register_importer(
            "Rpm",
            Arc::new(MockImporterFactory::named("rpm").with_version("1.0")),
        );

        let mut manager = manager_over(&tree, exports);
        manager.load_importers().unwrap();
        manager.load_distributors().unwrap();

        assert_eq!(
            manager.loaded_importers(),
            vec![("rpm".to_string(), Some("1.0".to_string()))]
        );
        assert!(manager.loaded_distributors().is_empty());

        // The distributor registry never saw the importer.
        let err = manager.get_distributor_factory("rpm", None).unwrap_err();
        assert!(matches!(err, CuratorError::PluginNotFound { .. }));
    }

    #[test]
    fn lookup_before_load_is_not_found() {
        let manager = PluginManager::new(ExportTable::new());
        let err = manager.get_importer_factory("rpm", None).unwrap_err();
        assert!(matches!(err, CuratorError::PluginNotFound { .. }));
    }
}
