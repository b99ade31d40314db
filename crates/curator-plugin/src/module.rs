// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin module loading.
//!
//! A plugin module on disk is a TOML descriptor naming the entry-point
//! symbols it exports. Symbols resolve against the [`ExportTable`], the
//! compiled-in table of plugin factories the host registers before
//! discovery runs. The descriptor's file stem, qualified by the owning
//! directory's namespace, is the module's logical identity.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use curator_core::{CuratorError, DistributorFactory, ImporterFactory, PluginKind};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::paths::{self, PluginDir};

/// Suffix marking a file as a plugin module descriptor.
pub const MODULE_SUFFIX: &str = ".toml";

/// Module stems never loaded as plugins: directory markers and shared base
/// definitions.
const SKIP_MODULES: &[&str] = &["mod", "base"];

/// A factory exported by a plugin module under a symbol name.
#[derive(Clone)]
pub enum PluginSymbol {
    Importer(Arc<dyn ImporterFactory>),
    Distributor(Arc<dyn DistributorFactory>),
}

impl PluginSymbol {
    /// The capability family this symbol belongs to.
    pub fn kind(&self) -> PluginKind {
        match self {
            PluginSymbol::Importer(_) => PluginKind::Importer,
            PluginSymbol::Distributor(_) => PluginKind::Distributor,
        }
    }
}

impl fmt::Debug for PluginSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(match self {
            PluginSymbol::Importer(_) => "Importer",
            PluginSymbol::Distributor(_) => "Distributor",
        })
        .finish()
    }
}

/// Compiled-in table of plugin factories addressable from module
/// descriptors.
///
/// The host registers every factory it ships before discovery; descriptors
/// then select and arrange them. A symbol name is unique — re-registration
/// is ignored with a warning, mirroring a duplicate linker symbol.
#[derive(Debug, Default)]
pub struct ExportTable {
    symbols: HashMap<String, PluginSymbol>,
}

impl ExportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an importer factory under `symbol`. Returns false if the
    /// symbol was already taken.
    pub fn register_importer(
        &mut self,
        symbol: impl Into<String>,
        factory: Arc<dyn ImporterFactory>,
    ) -> bool {
        self.insert(symbol.into(), PluginSymbol::Importer(factory))
    }

    /// Registers a distributor factory under `symbol`. Returns false if the
    /// symbol was already taken.
    pub fn register_distributor(
        &mut self,
        symbol: impl Into<String>,
        factory: Arc<dyn DistributorFactory>,
    ) -> bool {
        self.insert(symbol.into(), PluginSymbol::Distributor(factory))
    }

    /// Looks up a symbol by name.
    pub fn get(&self, symbol: &str) -> Option<&PluginSymbol> {
        self.symbols.get(symbol)
    }

    /// Number of registered symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if no symbols are registered.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn insert(&mut self, symbol: String, value: PluginSymbol) -> bool {
        if self.symbols.contains_key(&symbol) {
            warn!(%symbol, "export symbol already registered, ignoring");
            return false;
        }
        self.symbols.insert(symbol, value);
        true
    }
}

/// A plugin module resolved from its on-disk descriptor.
#[derive(Debug, Clone)]
pub struct LoadedModule {
    /// Logical identity: the descriptor's file stem qualified by the
    /// directory namespace.
    pub name: String,
    /// Exported symbols in declaration order.
    pub exports: Vec<(String, PluginSymbol)>,
}

/// Top-level structure of a module descriptor file.
#[derive(Debug, Deserialize)]
struct ModuleFile {
    module: ModuleSection,
}

/// The `[module]` section of a descriptor.
#[derive(Debug, Deserialize)]
struct ModuleSection {
    #[serde(default)]
    exports: Vec<String>,
}

/// Load every plugin module found under the given directories.
///
/// Directories are scanned in registration order, file names sorted within
/// each. Fails fast with [`CuratorError::ModuleLoad`] on the first module
/// whose descriptor cannot be read or parsed or whose exports do not
/// resolve; no partial module set is returned.
pub fn load_modules(
    plugin_dirs: &[PluginDir],
    table: &ExportTable,
) -> Result<Vec<LoadedModule>, CuratorError> {
    let mut modules = Vec::new();
    for dir in plugin_dirs {
        for file_name in paths::list_files(&dir.path, MODULE_SUFFIX)? {
            let stem = &file_name[..file_name.len() - MODULE_SUFFIX.len()];
            if SKIP_MODULES.contains(&stem) {
                continue;
            }
            let module_name = qualified_name(&dir.namespace, stem);
            let module = load_module(&dir.path.join(&file_name), module_name, table)?;
            modules.push(module);
        }
    }
    Ok(modules)
}

fn load_module(
    path: &Path,
    module_name: String,
    table: &ExportTable,
) -> Result<LoadedModule, CuratorError> {
    let raw = fs::read_to_string(path).map_err(|e| CuratorError::ModuleLoad {
        module: module_name.clone(),
        reason: format!("cannot read {}: {e}", path.display()),
    })?;
    let file: ModuleFile = toml::from_str(&raw).map_err(|e| CuratorError::ModuleLoad {
        module: module_name.clone(),
        reason: format!("invalid descriptor: {e}"),
    })?;

    let mut exports = Vec::new();
    for symbol in file.module.exports {
        let Some(value) = table.get(&symbol) else {
            return Err(CuratorError::ModuleLoad {
                module: module_name,
                reason: format!("unresolved export {symbol}"),
            });
        };
        exports.push((symbol, value.clone()));
    }

    debug!(module = %module_name, exports = exports.len(), "loaded plugin module");
    Ok(LoadedModule {
        name: module_name,
        exports,
    })
}

fn qualified_name(namespace: &str, stem: &str) -> String {
    if namespace.is_empty() {
        stem.to_string()
    } else {
        format!("{namespace}.{stem}")
    }
}
