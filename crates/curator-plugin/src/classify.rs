// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification of loaded modules into plugin candidates.
//!
//! One pass looks at one capability family: the importer pass keeps only
//! importer factories, the distributor pass only distributor factories.
//! Every retained factory has its metadata extracted and validated here,
//! before enablement and registration run.

use std::sync::Arc;

use curator_core::{CuratorError, DistributorFactory, ImporterFactory, PluginMetadata};

use crate::module::{LoadedModule, PluginSymbol};

/// A plugin candidate retained by classification.
#[derive(Debug, Clone)]
pub struct Candidate<F> {
    pub factory: F,
    pub metadata: PluginMetadata,
}

/// Retain the importer factories exported by the given modules, in module
/// and declaration order.
pub fn importer_candidates(
    modules: &[LoadedModule],
) -> Result<Vec<Candidate<Arc<dyn ImporterFactory>>>, CuratorError> {
    collect(modules, |export| match export {
        PluginSymbol::Importer(factory) => Some((Arc::clone(factory), factory.metadata())),
        PluginSymbol::Distributor(_) => None,
    })
}

/// Retain the distributor factories exported by the given modules, in
/// module and declaration order.
pub fn distributor_candidates(
    modules: &[LoadedModule],
) -> Result<Vec<Candidate<Arc<dyn DistributorFactory>>>, CuratorError> {
    collect(modules, |export| match export {
        PluginSymbol::Distributor(factory) => Some((Arc::clone(factory), factory.metadata())),
        PluginSymbol::Importer(_) => None,
    })
}

fn collect<F>(
    modules: &[LoadedModule],
    pick: impl Fn(&PluginSymbol) -> Option<(F, PluginMetadata)>,
) -> Result<Vec<Candidate<F>>, CuratorError> {
    let mut candidates = Vec::new();
    for module in modules {
        for (symbol, export) in &module.exports {
            let Some((factory, metadata)) = pick(export) else {
                continue;
            };
            if metadata.name.is_empty() {
                return Err(CuratorError::MalformedPlugin {
                    symbol: format!("{}.{symbol}", module.name),
                    reason: "missing name metadata".to_string(),
                });
            }
            candidates.push(Candidate { factory, metadata });
        }
    }
    Ok(candidates)
}
