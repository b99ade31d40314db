// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Version-keyed plugin registries.
//!
//! Each capability family gets its own [`VersionRegistry`] mapping plugin
//! name to an ordered collection of versions. Registration rejects
//! (name, version) collisions; resolution without a version returns the
//! greatest version under the ordering documented on [`PluginVersion`].

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use curator_core::{CuratorError, PluginKind, PluginMetadata};

use crate::config::PluginConfig;

/// A plugin version identifier with the registry's total ordering.
///
/// Versions compare as dotted component sequences. A component parsing as
/// an unsigned integer is numeric; numeric components order before textual
/// ones and compare numerically, textual components compare
/// lexicographically. Equal component sequences fall back to the raw
/// string, keeping the ordering consistent with equality (`"01"` and `"1"`
/// are distinct versions). The absent version orders below every present
/// version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginVersion {
    raw: Option<String>,
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum Component<'a> {
    Number(u64),
    Text(&'a str),
}

impl<'a> Component<'a> {
    fn parse(raw: &'a str) -> Self {
        raw.parse::<u64>()
            .map(Component::Number)
            .unwrap_or(Component::Text(raw))
    }
}

impl PluginVersion {
    pub fn new(raw: Option<String>) -> Self {
        Self { raw }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.raw
    }

    fn components(&self) -> Vec<Component<'_>> {
        match &self.raw {
            None => Vec::new(),
            Some(raw) => raw.split('.').map(Component::parse).collect(),
        }
    }
}

impl Ord for PluginVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components()
            .cmp(&other.components())
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for PluginVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(f, "{raw}"),
            None => write!(f, "unversioned"),
        }
    }
}

/// A registered plugin: validated metadata, the factory, and the resolved
/// configuration (matched config file or the empty default). Immutable
/// once registered.
#[derive(Debug, Clone)]
pub struct PluginEntry<F> {
    pub metadata: PluginMetadata,
    pub factory: F,
    pub config: PluginConfig,
}

/// Registry of one capability family, keyed by plugin name and version.
#[derive(Debug)]
pub struct VersionRegistry<F> {
    kind: PluginKind,
    plugins: BTreeMap<String, BTreeMap<PluginVersion, PluginEntry<F>>>,
}

impl<F> VersionRegistry<F> {
    pub fn new(kind: PluginKind) -> Self {
        Self {
            kind,
            plugins: BTreeMap::new(),
        }
    }

    /// The capability family this registry holds.
    pub fn kind(&self) -> PluginKind {
        self.kind
    }

    /// Registers an entry under its metadata's (name, version) identity.
    ///
    /// Two plugins claiming the same identity are always a conflict, never
    /// a silent override.
    pub fn register(&mut self, entry: PluginEntry<F>) -> Result<(), CuratorError> {
        let name = entry.metadata.name.clone();
        let version = PluginVersion::new(entry.metadata.version.clone());
        let versions = self.plugins.entry(name.clone()).or_default();
        if versions.contains_key(&version) {
            return Err(CuratorError::ConflictingPlugin(format!(
                "two {} plugins named {name} claim version {version}",
                self.kind
            )));
        }
        versions.insert(version, entry);
        Ok(())
    }

    /// Resolves a plugin by name: the exact version when one is given, the
    /// greatest registered version otherwise.
    pub fn resolve(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<&PluginEntry<F>, CuratorError> {
        let versions = self
            .plugins
            .get(name)
            .ok_or_else(|| self.not_found(name, version))?;
        match version {
            Some(requested) => versions
                .get(&PluginVersion::new(Some(requested.to_string())))
                .ok_or_else(|| self.not_found(name, version)),
            None => versions
                .last_key_value()
                .map(|(_, entry)| entry)
                .ok_or_else(|| self.not_found(name, version)),
        }
    }

    /// All registered plugin names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.plugins.keys().cloned().collect()
    }

    /// All registered versions of one plugin, in ascending order.
    pub fn versions(&self, name: &str) -> Result<Vec<PluginVersion>, CuratorError> {
        self.plugins
            .get(name)
            .map(|versions| versions.keys().cloned().collect())
            .ok_or_else(|| self.not_found(name, None))
    }

    /// All registered (name, version) pairs.
    pub fn loaded(&self) -> Vec<(String, Option<String>)> {
        self.plugins
            .iter()
            .flat_map(|(name, versions)| {
                versions
                    .keys()
                    .map(|version| (name.clone(), version.clone().into_inner()))
            })
            .collect()
    }

    /// Number of registered (name, version) entries.
    pub fn len(&self) -> usize {
        self.plugins.values().map(BTreeMap::len).sum()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    fn not_found(&self, name: &str, version: Option<&str>) -> CuratorError {
        CuratorError::PluginNotFound {
            kind: self.kind,
            name: name.to_string(),
            version: version.unwrap_or("latest").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(raw: &str) -> PluginVersion {
        PluginVersion::new(Some(raw.to_string()))
    }

    fn entry(name: &str, version: Option<&str>) -> PluginEntry<&'static str> {
        PluginEntry {
            metadata: PluginMetadata {
                name: name.to_string(),
                version: version.map(str::to_string),
                types: vec![],
                conf_file: None,
            },
            factory: "factory",
            config: PluginConfig::empty(),
        }
    }

    #[test]
    fn numeric_components_compare_numerically() {
        assert!(version("1.2") < version("1.10"));
        assert!(version("1.10") < version("2.0"));
        assert!(version("2") < version("10"));
    }

    #[test]
    fn textual_components_compare_lexicographically() {
        assert!(version("1.alpha") < version("1.beta"));
        // Numeric orders before textual within a position.
        assert!(version("1.2") < version("1.rc1"));
    }

    #[test]
    fn shorter_prefix_orders_first() {
        assert!(version("1.2") < version("1.2.0"));
    }

    #[test]
    fn absent_version_orders_below_everything() {
        let absent = PluginVersion::new(None);
        assert!(absent < version("0"));
        assert!(absent < version("0.0.1"));
        assert_eq!(absent.to_string(), "unversioned");
    }

    #[test]
    fn equal_components_distinct_raw_stay_distinct() {
        // "01" and "1" both parse to Number(1) but are different versions.
        assert_ne!(version("01"), version("1"));
        assert_ne!(version("01").cmp(&version("1")), Ordering::Equal);
    }

    #[test]
    fn register_and_resolve_exact() {
        let mut registry = VersionRegistry::new(PluginKind::Importer);
        registry.register(entry("rpm", Some("1.0"))).unwrap();

        let found = registry.resolve("rpm", Some("1.0")).unwrap();
        assert_eq!(found.metadata.name, "rpm");

        let err = registry.resolve("rpm", Some("9.9")).unwrap_err();
        assert!(matches!(err, CuratorError::PluginNotFound { .. }));
    }

    #[test]
    fn resolve_without_version_returns_latest() {
        let mut registry = VersionRegistry::new(PluginKind::Importer);
        registry.register(entry("rpm", Some("1.2"))).unwrap();
        registry.register(entry("rpm", Some("1.10"))).unwrap();

        let latest = registry.resolve("rpm", None).unwrap();
        assert_eq!(latest.metadata.version.as_deref(), Some("1.10"));

        registry.register(entry("rpm", Some("2.0"))).unwrap();
        let latest = registry.resolve("rpm", None).unwrap();
        assert_eq!(latest.metadata.version.as_deref(), Some("2.0"));
    }

    #[test]
    fn duplicate_identity_conflicts_regardless_of_order() {
        let mut registry = VersionRegistry::new(PluginKind::Distributor);
        registry.register(entry("http", Some("1.0"))).unwrap();

        let err = registry.register(entry("http", Some("1.0"))).unwrap_err();
        assert!(matches!(err, CuratorError::ConflictingPlugin(_)));
        assert!(err.to_string().contains("http"));
        assert!(err.to_string().contains("1.0"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry: VersionRegistry<&str> = VersionRegistry::new(PluginKind::Importer);
        let err = registry.resolve("ghost", None).unwrap_err();
        match err {
            CuratorError::PluginNotFound {
                kind,
                name,
                version,
            } => {
                assert_eq!(kind, PluginKind::Importer);
                assert_eq!(name, "ghost");
                assert_eq!(version, "latest");
            }
            other => panic!("expected PluginNotFound, got {other:?}"),
        }
    }

    #[test]
    fn loaded_lists_all_identity_pairs() {
        let mut registry = VersionRegistry::new(PluginKind::Importer);
        registry.register(entry("rpm", Some("1.0"))).unwrap();
        registry.register(entry("rpm", Some("2.0"))).unwrap();
        registry.register(entry("iso", None)).unwrap();

        let loaded = registry.loaded();
        assert_eq!(
            loaded,
            vec![
                ("iso".to_string(), None),
                ("rpm".to_string(), Some("1.0".to_string())),
                ("rpm".to_string(), Some("2.0".to_string())),
            ]
        );
        assert_eq!(registry.names(), vec!["iso", "rpm"]);

        let versions = registry.versions("rpm").unwrap();
        let raw: Vec<Option<&str>> = versions.iter().map(PluginVersion::as_str).collect();
        assert_eq!(raw, vec![Some("1.0"), Some("2.0")]);

        let err = registry.versions("ghost").unwrap_err();
        assert!(matches!(err, CuratorError::PluginNotFound { .. }));
    }
}
