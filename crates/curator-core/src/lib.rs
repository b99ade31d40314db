// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Curator content plugin subsystem.
//!
//! This crate provides the error taxonomy, plugin metadata types, and the
//! importer/distributor capability contracts consumed by the plugin
//! registry and implemented by content plugins.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::CuratorError;
pub use types::{PluginKind, PluginMetadata};

pub use traits::{Distributor, DistributorFactory, Importer, ImporterFactory};
