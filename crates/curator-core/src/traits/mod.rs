// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability contracts implemented by content plugins.

pub mod distributor;
pub mod importer;

pub use distributor::{Distributor, DistributorFactory};
pub use importer::{Importer, ImporterFactory};
