// SPDX-FileCopyrightText: 2026 Curator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Curator integration tests.
//!
//! Provides mock plugin factories and an on-disk fixture builder for fast,
//! deterministic, CI-runnable discovery tests.
//!
//! # Components
//!
//! - [`MockImporterFactory`] / [`MockDistributorFactory`] - configurable
//!   mock plugin factories with call counting
//! - [`FixtureTree`] - a temporary directory tree following the plugin
//!   filesystem convention

pub mod fixture;
pub mod mock_distributor;
pub mod mock_importer;

pub use fixture::FixtureTree;
pub use mock_distributor::{MockDistributor, MockDistributorFactory};
pub use mock_importer::{MockImporter, MockImporterFactory};
