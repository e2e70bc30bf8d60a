//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! openinvest-core test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators
//! - `memory`: In-memory adapters for the engine's ports

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod memory;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use memory::*;
