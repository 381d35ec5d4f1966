//! Code generation infrastructure.
//!
//! This module provides the Go test file generator.

mod generator;

pub use generator::GoTestGenerator;
