//! postman2go Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Placeholder substitution over raw collection text
//! - Port traits (interfaces for external dependencies)
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;
pub mod variable_resolver;

pub use error::{GenerateError, GenerateResult};
pub use ports::{FileSystem, FileSystemError, RenderInput, TestFileRenderer};
pub use use_cases::{
    GenerateTests, GeneratedFile, SuitePlan, build_suites, derive_host, render_test_file,
};
