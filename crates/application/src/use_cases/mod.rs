//! Application use cases (business logic orchestration).

mod build_suites;

pub use build_suites::{SuitePlan, build_suites, derive_host};
pub use generate_tests::{GenerateTests, GeneratedFile, render_test_file};
