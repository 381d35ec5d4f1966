//! postman2go Domain - Core types
//!
//! This crate defines the collection model, the generator configuration and
//! the test cases derived from a collection.
//! All types here are pure Rust with no I/O dependencies.

pub mod collection;
pub mod config;
pub mod error;
pub mod request;
pub mod testing;

pub use collection::{PostmanCollection, PostmanItem, PostmanRequest, PostmanUrl};
pub use config::{GeneratorConfig, HostMode};
pub use error::{DomainError, DomainResult};
pub use request::HttpMethod;
pub use testing::{BodyLiteral, ExpectedStatus, TestCase, TestSuite, test_function_name};
