//! Variable substitution module
//!
//! Replaces `{{variable}}` placeholders in raw collection text before it is
//! decoded.
//!
//! # Usage
//!
//! ```
//! use std::collections::BTreeMap;
//! use postman2go_application::variable_resolver::VariableSubstitutor;
//!
//! let mut variables = BTreeMap::new();
//! variables.insert("host".to_string(), "localhost".to_string());
//!
//! let result = VariableSubstitutor::new(&variables).substitute("http://{{host}}/api");
//! assert_eq!(result.text, "http://localhost/api");
//! ```

pub mod engine;
pub mod parser;

pub use engine::{SubstitutionResult, VariableSubstitutor, substitute};
pub use parser::{VariableReference, extract_variable_names, has_variables, parse_variables};
