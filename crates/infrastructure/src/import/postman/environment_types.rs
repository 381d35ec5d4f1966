//! Postman Environment Type Definitions
//!
//! This module defines the types that represent a Postman Environment JSON file.

use serde::{Deserialize, Serialize};

/// Root structure for Postman Environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanEnvironment {
    /// Environment ID
    #[serde(default)]
    pub id: Option<String>,
    /// Environment name
    #[serde(default)]
    pub name: String,
    /// Environment variables
    #[serde(default)]
    pub values: Vec<PostmanEnvVariable>,
    /// Scope marker written by Postman (`"environment"`)
    #[serde(rename = "_postman_variable_scope", default)]
    pub postman_variable_scope: Option<String>,
}

impl PostmanEnvironment {
    /// Enabled variables as `(key, value)` pairs, in file order.
    pub fn enabled_variables(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.values
            .iter()
            .filter(|v| v.enabled && !v.key.is_empty())
            .map(|v| (v.key.clone(), v.value_string()))
    }
}

/// Postman environment variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanEnvVariable {
    /// Variable key/name
    pub key: String,
    /// Variable value; usually a string, but numbers and booleans occur
    #[serde(default)]
    pub value: serde_json::Value,
    /// Whether the variable is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Variable type (default, secret, any)
    #[serde(rename = "type", default)]
    pub var_type: Option<String>,
}

const fn default_true() -> bool {
    true
}

impl PostmanEnvVariable {
    /// The value as substitution text. `null` becomes the empty string.
    #[must_use]
    pub fn value_string(&self) -> String {
        match &self.value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
