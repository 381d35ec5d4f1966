//! Generator configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// How the shared `host` value is derived from the first request's host segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HostMode {
    /// Only the first host segment is used (`["api","example","com"]` gives `api`).
    #[default]
    FirstSegment,
    /// All host segments joined with `.` (`api.example.com`).
    Joined,
}

impl HostMode {
    /// Builds the host value from a segment list.
    #[must_use]
    pub fn derive(self, segments: &[String]) -> String {
        match self {
            Self::FirstSegment => segments.first().cloned().unwrap_or_default(),
            Self::Joined => segments.join("."),
        }
    }
}

/// Everything needed to turn one collection into one Go test file.
///
/// The router fragments are opaque source text. They are spliced into the
/// generated request helper exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Go package of the generated file.
    pub package: String,
    /// Postman collection export to read.
    pub postman_file: PathBuf,
    /// Test file to (re)write.
    pub test_file: PathBuf,
    /// Statements that build the router under test.
    #[serde(default)]
    pub setup_router: String,
    /// Expression whose `ServeHTTP` receives each request.
    #[serde(default)]
    pub router_func: String,
    /// `{{key}}` placeholder values.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
    /// Extra import lines appended to the import block.
    #[serde(default)]
    pub additional_imports: String,
    /// Host derivation mode.
    #[serde(default)]
    pub host_mode: HostMode,
}

impl GeneratorConfig {
    /// Creates a configuration with empty router fragments and no variables.
    #[must_use]
    pub fn new(
        package: impl Into<String>,
        postman_file: impl Into<PathBuf>,
        test_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            package: package.into(),
            postman_file: postman_file.into(),
            test_file: test_file.into(),
            setup_router: String::new(),
            router_func: String::new(),
            variables: BTreeMap::new(),
            additional_imports: String::new(),
            host_mode: HostMode::default(),
        }
    }

    /// Sets the router setup fragment.
    #[must_use]
    pub fn with_setup_router(mut self, setup: impl Into<String>) -> Self {
        self.setup_router = setup.into();
        self
    }

    /// Sets the router accessor expression.
    #[must_use]
    pub fn with_router_func(mut self, router: impl Into<String>) -> Self {
        self.router_func = router.into();
        self
    }

    /// Adds one placeholder value, replacing any previous value for `key`.
    #[must_use]
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Sets the extra import lines.
    #[must_use]
    pub fn with_additional_imports(mut self, imports: impl Into<String>) -> Self {
        self.additional_imports = imports.into();
        self
    }

    /// Sets the host derivation mode.
    #[must_use]
    pub const fn with_host_mode(mut self, mode: HostMode) -> Self {
        self.host_mode = mode;
        self
    }

    /// Adds values for keys that are not already mapped.
    ///
    /// Returns the number of values added.
    pub fn merge_fallback_variables<I, K, V>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut added = 0;
        for (key, value) in values {
            let key = key.into();
            if !self.variables.contains_key(&key) {
                self.variables.insert(key, value.into());
                added += 1;
            }
        }
        added
    }

    /// Checks the configuration before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfig`] if the package is not a Go
    /// identifier or either path is empty.
    pub fn validate(&self) -> DomainResult<()> {
        if !is_go_identifier(&self.package) {
            return Err(DomainError::InvalidConfig(format!(
                "package name '{}' is not a valid identifier",
                self.package
            )));
        }
        if self.postman_file.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfig(
                "postman_file must not be empty".to_string(),
            ));
        }
        if self.test_file.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfig(
                "test_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
