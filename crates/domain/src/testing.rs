//! Generated test cases.
//!
//! A [`TestSuite`] is one collection folder; each [`TestCase`] in it is one
//! request, rendered as a table-driven subtest.

use serde::{Deserialize, Serialize};

use crate::request::HttpMethod;

/// Status a generated subtest asserts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedStatus {
    /// 200 OK. Collections carry no expectations, so every case uses this.
    #[default]
    Ok,
}

/// Request body carried by a test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum BodyLiteral {
    /// No body.
    #[default]
    Empty,
    /// Raw body text, kept exactly as written in the collection.
    Raw(String),
}

impl BodyLiteral {
    /// Builds a body from optional raw text; empty text means no body.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(text) if !text.is_empty() => Self::Raw(text.to_string()),
            _ => Self::Empty,
        }
    }

    /// Returns true when there is no body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// One request turned into a subtest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Subtest name, the request name verbatim.
    pub name: String,
    /// Path segments joined by `/`, without the leading slash.
    pub path: String,
    /// Request method.
    pub method: HttpMethod,
    /// Request body.
    pub body: BodyLiteral,
    /// Asserted status.
    pub expected_status: ExpectedStatus,
    /// Substrings the response body must contain. Empty means not checked.
    pub expected_contains: Vec<String>,
}

impl TestCase {
    /// Creates a case expecting 200 OK with no body checks.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        path_segments: &[String],
        method: HttpMethod,
        body: BodyLiteral,
    ) -> Self {
        Self {
            name: name.into(),
            path: path_segments.join("/"),
            method,
            body,
            expected_status: ExpectedStatus::Ok,
            expected_contains: Vec::new(),
        }
    }
}

/// One folder turned into a test function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    /// Folder name as written in the collection.
    pub folder_name: String,
    /// Function name suffix (`Test` + this).
    pub function_name: String,
    /// Cases in request order.
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    /// Creates an empty suite for a folder.
    #[must_use]
    pub fn new(folder_name: impl Into<String>) -> Self {
        let folder_name = folder_name.into();
        let function_name = test_function_name(&folder_name);
        Self {
            folder_name,
            function_name,
            cases: Vec::new(),
        }
    }

    /// Appends a case.
    pub fn add(&mut self, case: TestCase) {
        self.cases.push(case);
    }

    /// Returns true if the suite has no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns the number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }
}

/// Folder name with every space removed.
#[must_use]
pub fn test_function_name(folder_name: &str) -> String {
    folder_name.replace(' ', "")
}
