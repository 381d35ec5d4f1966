//! HTTP Method enumeration

use heck::ToUpperCamelCase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP method of a collection request.
///
/// Methods outside the standard set are kept verbatim in [`HttpMethod::Other`]
/// so that the generated constant name still follows the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
    /// HTTP GET method
    #[default]
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP PATCH method
    Patch,
    /// HTTP DELETE method
    Delete,
    /// HTTP HEAD method
    Head,
    /// HTTP OPTIONS method
    Options,
    /// HTTP CONNECT method
    Connect,
    /// HTTP TRACE method
    Trace,
    /// Any other method string, as written in the collection.
    Other(String),
}

impl HttpMethod {
    /// Returns the method as written on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Connect => "CONNECT",
            Self::Trace => "TRACE",
            Self::Other(method) => method,
        }
    }

    /// Returns the title-cased name used for symbolic method constants
    /// (`"get"` becomes `Get`, so the constant reads `MethodGet`).
    ///
    /// Separators are dropped, so `m-search` gives `MSearch`.
    #[must_use]
    pub fn title_case(&self) -> String {
        self.as_str().to_upper_camel_case()
    }

    /// Returns false for methods outside the standard set.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for HttpMethod {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            "HEAD" => Self::Head,
            "OPTIONS" => Self::Options,
            "CONNECT" => Self::Connect,
            "TRACE" => Self::Trace,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl From<String> for HttpMethod {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}
