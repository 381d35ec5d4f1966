//! Postman Collection v2.1 Type Definitions
//!
//! This module defines the types that represent a Postman Collection v2.1 JSON file.
//! All types use `#[serde(default)]` extensively so that missing fields decode
//! as empty values and unknown fields are ignored.

#![allow(missing_docs)]

use serde::{Deserialize, Deserializer, Serialize};

/// Root structure for Postman Collection v2.1
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanCollection {
    pub info: PostmanInfo,
    pub item: Vec<PostmanItem>,
    pub variable: Vec<PostmanVariable>,
    pub auth: Option<PostmanAuth>,
    pub event: Vec<PostmanEvent>,
}

impl PostmanCollection {
    /// Top-level items, in document order.
    ///
    /// Each top-level item is a candidate folder; bare requests at this level
    /// are also returned so callers can report them.
    pub fn top_level(&self) -> impl Iterator<Item = &PostmanItem> {
        self.item.iter()
    }

    /// Every request in the collection, depth first, in document order.
    #[must_use]
    pub fn requests(&self) -> Vec<&PostmanItem> {
        let mut out = Vec::new();
        for item in &self.item {
            item.collect_requests(&mut out);
        }
        out
    }
}

/// Collection metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanInfo {
    #[serde(rename = "_postman_id")]
    pub postman_id: Option<String>,
    pub name: String,
    pub schema: Option<String>,
    pub description: Option<serde_json::Value>,
}

/// An item can be either a folder (containing more items) or a request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanItem {
    pub name: String,
    /// If present, this item is a folder containing sub-items
    pub item: Option<Vec<Self>>,
    /// If present, this item is a request
    pub request: Option<PostmanRequest>,
    /// Response examples, never inspected
    pub response: Vec<serde_json::Value>,
    pub event: Vec<PostmanEvent>,
    pub auth: Option<PostmanAuth>,
}

impl PostmanItem {
    /// Returns true if this item is a folder (has sub-items)
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        self.item.is_some()
    }

    /// Returns true if this item is a request
    #[must_use]
    pub const fn is_request(&self) -> bool {
        self.request.is_some()
    }

    /// Requests below this item, depth first. A request item yields itself.
    #[must_use]
    pub fn requests(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect_requests(&mut out);
        out
    }

    fn collect_requests<'a>(&'a self, out: &mut Vec<&'a Self>) {
        if self.is_request() {
            out.push(self);
        }
        if let Some(children) = &self.item {
            for child in children {
                child.collect_requests(out);
            }
        }
    }
}

/// Postman Request definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanRequest {
    pub method: String,
    pub url: PostmanUrl,
    pub header: Vec<PostmanHeader>,
    pub body: Option<PostmanBody>,
    pub auth: Option<PostmanAuth>,
    pub description: Option<serde_json::Value>,
}

impl PostmanRequest {
    /// The raw body text, if the request carries a non-empty one.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.raw.as_deref())
            .filter(|raw| !raw.is_empty())
    }
}

/// URL can be either a simple string or a structured object
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PostmanUrl {
    #[default]
    Empty,
    Simple(String),
    Structured(PostmanUrlStructured),
}

impl PostmanUrl {
    /// Host segments; empty unless the URL is structured.
    #[must_use]
    pub fn host(&self) -> &[String] {
        match self {
            Self::Structured(s) => &s.host,
            _ => &[],
        }
    }

    /// Path segments; empty unless the URL is structured.
    #[must_use]
    pub fn path(&self) -> &[String] {
        match self {
            Self::Structured(s) => &s.path,
            _ => &[],
        }
    }
}

/// Structured URL object
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PostmanUrlStructured {
    pub raw: Option<String>,
    pub protocol: Option<String>,
    #[serde(deserialize_with = "segments")]
    pub host: Vec<String>,
    pub port: Option<String>,
    #[serde(deserialize_with = "segments")]
    pub path: Vec<String>,
    pub query: Vec<PostmanQueryParam>,
}

/// Postman writes `host` and `path` either as a segment list or as one
/// dotted/slashed string.
fn segments<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Segments {
        List(Vec<String>),
        Single(String),
    }

    Ok(match Option::<Segments>::deserialize(deserializer)? {
        Some(Segments::List(list)) => list,
        Some(Segments::Single(s)) if s.is_empty() => Vec::new(),
        Some(Segments::Single(s)) => vec![s],
        None => Vec::new(),
    })
}

/// Query parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanQueryParam {
    pub key: Option<String>,
    pub value: Option<String>,
    pub disabled: bool,
}

/// Request header
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanHeader {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub header_type: Option<String>,
    pub disabled: bool,
}

/// Request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanBody {
    pub mode: String,
    pub raw: Option<String>,
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanAuth {
    #[serde(rename = "type")]
    pub auth_type: String,
    pub basic: Vec<PostmanAuthParam>,
    pub bearer: Vec<PostmanAuthParam>,
    pub apikey: Vec<PostmanAuthParam>,
}

/// Auth parameter (key-value pair)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanAuthParam {
    pub key: String,
    pub value: Option<serde_json::Value>,
    #[serde(rename = "type")]
    pub param_type: Option<String>,
}

/// Variable definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanVariable {
    pub id: Option<String>,
    pub key: String,
    pub value: Option<serde_json::Value>,
    #[serde(rename = "type")]
    pub var_type: Option<String>,
}

/// Event (pre-request or test script)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanEvent {
    pub listen: String,
    pub script: Option<PostmanScript>,
}

/// Script definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanScript {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub script_type: Option<String>,
    pub exec: Vec<String>,
}
