//! Variable parser for {{variable}} syntax
//!
//! Finds placeholder references and their positions. Used to report what is
//! still unresolved after substitution.

use std::ops::Range;

/// Represents a parsed variable reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// The variable name (without {{ }}), surrounding whitespace trimmed.
    pub name: String,

    /// Byte range in the original string where this reference appears.
    pub span: Range<usize>,
}

impl VariableReference {
    /// Creates a new variable reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Parses a string and extracts all `{{name}}` references.
///
/// Blank references such as `{{ }}` are skipped. An unclosed `{{` ends the scan.
///
/// # Examples
///
/// ```
/// use postman2go_application::variable_resolver::parse_variables;
///
/// let refs = parse_variables("{{base_url}}/users/{{ id }}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "base_url");
/// assert_eq!(refs[1].name, "id");
/// ```
#[must_use]
pub fn parse_variables(input: &str) -> Vec<VariableReference> {
    let mut references = Vec::new();
    let mut offset = 0;

    while let Some(open) = input[offset..].find("{{") {
        let start = offset + open;
        let name_start = start + 2;
        let Some(close) = input[name_start..].find("}}") else {
            break;
        };
        let end = name_start + close + 2;
        let name = input[name_start..name_start + close].trim();
        if !name.is_empty() {
            references.push(VariableReference::new(name, start..end));
        }
        offset = end;
    }

    references
}

/// Returns true if the input string contains any variable references.
#[must_use]
pub fn has_variables(input: &str) -> bool {
    !parse_variables(input).is_empty()
}

/// Extracts just the variable names, in order of appearance.
#[must_use]
pub fn extract_variable_names(input: &str) -> Vec<String> {
    parse_variables(input)
        .into_iter()
        .map(|r| r.name)
        .collect()
}
