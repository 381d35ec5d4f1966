//! Placeholder substitution engine
//!
//! Replaces literal `{{key}}` occurrences with mapped values. Substitution is
//! plain text replacement: no escaping, no trimming of the key, and inserted
//! values are never scanned again.

use std::collections::{BTreeMap, BTreeSet};

use super::parser::parse_variables;

/// Result of substituting placeholders in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionResult {
    /// The text with every mapped placeholder replaced.
    pub text: String,

    /// Number of placeholder occurrences replaced.
    pub replacements: usize,

    /// Names of placeholders still present, in order of first appearance.
    pub unresolved: Vec<String>,
}

impl SubstitutionResult {
    /// Whether every placeholder was resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Substitutes `{{key}}` placeholders from a fixed mapping.
#[derive(Debug, Clone, Copy)]
pub struct VariableSubstitutor<'a> {
    variables: &'a BTreeMap<String, String>,
}

impl<'a> VariableSubstitutor<'a> {
    /// Creates a substitutor over the given mapping.
    #[must_use]
    pub const fn new(variables: &'a BTreeMap<String, String>) -> Self {
        Self { variables }
    }

    /// Replaces every `{{key}}` whose key is in the mapping.
    ///
    /// The scan is a single left-to-right pass, so the result does not depend
    /// on mapping order and a value containing `{{other}}` is left as is.
    #[must_use]
    pub fn substitute(&self, input: &str) -> SubstitutionResult {
        let mut text = String::with_capacity(input.len());
        let mut replacements = 0;
        let mut rest = input;

        if !self.variables.is_empty() {
            while let Some(open) = rest.find("{{") {
                text.push_str(&rest[..open]);
                // Extra leading braces are literal: `{{{key}}` matches `{{key}}`.
                let braces = rest[open..].bytes().take_while(|&b| b == b'{').count();
                text.push_str(&rest[open..open + braces - 2]);
                let candidate = &rest[open + braces - 2..];

                let Some(close) = candidate[2..].find("}}") else {
                    rest = candidate;
                    break;
                };
                let key = &candidate[2..2 + close];
                if let Some(value) = self.variables.get(key) {
                    text.push_str(value);
                    replacements += 1;
                    rest = &candidate[close + 4..];
                } else if let Some(inner) = key.rfind("{{") {
                    // Resume at the innermost opener; the scan stays linear.
                    text.push_str(&candidate[..2 + inner]);
                    rest = &candidate[2 + inner..];
                } else {
                    text.push_str(&candidate[..close + 4]);
                    rest = &candidate[close + 4..];
                }
            }
        }
        text.push_str(rest);

        let unresolved = Self::find_unresolved(&text);
        SubstitutionResult {
            text,
            replacements,
            unresolved,
        }
    }

    /// Placeholder names present in `input`, deduplicated.
    #[must_use]
    pub fn find_unresolved(input: &str) -> Vec<String> {
        let mut seen = BTreeSet::new();
        parse_variables(input)
            .into_iter()
            .filter(|r| seen.insert(r.name.clone()))
            .map(|r| r.name)
            .collect()
    }
}

/// Convenience wrapper for one-off substitution.
#[must_use]
pub fn substitute(input: &str, variables: &BTreeMap<String, String>) -> SubstitutionResult {
    VariableSubstitutor::new(variables).substitute(input)
}
