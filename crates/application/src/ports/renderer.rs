//! Test file rendering port.

use postman2go_domain::{GeneratorConfig, TestSuite};

/// Everything a renderer needs to produce one test file.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    /// Package, imports and router fragments.
    pub config: &'a GeneratorConfig,
    /// Shared host value prefixed to every URL.
    pub host: &'a str,
    /// Suites in folder order.
    pub suites: &'a [TestSuite],
}

/// Turns suites into source text.
///
/// Implementations must be deterministic: identical input gives identical output.
pub trait TestFileRenderer {
    /// Renders the complete file.
    fn render(&self, input: &RenderInput<'_>) -> String;
}
