//! Go test file generator.
//!
//! Emits a `_test.go` file built on `net/http/httptest` and testify. The file
//! has a fixed preamble (imports, `HTTPTest`, `RunHTTPTest`), one `host`
//! declaration, then one table-driven test function per suite.

use std::fmt::Write as _;

use postman2go_application::{RenderInput, TestFileRenderer};
use postman2go_domain::{BodyLiteral, ExpectedStatus, GeneratorConfig, TestCase, TestSuite};

/// Renders suites as Go test source.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTestGenerator;

impl GoTestGenerator {
    /// Create a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Package clause, imports, `HTTPTest` and `RunHTTPTest`.
    ///
    /// The router fragments and extra imports are spliced in verbatim.
    #[must_use]
    pub fn render_header(&self, config: &GeneratorConfig) -> String {
        let mut code = String::new();
        let _ = writeln!(code, "package {}", config.package);
        code.push_str("\nimport (\n");
        for import in [
            "github.com/stretchr/testify/assert",
            "fmt",
            "io",
            "net/http",
            "net/http/httptest",
            "strings",
            "testing",
        ] {
            let _ = writeln!(code, "\t\"{import}\"");
        }
        let _ = writeln!(code, "\t{}", config.additional_imports);
        code.push_str(")\n\n");

        code.push_str("// HTTPTest contains all the parameters for a HTTP Unit Test\n");
        code.push_str("type HTTPTest struct {\n");
        code.push_str("\tName string\n");
        code.push_str("\tURL string\n");
        code.push_str("\tMethod string\n");
        code.push_str("\tBody string\n");
        code.push_str("\tExpectedStatus int\n");
        code.push_str("\tExpectedContains []string\n");
        code.push_str("}\n\n");

        code.push_str("// RunHTTPTest accepts a HTTPTest type to execute the HTTP request\n");
        code.push_str("func RunHTTPTest(test HTTPTest) (*http.Response, error) {\n");
        code.push_str(
            "\treq, err := http.NewRequest(test.Method, test.URL, strings.NewReader(test.Body))\n",
        );
        code.push_str("\tif err != nil {\n");
        code.push_str("\t\treturn nil, err\n");
        code.push_str("\t}\n");
        code.push_str("\trr := httptest.NewRecorder()\n");
        let _ = writeln!(code, "\t{}", config.setup_router);
        let _ = writeln!(code, "\t{}.ServeHTTP(rr, req)", config.router_func);
        code.push_str("\treturn rr.Result(), err\n");
        code.push_str("}\n");
        code
    }

    /// The shared `host` declaration.
    #[must_use]
    pub fn render_host(&self, host: &str) -> String {
        format!("\nvar host string = {}\n", go_quote(host))
    }

    /// One test function running every case of the suite as a subtest.
    #[must_use]
    pub fn render_suite(&self, suite: &TestSuite) -> String {
        let cases: Vec<String> = suite.cases.iter().map(|c| self.render_case(c)).collect();

        let mut code = String::new();
        let _ = writeln!(code, "\nfunc Test{}(t *testing.T) {{", suite.function_name);
        let _ = writeln!(code, "\ttests := []HTTPTest{{{}}}", cases.join(","));
        code.push('\n');
        code.push_str("\tfor _, v := range tests {\n");
        code.push_str("\t\tt.Run(v.Name, func(t *testing.T) {\n");
        code.push_str("\t\t\trun, err := RunHTTPTest(v)\n");
        code.push_str("\t\t\tassert.Nil(t, err)\n");
        code.push_str("\t\t\tbody, err := io.ReadAll(run.Body)\n");
        code.push_str("\t\t\tassert.Nil(t, err)\n");
        code.push_str("\t\t\tassert.Equal(t, v.ExpectedStatus, run.StatusCode)\n");
        code.push_str("\t\t\tif v.ExpectedContains != nil {\n");
        code.push_str("\t\t\t\tstringBody := string(body)\n");
        code.push_str("\t\t\t\tfor _, c := range v.ExpectedContains {\n");
        code.push_str("\t\t\t\t\tassert.Contains(t, stringBody, c)\n");
        code.push_str("\t\t\t\t}\n");
        code.push_str("\t\t\t}\n");
        code.push_str("\t\t\tt.Logf(\"Test %v got: %v\\n\", v.Name, string(body))\n");
        code.push_str("\t\t})\n");
        code.push_str("\t}\n");
        code.push_str("}\n");
        code
    }

    /// One `HTTPTest` literal.
    #[must_use]
    pub fn render_case(&self, case: &TestCase) -> String {
        let mut code = String::from("\n\t\t{\n");
        let _ = writeln!(code, "\tName: {},", go_quote(&case.name));
        let _ = writeln!(code, "\tURL: host + {},", go_quote(&format!("/{}", case.path)));
        let _ = writeln!(code, "\tMethod: http.Method{},", case.method.title_case());
        let _ = writeln!(code, "\tBody: {},", body_expression(&case.body));
        let _ = writeln!(
            code,
            "\tExpectedStatus: {},",
            status_constant(case.expected_status)
        );
        let _ = writeln!(
            code,
            "\tExpectedContains: {},",
            contains_expression(&case.expected_contains)
        );
        code.push_str("\t}");
        code
    }
}

impl TestFileRenderer for GoTestGenerator {
    fn render(&self, input: &RenderInput<'_>) -> String {
        let mut code = self.render_header(input.config);
        code.push_str(&self.render_host(input.host));
        for suite in input.suites {
            code.push_str(&self.render_suite(suite));
        }
        code
    }
}

const fn status_constant(status: ExpectedStatus) -> &'static str {
    match status {
        ExpectedStatus::Ok => "http.StatusOK",
    }
}

fn body_expression(body: &BodyLiteral) -> String {
    match body {
        BodyLiteral::Empty => "\"\"".to_string(),
        BodyLiteral::Raw(raw) => format!("fmt.Sprint({})", go_raw_string(raw)),
    }
}

fn contains_expression(expected: &[String]) -> String {
    if expected.is_empty() {
        return "nil".to_string();
    }
    let items: Vec<String> = expected.iter().map(|s| go_quote(s)).collect();
    format!("[]string{{{}}}", items.join(", "))
}

/// Interpreted Go string literal.
fn go_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Go raw string literal. A backtick cannot appear inside one, so each is
/// spliced in as an interpreted string.
fn go_raw_string(value: &str) -> String {
    format!("`{}`", value.replace('`', "` + \"`\" + `"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use postman2go_domain::HttpMethod;
    use pretty_assertions::assert_eq;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_string()).collect()
    }

    fn login_suite() -> TestSuite {
        let mut suite = TestSuite::new("User Auth");
        suite.add(TestCase::new(
            "Login",
            &segments(&["api", "login"]),
            HttpMethod::from("GET"),
            BodyLiteral::Empty,
        ));
        suite
    }

    #[test]
    fn test_render_case() {
        let generator = GoTestGenerator::new();
        let case = &login_suite().cases[0];

        assert_eq!(
            generator.render_case(case),
            "\n\t\t{\n\tName: \"Login\",\n\tURL: host + \"/api/login\",\n\tMethod: http.MethodGet,\n\tBody: \"\",\n\tExpectedStatus: http.StatusOK,\n\tExpectedContains: nil,\n\t}"
        );
    }

    #[test]
    fn test_render_suite() {
        let code = GoTestGenerator::new().render_suite(&login_suite());
        let expected = concat!(
            "\nfunc TestUserAuth(t *testing.T) {\n",
            "\ttests := []HTTPTest{\n",
            "\t\t{\n",
            "\tName: \"Login\",\n",
            "\tURL: host + \"/api/login\",\n",
            "\tMethod: http.MethodGet,\n",
            "\tBody: \"\",\n",
            "\tExpectedStatus: http.StatusOK,\n",
            "\tExpectedContains: nil,\n",
            "\t}}\n",
            "\n",
            "\tfor _, v := range tests {\n",
            "\t\tt.Run(v.Name, func(t *testing.T) {\n",
            "\t\t\trun, err := RunHTTPTest(v)\n",
            "\t\t\tassert.Nil(t, err)\n",
            "\t\t\tbody, err := io.ReadAll(run.Body)\n",
            "\t\t\tassert.Nil(t, err)\n",
            "\t\t\tassert.Equal(t, v.ExpectedStatus, run.StatusCode)\n",
            "\t\t\tif v.ExpectedContains != nil {\n",
            "\t\t\t\tstringBody := string(body)\n",
            "\t\t\t\tfor _, c := range v.ExpectedContains {\n",
            "\t\t\t\t\tassert.Contains(t, stringBody, c)\n",
            "\t\t\t\t}\n",
            "\t\t\t}\n",
            "\t\t\tt.Logf(\"Test %v got: %v\\n\", v.Name, string(body))\n",
            "\t\t})\n",
            "\t}\n",
            "}\n",
        );
        assert_eq!(code, expected);
    }

    #[test]
    fn test_cases_joined_with_commas() {
        let mut suite = login_suite();
        suite.add(TestCase::new(
            "Logout",
            &segments(&["api", "logout"]),
            HttpMethod::Post,
            BodyLiteral::Empty,
        ));
        let code = GoTestGenerator::new().render_suite(&suite);
        assert!(code.contains("\tExpectedContains: nil,\n\t},\n\t\t{\n\tName: \"Logout\","));
    }

    #[test]
    fn test_raw_body_preserved() {
        let case = TestCase::new(
            "Create",
            &segments(&["items"]),
            HttpMethod::Post,
            BodyLiteral::Raw("{\"x\":1}".to_string()),
        );
        let code = GoTestGenerator::new().render_case(&case);
        assert!(code.contains("\tBody: fmt.Sprint(`{\"x\":1}`),\n"));
        assert!(code.contains("\tMethod: http.MethodPost,\n"));
    }

    #[test]
    fn test_multiline_body_kept_verbatim() {
        let raw = "{\n    \"name\": \"a\\tb\"\n}";
        assert_eq!(
            body_expression(&BodyLiteral::Raw(raw.to_string())),
            format!("fmt.Sprint(`{raw}`)")
        );
    }

    #[test]
    fn test_backtick_in_body() {
        assert_eq!(go_raw_string("a`b"), "`a` + \"`\" + `b`");
    }

    #[test]
    fn test_go_quote_escapes() {
        assert_eq!(go_quote("plain"), "\"plain\"");
        assert_eq!(go_quote("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(go_quote("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_expected_contains_rendering() {
        assert_eq!(contains_expression(&[]), "nil");
        assert_eq!(
            contains_expression(&["ok".to_string(), "id".to_string()]),
            "[]string{\"ok\", \"id\"}"
        );
    }

    #[test]
    fn test_unknown_method_title_cased() {
        let case = TestCase::new("Purge", &[], HttpMethod::from("PURGE"), BodyLiteral::Empty);
        let code = GoTestGenerator::new().render_case(&case);
        assert!(code.contains("\tMethod: http.MethodPurge,\n"));
        assert!(code.contains("\tURL: host + \"/\",\n"));
    }

    #[test]
    fn test_header_splices_fragments() {
        let config = GeneratorConfig::new("server", "c.json", "api_test.go")
            .with_setup_router("cfg := config.New()\n\ts := NewServer(cfg)")
            .with_router_func("s.e")
            .with_additional_imports("\"example.com/app/config\"");
        let header = GoTestGenerator::new().render_header(&config);

        assert!(header.starts_with("package server\n\nimport (\n\t\"github.com/stretchr/testify/assert\"\n"));
        assert!(header.contains("\t\"testing\"\n\t\"example.com/app/config\"\n)\n"));
        assert!(header.contains("\tcfg := config.New()\n\ts := NewServer(cfg)\n\ts.e.ServeHTTP(rr, req)\n"));
        assert!(header.ends_with("\treturn rr.Result(), err\n}\n"));
    }

    #[test]
    fn test_empty_collection_renders_header_and_host() {
        let config = GeneratorConfig::new("server", "c.json", "api_test.go");
        let generator = GoTestGenerator::new();
        let code = generator.render(&RenderInput {
            config: &config,
            host: "",
            suites: &[],
        });

        assert_eq!(
            code,
            format!("{}\nvar host string = \"\"\n", generator.render_header(&config))
        );
        assert!(!code.contains("func Test"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = GeneratorConfig::new("server", "c.json", "api_test.go");
        let suites = vec![login_suite()];
        let input = RenderInput {
            config: &config,
            host: "api",
            suites: &suites,
        };
        let generator = GoTestGenerator::new();
        assert_eq!(generator.render(&input), generator.render(&input));
    }
}
