//! Command-line arguments and configuration assembly.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use postman2go_domain::{GeneratorConfig, HostMode};
use postman2go_infrastructure::{ConfigRepository, DEFAULT_CONFIG_FILE, PostmanImporter};
use tracing::debug;

/// Generate Go HTTP integration tests from a Postman collection
#[derive(Debug, Parser)]
#[command(name = "postman2go", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the Go test file for a collection
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Print the generated file instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// List the test functions and cases that would be generated
    Preview {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Where the generator configuration comes from.
#[derive(Debug, Default, Args)]
pub struct InputArgs {
    /// Configuration file (defaults to ./postman2go.yaml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Postman collection export
    #[arg(long, value_name = "PATH")]
    pub collection: Option<PathBuf>,

    /// Go test file to write
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Go package of the generated file
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Postman environment export used for variables not set elsewhere
    #[arg(short, long, value_name = "FILE")]
    pub environment: Option<PathBuf>,

    /// Placeholder value, repeatable
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub vars: Vec<(String, String)>,

    /// How the shared host value is derived
    #[arg(long, value_enum, value_name = "MODE")]
    pub host_mode: Option<HostModeArg>,
}

/// Command-line spelling of [`HostMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostModeArg {
    /// First host segment only
    FirstSegment,
    /// All host segments joined with dots
    Joined,
}

impl From<HostModeArg> for HostMode {
    fn from(arg: HostModeArg) -> Self {
        match arg {
            HostModeArg::FirstSegment => Self::FirstSegment,
            HostModeArg::Joined => Self::Joined,
        }
    }
}

impl InputArgs {
    /// Builds the generator configuration.
    ///
    /// Precedence, highest first: command-line flags and `--var`, the
    /// configuration file, the environment export.
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let mut config = match self.config_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                ConfigRepository::new()
                    .load(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?
            }
            None => {
                let (Some(collection), Some(output), Some(package)) =
                    (&self.collection, &self.output, &self.package)
                else {
                    bail!(
                        "no {DEFAULT_CONFIG_FILE} found; pass --config or all of --collection, --output and --package"
                    );
                };
                GeneratorConfig::new(package.clone(), collection.clone(), output.clone())
            }
        };

        if let Some(collection) = &self.collection {
            config.postman_file.clone_from(collection);
        }
        if let Some(output) = &self.output {
            config.test_file.clone_from(output);
        }
        if let Some(package) = &self.package {
            config.package.clone_from(package);
        }
        if let Some(mode) = self.host_mode {
            config.host_mode = mode.into();
        }
        for (key, value) in &self.vars {
            config.variables.insert(key.clone(), value.clone());
        }

        if let Some(environment) = &self.environment {
            PostmanImporter::new()
                .apply_environment(&mut config, environment)
                .with_context(|| {
                    format!("failed to load environment {}", environment.display())
                })?;
        }

        Ok(config)
    }

    fn config_file(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        })
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("base_url=http://localhost:8080?a=b").unwrap(),
            ("base_url".to_string(), "http://localhost:8080?a=b".to_string())
        );
        assert_eq!(
            parse_key_value("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::parse_from([
            "postman2go",
            "-vv",
            "generate",
            "--collection",
            "c.json",
            "-o",
            "api_test.go",
            "-p",
            "server",
            "--var",
            "host=localhost",
            "--host-mode",
            "joined",
            "--stdout",
        ]);

        assert_eq!(cli.verbose, 2);
        let Command::Generate { input, stdout } = cli.command else {
            unreachable!("expected generate");
        };
        assert!(stdout);
        assert_eq!(input.host_mode, Some(HostModeArg::Joined));

        let config = input.resolve().unwrap();
        assert_eq!(config.package, "server");
        assert_eq!(config.postman_file, PathBuf::from("c.json"));
        assert_eq!(config.variables["host"], "localhost");
        assert_eq!(config.host_mode, HostMode::Joined);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("gen.yaml");
        std::fs::write(
            &config_path,
            "package: server\npostman_file: c.json\ntest_file: api_test.go\nvariables:\n  host: from-file\n  token: t\n",
        )
        .unwrap();

        let input = InputArgs {
            config: Some(config_path),
            package: Some("api".to_string()),
            vars: vec![("host".to_string(), "from-flag".to_string())],
            ..InputArgs::default()
        };
        let config = input.resolve().unwrap();

        assert_eq!(config.package, "api");
        assert_eq!(config.postman_file, dir.path().join("c.json"));
        assert_eq!(config.variables["host"], "from-flag");
        assert_eq!(config.variables["token"], "t");
    }

    #[test]
    fn test_environment_fills_missing_variables() {
        let dir = tempdir().unwrap();
        let env_path = dir.path().join("dev.json");
        std::fs::write(
            &env_path,
            r#"{"name": "dev", "values": [{"key": "host", "value": "env"}, {"key": "port", "value": "8080"}]}"#,
        )
        .unwrap();

        let input = InputArgs {
            collection: Some(PathBuf::from("c.json")),
            output: Some(PathBuf::from("t.go")),
            package: Some("server".to_string()),
            environment: Some(env_path),
            vars: vec![("host".to_string(), "flag".to_string())],
            ..InputArgs::default()
        };
        let config = input.resolve().unwrap();

        assert_eq!(config.variables["host"], "flag");
        assert_eq!(config.variables["port"], "8080");
    }

    #[test]
    fn test_missing_config_file_reported() {
        let dir = tempdir().unwrap();
        let input = InputArgs {
            config: Some(dir.path().join("missing.yaml")),
            ..InputArgs::default()
        };
        let err = input.resolve().unwrap_err();
        assert!(err.to_string().starts_with("failed to load config"));
    }
}
