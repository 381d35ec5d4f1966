//! postman2go - Main Entry Point
//!
//! Parses the command line, installs logging and wires the real adapters
//! into the generation use case.

mod cli;

use std::fmt::Write as _;
use std::io::Write as _;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use postman2go_application::{GenerateTests, GeneratedFile};
use postman2go_infrastructure::{GoTestGenerator, StdFileSystem};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    debug!("postman2go started with verbosity level: {}", cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--stdout` output stays clean.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn run(command: Command) -> Result<()> {
    let use_case = GenerateTests::new(StdFileSystem::new(), GoTestGenerator::new());

    match command {
        Command::Generate { input, stdout } => {
            let config = input.resolve()?;
            if stdout {
                let generated = use_case.render(&config)?;
                std::io::stdout().write_all(generated.contents.as_bytes())?;
            } else {
                let generated = use_case.execute(&config)?;
                report(&generated);
            }
        }
        Command::Preview { input } => {
            let config = input.resolve()?;
            let generated = use_case.render(&config)?;
            print!("{}", preview(&generated));
        }
    }
    Ok(())
}

fn report(generated: &GeneratedFile) {
    if !generated.unresolved.is_empty() {
        warn!(
            variables = ?generated.unresolved,
            "generated file still contains placeholders"
        );
    }
    info!(
        suites = generated.suites.len(),
        cases = generated.case_count(),
        "generated {}",
        generated.path.display()
    );
}

/// Human-readable summary of what `generate` would write.
fn preview(generated: &GeneratedFile) -> String {
    let mut out = format!(
        "{} (host {:?})\n",
        generated.path.display(),
        generated.host
    );
    for suite in &generated.suites {
        let _ = writeln!(
            out,
            "  Test{} [{}]: {} case(s)",
            suite.function_name,
            suite.folder_name,
            suite.len()
        );
        for case in &suite.cases {
            let _ = writeln!(
                out,
                "    {} /{} {}",
                case.method.as_str(),
                case.path,
                case.name
            );
        }
    }
    for name in &generated.skipped {
        let _ = writeln!(out, "  request outside any folder, no cases: {name}");
    }
    for name in &generated.unresolved {
        let _ = writeln!(out, "  unresolved placeholder: {{{{{name}}}}}");
    }
    out
}

/// Joins the error chain, dropping causes already quoted by their parent.
fn error_chain(err: &anyhow::Error) -> String {
    let mut message = String::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if message.contains(&text) {
            continue;
        }
        if !message.is_empty() {
            message.push_str(": ");
        }
        message.push_str(&text);
    }
    message
}
