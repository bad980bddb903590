use crate::config::{Config, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use otcheck_transform::{commands_from_value, to_value, validate, Command, Outcome};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct SuiteArgs {
    /// Suite file (defaults to the configured suite file)
    pub file: Option<PathBuf>,

    /// Stop at the first failing case
    #[arg(long)]
    pub fail_fast: bool,
}

/// One validation case in a suite file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteCase {
    pub name: String,

    #[serde(default)]
    pub document: String,

    #[serde(default)]
    pub expected: String,

    /// Raw command records, decoded when the case runs
    #[serde(default)]
    pub commands: serde_json::Value,

    /// Whether the commands should reproduce `expected`
    #[serde(default = "default_expect_valid")]
    pub expect_valid: bool,

    /// The case passes only if the run fails
    #[serde(default, skip_serializing_if = "is_false")]
    pub expect_error: bool,
}

fn default_expect_valid() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// What a case actually did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CaseActual {
    Valid,
    Invalid { outcome: Outcome },
    Error { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub passed: bool,
    pub actual: CaseActual,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseResult>,
}

pub fn suite(args: SuiteArgs, config: &Config, cwd: &str, format: OutputFormat) -> Result<()> {
    let path = match args.file {
        Some(file) => file,
        None => config.get_suite_path(cwd),
    };

    let cases = load_suite(&path)?;
    let report = run_suite(&cases, args.fail_fast || config.fail_fast);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&path, &report),
    }

    // Exit with error code if any case failed
    if report.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

pub fn load_suite(path: &Path) -> Result<Vec<SuiteCase>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read suite file {}", path.display()))?;
    let cases: Vec<SuiteCase> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid suite file {}", path.display()))?;
    Ok(cases)
}

pub fn run_suite(cases: &[SuiteCase], fail_fast: bool) -> SuiteReport {
    let mut report = SuiteReport {
        passed: 0,
        failed: 0,
        cases: Vec::with_capacity(cases.len()),
    };

    for case in cases {
        let result = run_case(case);
        debug!(case = %result.name, passed = result.passed, "Suite case finished");

        if result.passed {
            report.passed += 1;
        } else {
            report.failed += 1;
        }

        let stop = fail_fast && !result.passed;
        report.cases.push(result);
        if stop {
            break;
        }
    }

    report
}

pub fn run_case(case: &SuiteCase) -> CaseResult {
    let validation = commands_from_value(case.commands.clone())
        .map_err(|err| err.to_string())
        .and_then(|commands| {
            validate(&case.document, &case.expected, &commands).map_err(|err| err.to_string())
        });

    let (passed, actual) = match validation {
        Ok(validation) => {
            let passed = !case.expect_error && validation.valid == case.expect_valid;
            let actual = if validation.valid {
                CaseActual::Valid
            } else {
                CaseActual::Invalid {
                    outcome: validation.outcome,
                }
            };
            (passed, actual)
        }
        Err(message) => (case.expect_error, CaseActual::Error { message }),
    };

    CaseResult {
        name: case.name.clone(),
        passed,
        actual,
    }
}

fn print_report(path: &Path, report: &SuiteReport) {
    println!("🔍 {} otcheck suite", "Running".green().bold());
    println!("   Suite: {}", path.display());
    println!();

    for case in &report.cases {
        if case.passed {
            println!("  {} {}", "✓".green(), case.name);
        } else {
            let detail = match &case.actual {
                CaseActual::Valid => "valid".to_string(),
                CaseActual::Invalid { outcome } => match outcome.document() {
                    Some(document) => format!("invalid, got {:?}", document),
                    None => "invalid, document undefined".to_string(),
                },
                CaseActual::Error { message } => format!("error: {}", message),
            };
            println!("  {} {} - {}", "✗".red(), case.name, detail);
        }
    }

    println!();
    println!(
        "✨ {} Suite complete!",
        if report.failed > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Passed: {}", report.passed);
    if report.failed > 0 {
        println!("   {} {}", "Failed:".red(), report.failed);
    }
}

/// Cases written by `otcheck init`
pub fn sample_suite() -> Result<Vec<SuiteCase>> {
    const REPL_DOC: &str =
        "Repl.it uses operational transformations to keep everyone in a multiplayer repl in sync.";

    let case = |name: &str,
                document: &str,
                expected: &str,
                commands: &[Command],
                expect_valid: bool|
     -> Result<SuiteCase> {
        Ok(SuiteCase {
            name: name.to_string(),
            document: document.to_string(),
            expected: expected.to_string(),
            commands: to_value(commands)?,
            expect_valid,
            expect_error: false,
        })
    };

    Ok(vec![
        case(
            "skip then delete",
            REPL_DOC,
            "Repl.it uses operational transformations.",
            &[Command::skip(40), Command::delete(47)],
            true,
        )?,
        case(
            "delete from the wrong offset",
            REPL_DOC,
            "Repl.it uses operational transformations.",
            &[Command::skip(45), Command::delete(47)],
            false,
        )?,
        case(
            "skip past end",
            REPL_DOC,
            "Repl.it uses operational transformations.",
            &[Command::skip(40), Command::delete(47), Command::skip(2)],
            false,
        )?,
        case(
            "delete then insert",
            REPL_DOC,
            "We use operational transformations to keep everyone in a multiplayer repl in sync.",
            &[
                Command::delete(7),
                Command::insert("We"),
                Command::skip(4),
                Command::delete(1),
            ],
            true,
        )?,
        case("no ops", REPL_DOC, REPL_DOC, &[], true)?,
        case(
            "insert into empty document",
            "",
            "Hello, human!",
            &[Command::insert("Hello, human!")],
            true,
        )?,
        case(
            "forward delete",
            "What is up?",
            "What is?",
            &[Command::skip(7), Command::delete(3)],
            true,
        )?,
        case(
            "two transformations",
            "Nice!",
            "Nice day!",
            &[Command::skip(4), Command::insert(" day")],
            true,
        )?,
        SuiteCase {
            expect_error: true,
            ..case("unknown command", "", "", &[Command::Unknown], false)?
        },
    ])
}
