mod commands;
mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, check, init, suite, ApplyArgs, CheckArgs, InitArgs, SuiteArgs};
use config::{Config, OutputFormat};
use tracing_subscriber::EnvFilter;

/// otcheck - verify OT edit sequences against the document they should produce
#[derive(Parser, Debug)]
#[command(name = "otcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log every applied command to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply OT commands to a document and print the result
    Apply(ApplyArgs),

    /// Check that OT commands produce the expected document
    Check(CheckArgs),

    /// Run every case in a suite file
    Suite(SuiteArgs),

    /// Write a default config and sample suite
    Init(InitArgs),
}

fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()
        .context("Cannot get current directory")?
        .display()
        .to_string();

    let config = Config::load(&cwd)?;
    init_tracing(cli.verbose, &config.log_level);

    let format = cli.format.unwrap_or(config.format);

    match cli.command {
        Command::Apply(args) => apply(args, format),
        Command::Check(args) => check(args, format),
        Command::Suite(args) => suite(args, &config, &cwd, format),
        Command::Init(args) => init(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
