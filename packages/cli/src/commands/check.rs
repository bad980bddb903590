use super::apply::print_outcome;
use super::input::{read_text, RunInput};
use crate::config::OutputFormat;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use otcheck_transform::validate;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: RunInput,

    /// Document the commands are expected to produce
    #[arg(
        short,
        long,
        conflicts_with = "expected_file",
        required_unless_present = "expected_file"
    )]
    pub expected: Option<String>,

    /// Read the expected document from a file
    #[arg(long)]
    pub expected_file: Option<PathBuf>,
}

pub fn check(args: CheckArgs, format: OutputFormat) -> Result<()> {
    let document = args.input.document()?;
    let commands = args.input.commands()?;
    let expected = read_text(
        args.expected.as_deref(),
        args.expected_file.as_ref(),
        "expected document",
    )?;

    let validation = validate(&document, &expected, &commands)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&validation)?),
        OutputFormat::Text => {
            if validation.valid {
                println!("{} Valid", "✓".green().bold());
            } else {
                println!("{} Invalid", "✗".red().bold());
                println!();
                println!("Expected:");
                println!("{}", expected);
                println!();
                print_outcome(&validation.outcome);
            }
        }
    }

    // Exit with error code if the prediction was wrong
    if !validation.valid {
        std::process::exit(1);
    }

    Ok(())
}
