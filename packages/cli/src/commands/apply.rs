use super::input::RunInput;
use crate::config::OutputFormat;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use otcheck_transform::{transform, Outcome};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub input: RunInput,
}

pub fn apply(args: ApplyArgs, format: OutputFormat) -> Result<()> {
    let document = args.input.document()?;
    let commands = args.input.commands()?;

    let outcome = transform(&document, &commands)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => print_outcome(&outcome),
    }

    Ok(())
}

pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Defined { document, position } => {
            println!("{} Document", "✓".green());
            println!("{}", document);
            println!("   Position: {}", position);
        }
        Outcome::Undefined { command_index } => {
            println!(
                "{} Document undefined: skip at command #{} moved past the end",
                "⚠️".yellow(),
                command_index
            );
        }
    }
}
