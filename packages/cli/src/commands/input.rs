use anyhow::{Context, Result};
use clap::Args;
use otcheck_transform::{parse_commands, Command};
use std::fs;
use std::path::PathBuf;

/// Starting document and command list, given inline or as files
#[derive(Args, Debug)]
pub struct RunInput {
    /// Starting document text
    #[arg(
        short,
        long,
        conflicts_with = "document_file",
        required_unless_present = "document_file"
    )]
    pub document: Option<String>,

    /// Read the starting document from a file
    #[arg(long)]
    pub document_file: Option<PathBuf>,

    /// JSON list of OT commands
    #[arg(
        short,
        long,
        conflicts_with = "commands_file",
        required_unless_present = "commands_file"
    )]
    pub commands: Option<String>,

    /// Read the JSON command list from a file
    #[arg(long)]
    pub commands_file: Option<PathBuf>,
}

impl RunInput {
    pub fn document(&self) -> Result<String> {
        read_text(self.document.as_deref(), self.document_file.as_ref(), "document")
    }

    pub fn commands(&self) -> Result<Vec<Command>> {
        let json = read_text(self.commands.as_deref(), self.commands_file.as_ref(), "commands")?;
        Ok(parse_commands(&json)?)
    }
}

/// Take the inline value if present, otherwise read the file
pub fn read_text(inline: Option<&str>, file: Option<&PathBuf>, what: &str) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} from {}", what, path.display())),
        (None, None) => Err(anyhow::anyhow!("No {} given", what)),
    }
}
