use super::suite::sample_suite;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Suite file to create
    #[arg(short, long, default_value = "otcheck.suite.json")]
    pub suite_file: String,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing otcheck...".bright_blue().bold());

    // Create sample suite
    let suite_path = PathBuf::from(cwd).join(&args.suite_file);
    if !suite_path.exists() || args.force {
        if let Some(parent) = suite_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&suite_path, serde_json::to_string_pretty(&sample_suite()?)?)?;
        println!("  {} Created {}", "✓".green(), args.suite_file);
    }

    let config = Config {
        suite_file: args.suite_file.clone(),
        ..Config::default()
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ otcheck initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Add cases to {}", args.suite_file);
    println!("  2. Run: otcheck suite");

    Ok(())
}
