//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use constrain::config::{CheckMode, Config};
use constrain::output::OutputMode;

/// constrain - Check declared property constraints against a resource catalog
#[derive(Parser, Debug)]
#[command(
    name = "constrain",
    version,
    about = "Check declared property constraints against a resource catalog",
    long_about = "Declare which values resource properties may or may not take.\n\n\
                  Constraints name target resources and either per-property rules\n\
                  or allow/forbid lists. `check` evaluates them against a catalog."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate constraints against a catalog
    Check {
        /// Declaration files, directories or globs (default: from config)
        paths: Vec<String>,

        /// Catalog file (TOML or JSON)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Report a verdict over every constraint instead of stopping at the first failure
        #[arg(long)]
        legacy: bool,
    },

    /// Validate declarations without a catalog
    Validate {
        /// Declaration files, directories or globs (default: from config)
        paths: Vec<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = Config::load(&std::env::current_dir()?)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::from(config.output.format)
    };

    match cli.command {
        Some(Command::Check {
            paths,
            catalog,
            legacy,
        }) => {
            let check_mode = if legacy { CheckMode::Legacy } else { config.check.mode };
            commands::check(&paths, catalog, check_mode, &config, output_mode)
        },
        Some(Command::Validate { paths }) => commands::validate(&paths, &config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": constrain::VERSION
                    })
                );
            } else {
                println!("constrain v{}", constrain::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": constrain::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("constrain v{}", constrain::VERSION);
                println!("\nRun 'constrain --help' for usage");
                println!("Run 'constrain check --catalog <FILE>' to evaluate constraints");
            }
            Ok(())
        },
    }
}
