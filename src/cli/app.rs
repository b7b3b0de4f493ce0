//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::workspace::Workspace;
use super::{animal, appointment, shelter};
use crate::domain::CalendarDate;
use crate::logging;
use crate::storage::{Config, Session};

#[derive(Parser)]
#[command(name = "rescue")]
#[command(author, version, about = "Keep records for animal rescues: shelters, adoptions and vet visits")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Record file to read and write
    #[arg(long, short = 'F', global = true, env = "RESCUE_FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Date to compute ages and days in rescue against (M/D/YYYY)
    #[arg(long, global = true, env = "RESCUE_TODAY")]
    pub today: Option<CalendarDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty record file
    Init {
        /// Path to create (defaults to --file or the configured default)
        path: Option<PathBuf>,
    },

    /// Manage shelters
    #[command(subcommand)]
    Shelter(shelter::ShelterCommands),

    /// Manage animals in a shelter
    #[command(subcommand)]
    Animal(animal::AnimalCommands),

    /// Manage a shelter's vet queue
    #[command(subcommand)]
    Appointment(appointment::AppointmentCommands),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load()?;
    let output = Output::new(config.format(cli.format));

    match cli.command {
        Commands::Init { path } => {
            let path = config.record_file(path.or(cli.file))?;
            if path.exists() {
                bail!("Record file already exists: {}", path.display());
            }

            tracing::debug!("Creating record file at {}", path.display());
            Session::new().save(&path)?;
            output.success(&format!("Created record file {}", path.display()));
        }

        Commands::Shelter(cmd) => {
            let workspace = Workspace::new(config.record_file(cli.file)?, config, cli.today);
            shelter::run(cmd, &workspace, &output)?
        }
        Commands::Animal(cmd) => {
            let workspace = Workspace::new(config.record_file(cli.file)?, config, cli.today);
            animal::run(cmd, &workspace, &output)?
        }
        Commands::Appointment(cmd) => {
            let workspace = Workspace::new(config.record_file(cli.file)?, config, cli.today);
            appointment::run(cmd, &workspace, &output)?
        }
    }

    Ok(())
}
