use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrilog::cli;
use nutrilog_calendar::SystemClock;
use nutrilog_meal::MealType;

/// nutrilog - meal logging and calendar helpers
#[derive(Parser)]
#[command(name = "nutrilog")]
#[command(about = "Validate meal entries and render calendar dates", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON meal payload
    Validate {
        /// JSON file to read (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Preselected meal type, overrides the payload
        #[arg(long = "type")]
        meal_type: Option<MealType>,
    },
    /// Print the week containing a date
    Week {
        /// ISO date (today when omitted)
        #[arg(long)]
        date: Option<String>,
    },
    /// Format a date for display
    Format {
        date: String,

        /// Display pattern (overrides config file)
        #[arg(long)]
        pattern: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = nutrilog::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize logging before any command runs
    nutrilog::observability::init_observability(&config.observability)?;

    match cli.command {
        Commands::Validate { input, meal_type } => {
            // Field errors are printed, not returned as an error
            if cli::meal::validate(input.as_deref(), meal_type)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Week { date } => {
            println!("{}", cli::calendar::week(date.as_deref(), &SystemClock)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Format { date, pattern } => {
            // CLI pattern wins over the configured one
            let pattern = pattern.unwrap_or(config.calendar.date_pattern);
            println!("{}", cli::calendar::format(&date, &pattern));
            Ok(ExitCode::SUCCESS)
        }
    }
}
