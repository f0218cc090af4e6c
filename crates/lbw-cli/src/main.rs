use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::Result;
use lbw_cli::commands::{self, ScoreOptions};
use lbw_cli::config;
use lbw_instruments::fitness::FitnessBreakdown;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "lbw", about = "Score brain wellness self-report assessments", version)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in assessments
    List,
    /// Print an assessment definition
    Show { id: String },
    /// Score a responses file (JSON object of question id to integer)
    Score {
        id: String,
        responses: PathBuf,
        /// Reject invalid responses instead of scoring them best-effort
        #[arg(long)]
        strict: bool,
        /// Package the result as a record for this user
        #[arg(long)]
        user: Option<Uuid>,
    },
    /// Check category bands and questions of one or all assessments
    Validate { id: Option<String> },
    /// Aggregate saved records (JSON array) into a brain fitness report
    Fitness {
        records: PathBuf,
        /// Previous breakdown, used for areas with no records
        #[arg(long)]
        previous: Option<PathBuf>,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective config
    Show,
    /// Write the default config, keeping nothing from an existing file
    Init,
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    init_logging(cli.log_json || config::log_json_requested(&config_path));

    if matches!(
        cli.command,
        Command::Config {
            command: ConfigCommand::Init
        }
    ) {
        config::init_config(&config_path)?;
        return Ok(());
    }

    let config = config::load_config(&config_path)?;
    tracing::debug!(path = %config_path.display(), "config loaded");

    match cli.command {
        Command::List => emit(&commands::list(), config.pretty),
        Command::Show { id } => emit(commands::show(&id)?, config.pretty),
        Command::Score {
            id,
            responses,
            strict,
            user,
        } => {
            let options = ScoreOptions {
                strict: strict || config.strict_validation,
                user_id: user.or(config.default_user_id),
            };
            let output = commands::score(&id, &read(&responses)?, options)?;
            emit(&output, config.pretty)
        }
        Command::Validate { id } => {
            let reports = commands::validate(id.as_deref())?;
            for report in &reports {
                for problem in &report.errors {
                    tracing::warn!(assessment_id = %report.id, "{problem}");
                }
            }
            emit(&reports, config.pretty)
        }
        Command::Fitness { records, previous } => {
            let previous: FitnessBreakdown = match previous {
                Some(path) => serde_json::from_str(&read(&path)?)?,
                None => FitnessBreakdown::default(),
            };
            emit(&commands::fitness(&read(&records)?, &previous)?, config.pretty)
        }
        Command::Config { command } => match command {
            ConfigCommand::Show => emit(&config, true),
            // Written before the existing file is loaded.
            ConfigCommand::Init => Ok(()),
        },
    }
}
