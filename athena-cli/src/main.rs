#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use anyhow::Result;
use athena_common::config::Config;
use athena_common::error::Error;
use athena_common::logging::init_logging;
use athena_common::validation::Validate;
use athena_core::{AssistantSettings, FileStore, SessionTicker, StudyAssistant};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

mod commands;
mod repl;
mod terminal;

use terminal::TerminalPresenter;

/// Athena - a rule-based study assistant for the terminal.
#[derive(Parser, Debug)]
#[command(name = "athena")]
#[command(version)]
#[command(about = "Rule-based study assistant with session tracking.", long_about = None)]
struct Cli {
    /// Config file (default: ~/.athena/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at the configured level instead of warnings only
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable spoken responses
    #[arg(long, global = true)]
    mute: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive study chat
    Chat,

    /// Answer a single query and exit
    Ask {
        /// The question or topic
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env_overrides();
    config.validate().map_err(Error::from)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    // the terminal is the UI, so routine logs stay quiet unless asked for
    let level = if cli.verbose {
        config.observability.log_level.as_str()
    } else {
        "warn"
    };
    init_logging(level, &config.observability.log_format);

    let assistant_config = &config.assistant;
    let mut settings = AssistantSettings::from(assistant_config);
    if cli.mute {
        settings.voice_responses = false;
    }

    let presenter = TerminalPresenter::new(
        std::io::stdout(),
        assistant_config.speech_command.clone(),
        assistant_config.export_directory(),
    );
    let store = FileStore::new(assistant_config.preferences_file());
    info!(preferences = %store.path().display(), "Using preference store");

    let mut assistant = StudyAssistant::new(presenter, Box::new(store), settings);

    match cli.command {
        Commands::Chat => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let ticker = SessionTicker::from_secs(assistant_config.tick_interval_secs);
            repl::run_chat(&mut assistant, stdin, ticker).await?;
        }
        Commands::Ask { text } => {
            let query = text.join(" ");
            if assistant.handle_user_query(&query).is_none() {
                return Err(Error::InvalidInput("the query is empty".into()).into());
            }
        }
    }

    Ok(())
}
