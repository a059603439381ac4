mod console;
mod logging;
mod telegram;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use soulnote_application::JournalService;
use soulnote_core::entry::{EntryRepository, UserId};
use soulnote_infrastructure::config_service::resolve_data_dir;
use soulnote_infrastructure::{ConfigService, FileEntryRepository};

use logging::LogOutput;

#[derive(Parser)]
#[command(name = "soulnote")]
#[command(about = "A button-driven mood and gratitude journal", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/soulnote/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the journal files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Force debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Run the Telegram bot (default)
    Run,
    /// Chat with the journal in the terminal
    Console {
        /// User id the console session writes entries as
        #[arg(long, default_value_t = 1)]
        user_id: u64,
        /// Name used in the greeting
        #[arg(long, default_value = "friend")]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);

    let config = ConfigService::new(cli.config)
        .and_then(|service| service.load_with_env())
        .context("Failed to load configuration")?;

    let output = match command {
        Commands::Run => LogOutput::Stderr,
        Commands::Console { .. } => LogOutput::FileOnly,
    };
    let _log_guard = logging::init(&config.logging, cli.debug, output)?;

    let data_dir = resolve_data_dir(&config, cli.data_dir).context("Failed to resolve data directory")?;
    tracing::info!(data_dir = %data_dir.display(), "Starting SoulNote");

    let repository: Arc<dyn EntryRepository> = Arc::new(FileEntryRepository::new(&data_dir));
    let service = Arc::new(JournalService::new(repository, &config));

    match command {
        Commands::Run => telegram::run(service, &config.telegram).await?,
        Commands::Console { user_id, name } => console::run(service, UserId(user_id), name).await?,
    }

    tracing::info!("SoulNote stopped");
    Ok(())
}
