//! Mimir Control - CLI for the Mimir Q&A bot
//!
//! Runs the interactive chat loop by default; `ask` and `stats` cover
//! one-shot use. Logs go to stderr so the chat transcript on stdout
//! stays clean.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use mimir_common::BotConfig;
use mimirctl::{commands, errors, output};

// Version is embedded at build time
const VERSION: &str = env!("MIMIR_VERSION");

#[derive(Parser)]
#[command(name = "mimirctl")]
#[command(about = "Mimir - a teachable command-line Q&A bot", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Knowledge base file (overrides the config file)
    #[arg(long)]
    kb: Option<PathBuf>,

    /// Config file to use instead of the default lookup
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session (the default)
    Chat,

    /// Ask a single question and exit
    Ask {
        /// Question text
        question: String,
    },

    /// Show knowledge base statistics
    Stats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => process::exit(errors::EXIT_SUCCESS),
        Err(error) => {
            output::print_error(&error);
            process::exit(errors::exit_code_for(&error));
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = BotConfig::load_or_default(cli.config.as_deref())?;
    let kb_path = cli.kb.unwrap_or_else(|| config.knowledge_base.clone());
    let matcher = config.matcher_config();

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => commands::chat(&kb_path, matcher),
        Commands::Ask { question } => commands::ask(&kb_path, matcher, &question),
        Commands::Stats => commands::stats(&kb_path),
    }
}
