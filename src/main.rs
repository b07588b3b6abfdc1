//! # DocuBuddy — Internal Documentation Assistant
//!
//! Answers employee questions from a `Title:`-sectioned policy document via
//! an OpenAI-compatible completion API.
//!
//! Usage:
//!   docubuddy                          # Start the HTTP gateway (default)
//!   docubuddy serve --port 8080        # Custom port
//!   docubuddy ask "refund policy?"     # One-shot answer on stdout

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docubuddy_assistant::{Assistant, Reply};
use docubuddy_core::DocuBuddyConfig;
use docubuddy_core::error::DocuBuddyError;
use docubuddy_gateway::routes::{EMPTY_QUESTION_ANSWER, MISSING_DOC_ANSWER, NO_MATCH_ANSWER};

#[derive(Parser)]
#[command(
    name = "docubuddy",
    version,
    about = "🤖 DocuBuddy — answers employee questions from internal documentation"
)]
struct Cli {
    /// Path to config file (default: ~/.docubuddy/config.toml or $DOCUBUDDY_CONFIG)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP gateway (default)
    Serve {
        /// Override the configured gateway port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Answer a single question on stdout and exit
    Ask { question: String },
}

fn load_config(cli_path: Option<&str>) -> Result<DocuBuddyConfig> {
    let path = cli_path
        .map(String::from)
        .or_else(|| std::env::var("DOCUBUDDY_CONFIG").ok());
    let config = match path {
        Some(p) => {
            let expanded = shellexpand::tilde(&p).to_string();
            DocuBuddyConfig::load_from(std::path::Path::new(&expanded))?
        }
        None => DocuBuddyConfig::load()?,
    };
    Ok(config)
}

/// Boundary mapping for the one-shot `ask` command — same texts as `/ask`.
async fn answer_once(config: DocuBuddyConfig, question: &str) -> String {
    let question = question.trim();
    if question.is_empty() {
        return EMPTY_QUESTION_ANSWER.to_string();
    }

    let provider = match docubuddy_providers::create_provider(&config) {
        Ok(p) => p,
        Err(e) => return format!("Error: {e}"),
    };
    let assistant = Assistant::new(config, provider);

    match assistant.answer(question).await {
        Ok(Reply::Answer(text)) => text,
        Ok(Reply::NoMatch) => NO_MATCH_ANSWER.to_string(),
        Err(DocuBuddyError::DocumentMissing(_)) => MISSING_DOC_ANSWER.to_string(),
        Err(e) => format!("Error: {e}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "info,docubuddy=debug,docubuddy_assistant=debug,docubuddy_retrieval=debug,tower_http=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Ask { question }) => {
            println!("{}", answer_once(config, &question).await);
            Ok(())
        }
        Some(Command::Serve { port }) => {
            if let Some(port) = port {
                config.gateway.port = port;
            }
            docubuddy_gateway::start(config).await
        }
        None => docubuddy_gateway::start(config).await,
    }
}
