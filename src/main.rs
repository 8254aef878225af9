//! commit-suggest - CLI entry point.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commit_suggest::config::{Config, load_dotenv};
use commit_suggest::git::{SystemGitExecutor, check_git_installed, discover_workdir};
use commit_suggest::{HttpCompletionClient, Outcome, run};

/// Suggest a commit message for the currently staged changes.
#[derive(Parser, Debug)]
#[command(name = "commit-suggest")]
#[command(about = "Suggest a commit message for the currently staged changes")]
#[command(version)]
struct Cli {
    /// Chat-completion endpoint URL (overrides COMMIT_SUGGEST_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Model identifier (overrides COMMIT_SUGGEST_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Set up logging/tracing. Logs go to stderr so stdout carries only the message.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_new("commit_suggest=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("commit_suggest=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // Step 1: Load configuration (.env first, real environment wins)
    load_dotenv(Path::new(".env")).context("Failed to read .env")?;
    let config = Config::from_env()
        .context("An API key is required")?
        .with_overrides(cli.endpoint, cli.model);

    // Step 2: Check prerequisites
    check_git_installed().await.context("git is required")?;
    let workdir = discover_workdir(Path::new("."))
        .context("Run commit-suggest from within a git repository")?;

    // Step 3: Collect the staged diff and generate a message
    let git = SystemGitExecutor::new(workdir);
    let client = HttpCompletionClient::new(config);

    match run(&git, &client).await {
        Outcome::NothingToCommit => println!("No changes to commit."),
        Outcome::Message(message) => println!("{}", message),
    }

    Ok(())
}
