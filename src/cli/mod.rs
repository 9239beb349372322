use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::application::{greet, LedgerSession, ParseErrorPolicy, SessionConfig};
use crate::io::{StdinSource, StdoutSink};
use crate::storage::InMemoryBalanceStore;

/// Tally - an interactive ledger for the command line
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "An interactive running-balance ledger, plus a greeter")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Abort the ledger session when an amount cannot be used
    #[arg(long, global = true)]
    pub strict: bool,

    /// Prompt printed before each ledger read
    #[arg(long, default_value = SessionConfig::DEFAULT_PROMPT, global = true)]
    pub prompt: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive ledger (default)
    Ledger,

    /// Ask for a name and print a greeting
    Greet,
}

impl Cli {
    /// Session settings derived from the flags.
    pub fn session_config(&self) -> SessionConfig {
        let policy = if self.strict {
            ParseErrorPolicy::Strict
        } else {
            ParseErrorPolicy::Lenient
        };

        SessionConfig::default()
            .with_prompt(self.prompt.clone())
            .with_policy(policy)
    }

    pub async fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        match self.command.unwrap_or(Commands::Ledger) {
            Commands::Ledger => {
                let mut session = LedgerSession::new(
                    StdinSource::new(),
                    StdoutSink::new(),
                    InMemoryBalanceStore::new(),
                    self.session_config(),
                );
                session.run().await.context("Ledger session failed")?;
            }

            Commands::Greet => {
                let mut input = StdinSource::new();
                let mut output = StdoutSink::new();
                greet(&mut input, &mut output)
                    .await
                    .context("Greeter failed")?;
            }
        }

        Ok(())
    }
}

/// Log to stderr so stdout carries only program output.
/// `RUST_LOG` wins over the verbosity flag when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Keep any subscriber that is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
