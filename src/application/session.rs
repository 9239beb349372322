use crate::domain::{
    parse_command, step, unrecognised_message, Balance, CommandError, SessionState,
};
use crate::io::{InputSource, OutputSink};
use crate::storage::BalanceStore;

use super::{AppError, ParseErrorPolicy, SessionConfig};

pub const WELCOME_BANNER: [&str; 2] = [
    "Welcome to tally, an interactive ledger.",
    "Commands: add <amount>, remove <amount>, quit",
];

/// Interactive ledger session.
/// This is the command loop: one line is read, handled and printed before the next read.
pub struct LedgerSession<I, O, S> {
    input: I,
    output: O,
    store: S,
    config: SessionConfig,
    state: SessionState,
}

impl<I, O, S> LedgerSession<I, O, S>
where
    I: InputSource,
    O: OutputSink,
    S: BalanceStore,
{
    /// Create a session with explicit input, output and balance storage.
    pub fn new(input: I, output: O, store: S, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            store,
            config,
            state: SessionState::Running,
        }
    }

    pub fn balance(&self) -> Balance {
        self.store.load()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Print the banner and handle lines until `quit`.
    /// Returns the balance the session ended with.
    pub async fn run(&mut self) -> Result<Balance, AppError> {
        tracing::info!(balance = %self.balance(), "ledger session started");

        for line in WELCOME_BANNER {
            self.output.write_line(line).await?;
        }

        while self.state.is_running() {
            self.output.prompt(&self.config.prompt).await?;
            let line = self
                .input
                .read_line()
                .await?
                .ok_or(AppError::InputClosed)?;
            self.handle_line(&line).await?;
        }

        let balance = self.balance();
        tracing::info!(balance = %balance, "ledger session stopped");
        Ok(balance)
    }

    /// Handle exactly one input line.
    pub async fn handle_line(&mut self, line: &str) -> Result<SessionState, AppError> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => return self.reject_amount(err).await,
        };
        tracing::debug!(command = command.name(), line, "handling command");

        let outcome = step(self.store.load(), command);

        self.store.save(outcome.balance);
        self.state = outcome.state;
        if let Some(message) = outcome.message {
            self.output.write_line(&message).await?;
        }

        Ok(self.state)
    }

    async fn reject_amount(&mut self, err: CommandError) -> Result<SessionState, AppError> {
        match self.config.parse_error_policy {
            ParseErrorPolicy::Strict => Err(AppError::InvalidAmount {
                line: err.line().to_string(),
                reason: match &err {
                    CommandError::InvalidAmount { source, .. } => source.to_string(),
                },
            }),
            ParseErrorPolicy::Lenient => {
                tracing::warn!(error = %err, "treating invalid amount as unrecognised input");
                self.output
                    .write_line(&unrecognised_message(err.line()))
                    .await?;
                Ok(self.state)
            }
        }
    }
}

impl<I, O, S> LedgerSession<I, O, S> {
    /// Take the session apart, e.g. to inspect captured output.
    pub fn into_parts(self) -> (I, O, S) {
        (self.input, self.output, self.store)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::*;
    use crate::io::{MemoryOutput, ScriptedInput};
    use crate::storage::InMemoryBalanceStore;

    type TestSession = LedgerSession<ScriptedInput, MemoryOutput, InMemoryBalanceStore>;

    fn session(policy: ParseErrorPolicy) -> TestSession {
        LedgerSession::new(
            ScriptedInput::default(),
            MemoryOutput::new(),
            InMemoryBalanceStore::new(),
            SessionConfig::default().with_policy(policy),
        )
    }

    #[tokio::test]
    async fn test_handle_line_updates_store() {
        let mut session = session(ParseErrorPolicy::Lenient);

        let state = session.handle_line("add 2.50").await.unwrap();

        assert_eq!(state, SessionState::Running);
        assert_eq!(
            session.balance(),
            Balance::new(BigDecimal::from_str("2.5").unwrap())
        );
        assert_eq!(
            session.output().lines(),
            ["added 2.5, balance is now 2.5".to_string()]
        );
    }

    #[tokio::test]
    async fn test_quit_changes_state_silently() {
        let mut session = session(ParseErrorPolicy::Lenient);

        let state = session.handle_line("quit").await.unwrap();

        assert_eq!(state, SessionState::Stopped);
        assert!(session.output().lines().is_empty());
    }

    #[tokio::test]
    async fn test_strict_rejects_digit_separators() {
        let mut session = session(ParseErrorPolicy::Strict);

        let err = session.handle_line("add 1_000").await.unwrap_err();

        assert!(matches!(err, AppError::InvalidAmount { ref line, .. } if line == "add 1_000"));
        assert_eq!(session.balance(), Balance::zero());
        assert!(session.output().lines().is_empty());
    }
}
