// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use tally::application::{LedgerSession, ParseErrorPolicy, SessionConfig};
use tally::io::{InputSource, MemoryOutput, ScriptedInput};
use tally::storage::InMemoryBalanceStore;

pub type TestSession = LedgerSession<ScriptedInput, MemoryOutput, InMemoryBalanceStore>;

/// Helper to create a session fed by the given lines
pub fn scripted_session(lines: &[&str]) -> TestSession {
    scripted_session_with_policy(lines, ParseErrorPolicy::Lenient)
}

/// Helper to create a session fed by the given lines, with an explicit policy
pub fn scripted_session_with_policy(lines: &[&str], policy: ParseErrorPolicy) -> TestSession {
    LedgerSession::new(
        ScriptedInput::new(lines.iter().copied()),
        MemoryOutput::new(),
        InMemoryBalanceStore::new(),
        SessionConfig::default().with_policy(policy),
    )
}

/// Output lines after the two-line welcome banner
pub fn lines_after_banner(session: &TestSession) -> Vec<String> {
    session.output().lines().iter().skip(2).cloned().collect()
}

/// Helper to parse a decimal literal
pub fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

/// Input that serves the given lines, then fails every read with a broken pipe
pub struct FailingInput {
    lines: ScriptedInput,
}

impl FailingInput {
    pub fn after(lines: &[&str]) -> Self {
        Self {
            lines: ScriptedInput::new(lines.iter().copied()),
        }
    }
}

impl InputSource for FailingInput {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        match self.lines.read_line().await? {
            Some(line) => Ok(Some(line)),
            None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "input failed")),
        }
    }
}
