use std::fmt;

use super::{parse_amount, Amount, ParseAmountError};

/// One line of ledger input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Add(Amount),
    Remove(Amount),
    /// Anything that is not one of the commands above; holds the original line.
    Unrecognized(String),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Add(_) => "add",
            Command::Remove(_) => "remove",
            Command::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Parse one input line into a command.
///
/// The line is split on whitespace. `quit` ignores trailing tokens; `add` and
/// `remove` need a second token and ignore anything after it. A missing amount
/// makes the line unrecognized, while an amount that is present but not a
/// decimal is an error so the caller can decide how strict to be.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut tokens = line.split_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some("quit"), _) => Ok(Command::Quit),
        (Some("add"), Some(amount)) => parse_amount(amount)
            .map(Command::Add)
            .map_err(|source| CommandError::invalid_amount(line, source)),
        (Some("remove"), Some(amount)) => parse_amount(amount)
            .map(Command::Remove)
            .map_err(|source| CommandError::invalid_amount(line, source)),
        _ => Ok(Command::Unrecognized(line.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    InvalidAmount {
        line: String,
        source: ParseAmountError,
    },
}

impl CommandError {
    fn invalid_amount(line: &str, source: ParseAmountError) -> Self {
        CommandError::InvalidAmount {
            line: line.to_string(),
            source,
        }
    }

    /// The raw line that failed to parse.
    pub fn line(&self) -> &str {
        match self {
            CommandError::InvalidAmount { line, .. } => line,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidAmount { line, source } => {
                write!(f, "{} in '{}'", source, line)
            }
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidAmount { source, .. } => Some(source),
        }
    }
}
