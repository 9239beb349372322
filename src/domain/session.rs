use super::{format_amount, Balance, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running)
    }
}

/// Outcome of applying one command to a balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: SessionState,
    pub balance: Balance,
    /// Line to print, if the command produces one.
    pub message: Option<String>,
}

/// Apply a command to the current balance.
/// Pure: the caller is responsible for storing the new balance and printing the message.
pub fn step(balance: Balance, command: Command) -> Step {
    match command {
        Command::Quit => Step {
            state: SessionState::Stopped,
            balance,
            message: None,
        },
        Command::Add(amount) => {
            let balance = balance.credit(&amount);
            let message = format!(
                "added {}, balance is now {}",
                format_amount(&amount),
                balance
            );
            Step {
                state: SessionState::Running,
                balance,
                message: Some(message),
            }
        }
        Command::Remove(amount) => {
            let balance = balance.debit(&amount);
            let message = format!(
                "removed {}, balance is now {}",
                format_amount(&amount),
                balance
            );
            Step {
                state: SessionState::Running,
                balance,
                message: Some(message),
            }
        }
        Command::Unrecognized(line) => Step {
            state: SessionState::Running,
            balance,
            message: Some(unrecognised_message(&line)),
        },
    }
}

pub fn unrecognised_message(line: &str) -> String {
    format!("unrecognised input: {}", line)
}
