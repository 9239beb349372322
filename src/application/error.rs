use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount in '{line}': {reason}")]
    InvalidAmount { line: String, reason: String },

    #[error("Input closed before the session ended")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
