/// What to do when `add` or `remove` carries an amount that cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseErrorPolicy {
    /// Report the line and keep the session running.
    #[default]
    Lenient,
    /// End the session with an error.
    Strict,
}

/// Settings for a ledger session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub prompt: String,
    pub parse_error_policy: ParseErrorPolicy,
}

impl SessionConfig {
    pub const DEFAULT_PROMPT: &'static str = "> ";

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_policy(mut self, policy: ParseErrorPolicy) -> Self {
        self.parse_error_policy = policy;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: Self::DEFAULT_PROMPT.to_string(),
            parse_error_policy: ParseErrorPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.parse_error_policy, ParseErrorPolicy::Lenient);
    }

    #[test]
    fn test_builders() {
        let config = SessionConfig::default()
            .with_prompt("tally> ")
            .with_policy(ParseErrorPolicy::Strict);
        assert_eq!(config.prompt, "tally> ");
        assert_eq!(config.parse_error_policy, ParseErrorPolicy::Strict);
    }
}
