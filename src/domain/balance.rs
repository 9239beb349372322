use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

/// Amounts and balances are arbitrary-precision decimals.
pub type Amount = BigDecimal;

/// Running balance of a ledger session.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Balance(BigDecimal);

impl Balance {
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn credit(&self, amount: &Amount) -> Self {
        Self(&self.0 + amount)
    }

    pub fn debit(&self, amount: &Amount) -> Self {
        Self(&self.0 - amount)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(&self.0))
    }
}

/// Format a decimal in plain notation without trailing zeros.
/// Example: 15.50 -> "15.5", 0.00 -> "0", 1000 -> "1000"
pub fn format_amount(amount: &Amount) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    let normalized = amount.normalized();
    if normalized.fractional_digit_count() < 0 {
        normalized.with_scale(0).to_plain_string()
    } else {
        normalized.to_plain_string()
    }
}

/// Parse a single token into an amount.
/// Accepts an optional sign and digits with an optional fractional part:
/// "10", "-3", "5.5", ".5", "5.". Exponents and digit separators are rejected.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let invalid = || ParseAmountError::Invalid(input.to_string());

    if !is_decimal_literal(input) {
        return Err(invalid());
    }
    BigDecimal::from_str(input).map_err(|_| invalid())
}

fn is_decimal_literal(input: &str) -> bool {
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Invalid(String),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Invalid(token) => write!(f, "invalid amount '{}'", token),
        }
    }
}

impl std::error::Error for ParseAmountError {}
