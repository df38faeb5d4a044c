use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::predicate::{PrimeFn, is_prime_half, is_prime_sqrt};

/// Divisor-search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Odd divisors up to `n / 2`
    Half,
    /// Odd divisors strictly below `sqrt(n)`
    Sqrt,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Self::Half, Self::Sqrt];

    #[must_use]
    pub const fn predicate(self) -> PrimeFn {
        match self {
            Self::Half => is_prime_half,
            Self::Sqrt => is_prime_sqrt,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Half => "half",
            Self::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half" => Ok(Self::Half),
            "sqrt" => Ok(Self::Sqrt),
            other => Err(format!("Unknown strategy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl,
    Yaml,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    /// One row per candidate and strategy, plus totals
    Full,
    /// Per-strategy totals only
    #[default]
    TotalOnly,
}
