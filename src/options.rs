use clap::ValueEnum;
use count_mod_ops_engine::options as engine_options;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum Strategy {
    /// Odd divisors up to n/2
    Half,
    /// Odd divisors strictly below sqrt(n)
    Sqrt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl,
    Yaml,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
pub enum OutputMode {
    /// One row per candidate and strategy
    Full,
    /// Per-strategy totals only
    #[default]
    TotalOnly,
}

impl From<Strategy> for engine_options::Strategy {
    fn from(value: Strategy) -> Self {
        match value {
            Strategy::Half => Self::Half,
            Strategy::Sqrt => Self::Sqrt,
        }
    }
}

impl From<OutputFormat> for engine_options::OutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Table => Self::Table,
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Tsv => Self::Tsv,
            OutputFormat::Json => Self::Json,
            OutputFormat::Jsonl => Self::Jsonl,
            OutputFormat::Yaml => Self::Yaml,
        }
    }
}

impl From<OutputMode> for engine_options::OutputMode {
    fn from(value: OutputMode) -> Self {
        match value {
            OutputMode::Full => Self::Full,
            OutputMode::TotalOnly => Self::TotalOnly,
        }
    }
}
