// src/args.rs
use crate::options::{OutputFormat, OutputMode, Strategy};
use crate::parsers::RangeArg;
use clap::{ArgAction, Args as ClapArgs, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "count_mod_ops",
    version,
    about = "Compare half-range and sqrt-range trial division by counting modulus operations"
)]
pub struct Args {
    #[command(flatten)]
    pub search: SearchOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Candidate range: LO..HI (inclusive), LO..=HI, or a single N
    #[arg(allow_hyphen_values = true, value_name = "RANGE")]
    pub range: RangeArg,
}

#[derive(ClapArgs, Debug)]
pub struct SearchOptions {
    /// Divisor-search strategies to run (repeatable or comma-separated)
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [Strategy::Half, Strategy::Sqrt],
        help_heading = "Search"
    )]
    pub strategy: Vec<Strategy>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Output mode (full, total-only)
    #[arg(long, value_enum, default_value = "total-only", help_heading = "Output")]
    pub output_mode: OutputMode,

    /// Append a TOTAL row to CSV/TSV candidate listings
    #[arg(long, help_heading = "Output")]
    pub total_row: bool,
}
