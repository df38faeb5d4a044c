// crates/engine/src/lib.rs
use log::{debug, trace};

pub mod aggregate;
pub mod config;
pub mod counts;
pub mod error;
pub mod options;
pub mod predicate;
pub mod stats;

pub use crate::aggregate::count_mod_ops;
pub use crate::counts::ModOps;
pub use crate::predicate::{PrimeFn, Verdict, is_prime_half, is_prime_sqrt};

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::{OutputMode, Strategy};
use crate::stats::{CandidateStats, RangeSpec, RunResult, StrategySummary};

/// Run every configured strategy over the configured range.
///
/// The range is walked once; each candidate is tested by every strategy in
/// turn. Each summary's `mod_ops` equals [`count_mod_ops`] for that
/// strategy's predicate. Per-candidate rows are kept only in
/// [`OutputMode::Full`]; disagreements are collected whenever more than one
/// strategy runs.
///
/// # Errors
///
/// Returns [`EngineError::Config`] when no strategy is selected.
pub fn run(config: &Config) -> Result<RunResult> {
    let strategies = dedup_strategies(&config.strategies)?;
    let full = matches!(config.output_mode, OutputMode::Full);

    debug!(
        "range {}..={} ({} candidates), strategies {:?}",
        config.lo,
        config.hi,
        config.candidate_count(),
        strategies
    );

    let predicates: Vec<PrimeFn> = strategies.iter().map(|s| s.predicate()).collect();
    let mut summaries: Vec<StrategySummary> =
        strategies.iter().copied().map(StrategySummary::new).collect();
    let mut candidates = Vec::new();
    let mut disagreements = Vec::new();
    let mut verdicts = Vec::with_capacity(strategies.len());

    for n in config.lo..=config.hi {
        verdicts.clear();
        verdicts.extend(predicates.iter().map(|predicate| predicate(n)));

        let rows = summaries.iter_mut().zip(&verdicts).zip(&strategies);
        for ((summary, verdict), &strategy) in rows {
            trace!(
                "{strategy}({n}) -> prime={} ops={}",
                verdict.is_prime, verdict.mod_ops
            );
            summary.candidates += 1;
            if verdict.is_prime {
                summary.primes += 1;
            }
            summary.mod_ops += verdict.mod_ops;
            if full {
                candidates.push(CandidateStats {
                    candidate: n,
                    strategy,
                    is_prime: verdict.is_prime,
                    mod_ops: verdict.mod_ops,
                });
            }
        }

        if let Some((first, rest)) = verdicts.split_first()
            && rest.iter().any(|v| v.is_prime != first.is_prime)
        {
            disagreements.push(n);
        }
    }

    for summary in &summaries {
        debug!(
            "{}: {} primes, {} mod ops",
            summary.strategy, summary.primes, summary.mod_ops
        );
    }

    Ok(RunResult {
        range: RangeSpec {
            lo: config.lo,
            hi: config.hi,
        },
        summaries,
        candidates,
        disagreements,
    })
}

fn dedup_strategies(strategies: &[Strategy]) -> Result<Vec<Strategy>> {
    let mut unique = Vec::with_capacity(strategies.len());
    for &s in strategies {
        if !unique.contains(&s) {
            unique.push(s);
        }
    }
    if unique.is_empty() {
        return Err(EngineError::Config(
            "at least one strategy must be selected".to_string(),
        ));
    }
    Ok(unique)
}
