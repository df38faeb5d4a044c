use serde::{Deserialize, Serialize};

use crate::counts::ModOps;
use crate::options::Strategy;

/// Verdict of one strategy on one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateStats {
    pub candidate: i32,
    pub strategy: Strategy,
    pub is_prime: bool,
    pub mod_ops: ModOps,
}

/// Totals for one strategy over the whole range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: Strategy,
    pub candidates: u64,
    pub primes: u64,
    pub mod_ops: ModOps,
}

impl StrategySummary {
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            candidates: 0,
            primes: 0,
            mod_ops: ModOps::zero(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub lo: i32,
    pub hi: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub range: RangeSpec,
    pub summaries: Vec<StrategySummary>,
    /// Per-candidate rows; empty unless the run was in full mode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<CandidateStats>,
    /// Candidates the strategies classified differently.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disagreements: Vec<i32>,
}

impl RunResult {
    #[must_use]
    pub fn summary(&self, strategy: Strategy) -> Option<&StrategySummary> {
        self.summaries.iter().find(|s| s.strategy == strategy)
    }

    #[must_use]
    pub fn total_mod_ops(&self) -> ModOps {
        self.summaries.iter().map(|s| s.mod_ops).sum()
    }
}
