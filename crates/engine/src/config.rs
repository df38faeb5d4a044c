use crate::options::{OutputFormat, OutputMode, Strategy};
use derive_builder::Builder;

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Inclusive lower bound of the candidate range.
    #[builder(default = "1")]
    pub lo: i32,
    /// Inclusive upper bound; `lo > hi` is an empty range.
    #[builder(default = "100")]
    pub hi: i32,
    #[builder(default = "Strategy::ALL.to_vec()")]
    pub strategies: Vec<Strategy>,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_mode: OutputMode,
    #[builder(default)]
    pub total_row: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lo: 1,
            hi: 100,
            strategies: Strategy::ALL.to_vec(),
            format: OutputFormat::Table,
            output_mode: OutputMode::default(),
            total_row: false,
        }
    }
}

impl Config {
    /// Number of candidates in the range, zero when it is empty.
    #[must_use]
    pub fn candidate_count(&self) -> u64 {
        if self.lo > self.hi {
            0
        } else {
            (i64::from(self.hi) - i64::from(self.lo)).unsigned_abs() + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        assert_eq!(built, Config::default());
    }

    #[test]
    fn test_candidate_count() {
        let config = ConfigBuilder::default().lo(-5).hi(5).build().unwrap();
        assert_eq!(config.candidate_count(), 11);

        let empty = ConfigBuilder::default().lo(10).hi(5).build().unwrap();
        assert_eq!(empty.candidate_count(), 0);

        let full = ConfigBuilder::default().lo(i32::MIN).hi(i32::MAX).build().unwrap();
        assert_eq!(full.candidate_count(), 1u64 << 32);
    }
}
