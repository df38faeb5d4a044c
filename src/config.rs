// src/config.rs
use crate::args::Args;
pub use count_mod_ops_engine::config::{Config, ConfigBuilder};
use count_mod_ops_engine::error::EngineError;
use count_mod_ops_engine::options as engine_options;

impl TryFrom<Args> for Config {
    type Error = EngineError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let strategies: Vec<engine_options::Strategy> = args
            .search
            .strategy
            .into_iter()
            .map(engine_options::Strategy::from)
            .collect();
        let format: engine_options::OutputFormat = args.output.format.into();
        let output_mode: engine_options::OutputMode = args.output.output_mode.into();

        let config = ConfigBuilder::default()
            .lo(args.range.lo)
            .hi(args.range.hi)
            .strategies(strategies)
            .format(format)
            .output_mode(output_mode)
            .total_row(args.output.total_row)
            .build()?;
        Ok(config)
    }
}
