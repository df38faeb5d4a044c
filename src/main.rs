use clap::Parser;
use count_mod_ops::args::Args;
use count_mod_ops::config::Config;
use count_mod_ops::error::Result;
use count_mod_ops::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Warning: {e}");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    log::debug!("{config:?}");
    let result = count_mod_ops_engine::run(&config)?;
    presentation::print_results(&result, &config)
}
