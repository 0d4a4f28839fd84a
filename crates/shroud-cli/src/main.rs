mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use log::error;
use shroud_core::ShroudError;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, ShroudError>;

fn main() -> ExitCode {
    env_logger::init();

    match run(CliArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> CliResult<()> {
    let options = args.codec_options()?;

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Capacity(capacity) => capacity.run(options),
    }
}
