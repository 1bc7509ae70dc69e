use std::process;

use anyhow::Context as _;
use clap::{Parser, Subcommand, error::ErrorKind};

use self::{convert::ConvertArg, generate::GenerateArg, stats::StatsArg, words::WordsArg};

mod convert;
mod generate;
mod stats;
mod words;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which utility to run
    #[command(subcommand)]
    utility: Utility,
}

#[derive(Debug, Clone, Subcommand)]
enum Utility {
    /// Compute descriptive statistics over a file of numbers
    Stats(#[clap(flatten)] StatsArg),
    /// Convert each integer in a file to binary and hexadecimal
    Convert(#[clap(flatten)] ConvertArg),
    /// Count case-insensitive word frequencies in a file
    Words(#[clap(flatten)] WordsArg),
    /// Generate a file of random test data
    Generate(#[clap(flatten)] GenerateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = match CommandArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        // Argument errors exit 1, not clap's default of 2
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    ctrlc::set_handler(|| {
        eprintln!("Execution interrupted by user.");
        process::exit(1);
    })
    .context("Failed to install interrupt handler")?;

    match args.utility {
        Utility::Stats(arg) => stats::run(&arg)?,
        Utility::Convert(arg) => convert::run(&arg)?,
        Utility::Words(arg) => words::run(&arg)?,
        Utility::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}
