use std::{path::PathBuf, time::Instant};

use anyhow::bail;
use crunch_radix::BigInt;

use crate::{loader, report::Report};

const OUTPUT_FILE: &str = "ConvertionResults.txt";

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConvertArg {
    /// Path to a file containing one integer per line
    input: PathBuf,
}

pub(crate) fn run(arg: &ConvertArg) -> anyhow::Result<()> {
    let ConvertArg { input } = arg;
    let start = Instant::now();

    let contents = loader::read_input(input)?;
    let parsed = loader::parse_lines::<BigInt>(&contents);
    loader::warn_skipped(&parsed.skipped);

    if parsed.values.is_empty() {
        bail!("No valid numbers found in the file.");
    }

    let lines = parsed
        .values
        .iter()
        .map(|number| {
            format!(
                "Number: {number}, Binary: {}, Hexadecimal: {}",
                number.to_binary(),
                number.to_hexadecimal(),
            )
        })
        .collect();
    Report::new(lines, start.elapsed()).emit(OUTPUT_FILE)
}
