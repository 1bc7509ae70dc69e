use std::{path::PathBuf, time::Instant};

use anyhow::bail;
use crunch_stats::descriptive::{DescriptiveStats, Mode};

use crate::{loader, report::Report};

const OUTPUT_FILE: &str = "StatisticsResults.txt";

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct StatsArg {
    /// Path to a file containing one number per line
    input: PathBuf,
}

pub(crate) fn run(arg: &StatsArg) -> anyhow::Result<()> {
    let StatsArg { input } = arg;
    let start = Instant::now();

    let contents = loader::read_input(input)?;
    let parsed = loader::parse_lines::<f64>(&contents);
    loader::warn_skipped(&parsed.skipped);

    let Some(stats) = DescriptiveStats::new(parsed.values) else {
        bail!("No valid numbers found in the file.");
    };

    let lines = vec![
        format!("Mean: {}", stats.mean),
        format!("Median: {}", stats.median),
        format!("Mode: {}", format_mode(&stats.mode)),
        format!("Variance: {}", stats.variance),
        format!("Standard Deviation: {}", stats.std_dev),
    ];
    Report::new(lines, start.elapsed()).emit(OUTPUT_FILE)
}

fn format_mode(mode: &Mode) -> String {
    match mode {
        Mode::Single(value) => value.to_string(),
        Mode::Multiple(values) => {
            let list = values
                .iter()
                .map(f64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{list}]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mode_single() {
        assert_eq!(format_mode(&Mode::Single(5.0)), "5");
    }

    #[test]
    fn test_format_mode_multiple() {
        assert_eq!(format_mode(&Mode::Multiple(vec![1.0, 2.5])), "[1, 2.5]");
    }
}
