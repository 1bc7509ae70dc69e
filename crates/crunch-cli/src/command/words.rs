use std::{path::PathBuf, time::Instant};

use anyhow::bail;
use crunch_words::WordFrequencies;

use crate::{loader, report::Report};

const OUTPUT_FILE: &str = "WordCountResults.txt";

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct WordsArg {
    /// Path to a file of whitespace-separated words
    input: PathBuf,
}

pub(crate) fn run(arg: &WordsArg) -> anyhow::Result<()> {
    let WordsArg { input } = arg;
    let start = Instant::now();

    let contents = loader::read_input(input)?;
    let tokens = loader::split_tokens(&contents);
    if tokens.is_empty() {
        bail!("No valid words found in the file.");
    }

    let frequencies = WordFrequencies::count(tokens);

    let mut lines = frequencies
        .iter()
        .map(|(word, count)| format!("{word}: {count}"))
        .collect::<Vec<_>>();
    // Blank separator between the word list and the elapsed line
    lines.push(String::new());
    Report::new(lines, start.elapsed()).emit(OUTPUT_FILE)
}
