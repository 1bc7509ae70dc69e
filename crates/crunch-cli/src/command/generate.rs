use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;

/// Fixed vocabulary for word-list generation.
const WORD_LIST: &[&str] = &["apple", "banana", "cherry", "date", "hello", "word"];

/// Symmetric value range for generated numeric data.
const INTEGER_RANGE: i64 = 1000;
const FLOAT_RANGE: f64 = 1000.0;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum DataKind {
    #[default]
    Words,
    Integers,
    Floats,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// What kind of test data to generate (words, integers, floats)
    #[arg(long, default_value = "words")]
    kind: DataKind,
    /// Number of items to generate
    #[arg(long, default_value_t = 1000)]
    count: usize,
    /// Words per line (word data only; numbers are written one per line)
    #[arg(long, default_value_t = 10)]
    per_line: usize,
    /// Seed for reproducible output; omit for an OS-seeded generator
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path
    #[arg(long, default_value = "fileWithData.txt")]
    output: PathBuf,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        kind,
        count,
        per_line,
        seed,
        output,
    } = arg;

    // Locally scoped generator; a fixed seed reproduces the exact file
    let mut rng = match seed {
        Some(seed) => Pcg32::seed_from_u64(*seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };

    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    match kind {
        DataKind::Words => write_words(&mut writer, &mut rng, *count, *per_line),
        DataKind::Integers => write_integers(&mut writer, &mut rng, *count),
        DataKind::Floats => write_floats(&mut writer, &mut rng, *count),
    }
    .with_context(|| format!("Failed to write test data to {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {}", output.display()))?;

    eprintln!(
        "Generated '{}' with {count} random {}.",
        output.display(),
        match kind {
            DataKind::Words => "words",
            DataKind::Integers => "integers",
            DataKind::Floats => "floats",
        },
    );
    Ok(())
}

fn write_words<W, R>(writer: &mut W, rng: &mut R, count: usize, per_line: usize) -> io::Result<()>
where
    W: Write,
    R: Rng,
{
    let per_line = per_line.max(1);
    for i in 0..count {
        let word = WORD_LIST[rng.random_range(0..WORD_LIST.len())];
        write!(writer, "{word} ")?;
        if (i + 1).is_multiple_of(per_line) {
            writeln!(writer)?;
        }
    }
    if !count.is_multiple_of(per_line) {
        writeln!(writer)?;
    }
    Ok(())
}

fn write_integers<W, R>(writer: &mut W, rng: &mut R, count: usize) -> io::Result<()>
where
    W: Write,
    R: Rng,
{
    for _ in 0..count {
        writeln!(writer, "{}", rng.random_range(-INTEGER_RANGE..=INTEGER_RANGE))?;
    }
    Ok(())
}

fn write_floats<W, R>(writer: &mut W, rng: &mut R, count: usize) -> io::Result<()>
where
    W: Write,
    R: Rng,
{
    for _ in 0..count {
        writeln!(writer, "{}", rng.random_range(-FLOAT_RANGE..FLOAT_RANGE))?;
    }
    Ok(())
}
