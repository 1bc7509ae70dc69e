use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write as _},
    time::Duration,
};

use anyhow::Context as _;

/// A fully formatted report: the result lines of one utility run plus the
/// elapsed wall-clock time.
///
/// A report is constructed once, after the compute stage finishes, and then
/// emitted once to the console and the utility's fixed-name output file in
/// the same pass. The elapsed line is always the final line, formatted to
/// two decimal places of seconds.
#[derive(Debug, Clone)]
pub(crate) struct Report {
    lines: Vec<String>,
    elapsed: Duration,
}

impl Report {
    pub(crate) fn new(lines: Vec<String>, elapsed: Duration) -> Self {
        Self { lines, elapsed }
    }

    /// Prints the report to stdout and writes the identical payload to
    /// `file_name`, truncating any previous run's output.
    pub(crate) fn emit(&self, file_name: &str) -> anyhow::Result<()> {
        print!("{self}");

        let file = File::create(file_name)
            .with_context(|| format!("Failed to create output file: {file_name}"))?;
        let mut writer = BufWriter::new(file);
        write!(writer, "{self}")
            .with_context(|| format!("Failed to write results to {file_name}"))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {file_name}"))?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "Time Elapsed: {:.2} seconds", self.elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_line_has_two_decimal_places() {
        let report = Report::new(vec![], Duration::from_millis(1234));
        assert_eq!(report.to_string(), "Time Elapsed: 1.23 seconds\n");
    }

    #[test]
    fn test_lines_render_in_order_before_elapsed() {
        let report = Report::new(
            vec!["Mean: 2".to_owned(), "Median: 2".to_owned()],
            Duration::ZERO,
        );
        assert_eq!(
            report.to_string(),
            "Mean: 2\nMedian: 2\nTime Elapsed: 0.00 seconds\n",
        );
    }

    #[test]
    fn test_blank_line_renders_as_separator() {
        let report = Report::new(vec!["hello: 1".to_owned(), String::new()], Duration::ZERO);
        assert_eq!(
            report.to_string(),
            "hello: 1\n\nTime Elapsed: 0.00 seconds\n",
        );
    }
}
