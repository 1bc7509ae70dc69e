use std::{fs, io, path::Path, str::FromStr};

use anyhow::anyhow;

/// Outcome of validating the lines of an input file: the values that parsed,
/// plus the raw text of every line that did not.
#[derive(Debug)]
pub(crate) struct ParsedLines<T> {
    pub(crate) values: Vec<T>,
    pub(crate) skipped: Vec<String>,
}

/// Reads an input file to a string.
///
/// The error message distinguishes a missing file from an unreadable one;
/// anything else (including invalid UTF-8) surfaces as a generic read
/// failure. All of these are fatal to the pipeline.
pub(crate) fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => anyhow!("File '{}' not found.", path.display()),
        io::ErrorKind::PermissionDenied => {
            anyhow!("Permission denied when trying to read '{}'.", path.display())
        }
        _ => anyhow::Error::new(err).context(format!("Failed to read file '{}'", path.display())),
    })
}

/// Parses each trimmed line as `T`, accumulating the values that parse and
/// the lines that do not. A malformed line never aborts the load.
pub(crate) fn parse_lines<T>(input: &str) -> ParsedLines<T>
where
    T: FromStr,
{
    let mut values = Vec::new();
    let mut skipped = Vec::new();
    for line in input.lines() {
        let line = line.trim();
        match line.parse() {
            Ok(value) => values.push(value),
            Err(_) => skipped.push(line.to_owned()),
        }
    }
    ParsedLines { values, skipped }
}

/// Splits input text into whitespace-delimited tokens, verbatim.
///
/// Case normalization belongs to the counting stage, not the loader.
pub(crate) fn split_tokens(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Warns about every line the parser skipped.
pub(crate) fn warn_skipped(skipped: &[String]) {
    for line in skipped {
        eprintln!("Invalid number, skipped: {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_skips_malformed_lines() {
        let input = "1.5\nbogus\n2.5\n";
        let parsed = parse_lines::<f64>(input);
        assert_eq!(parsed.values, [1.5, 2.5]);
        assert_eq!(parsed.skipped, ["bogus"]);
    }

    #[test]
    fn test_parse_lines_trims_surrounding_whitespace() {
        let parsed = parse_lines::<f64>("  3.25  \n");
        assert_eq!(parsed.values, [3.25]);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_parse_lines_all_malformed_yields_no_values() {
        let parsed = parse_lines::<f64>("one\ntwo\n");
        assert!(parsed.values.is_empty());
        assert_eq!(parsed.skipped, ["one", "two"]);
    }

    #[test]
    fn test_parse_lines_reports_blank_lines_as_skipped() {
        let parsed = parse_lines::<f64>("1.0\n\n2.0\n");
        assert_eq!(parsed.values, [1.0, 2.0]);
        assert_eq!(parsed.skipped, [""]);
    }

    #[test]
    fn test_split_tokens() {
        assert_eq!(
            split_tokens("the  cat\nand\tthe hat\n"),
            ["the", "cat", "and", "the", "hat"],
        );
        assert!(split_tokens("  \n \t ").is_empty());
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Path::new("no-such-file.txt")).unwrap_err();
        assert_eq!(err.to_string(), "File 'no-such-file.txt' not found.");
    }
}
