use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;

use serde::Serialize;
use tracing::{debug_span, info, warn};

use roman_core::roman::{self, DecodeMode, RomanError};
use roman_core::settings::{self, BatchSettings};

use super::{die, exit_if_failed};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of converting one input, in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Converted {
    Numeral(String),
    Value(u32),
}

impl std::fmt::Display for Converted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Converted::Numeral(s) => f.write_str(s),
            Converted::Value(v) => write!(f, "{v}"),
        }
    }
}

/// One JSON line of conversion output.
#[derive(Debug, Serialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Converted>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Record {
    fn new(line: Option<usize>, input: &str, result: Result<Converted, RomanError>) -> Self {
        let (output, error) = match result {
            Ok(out) => (Some(out), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            line,
            input: input.to_string(),
            output,
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
    /// Stopped before the end of input because of failures.
    pub aborted: bool,
}

/// Integers are encoded; anything else is decoded as a numeral.
pub fn convert_one(input: &str, mode: DecodeMode) -> Result<Converted, RomanError> {
    match input.parse::<i64>() {
        Ok(value) => roman::encode(value).map(Converted::Numeral),
        Err(_) => roman::decode_with(input, mode).map(Converted::Value),
    }
}

/// Convert every non-blank line of `reader`, writing one JSON record per line.
pub fn convert_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    mode: DecodeMode,
    batch: &BatchSettings,
) -> Result<BatchSummary, BatchError> {
    let _span = debug_span!("convert_lines", ?mode).entered();
    let mut summary = BatchSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let record = Record::new(Some(idx + 1), input, convert_one(input, mode));
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;

        if !record.is_error() {
            summary.converted += 1;
            continue;
        }
        summary.failed += 1;
        if !batch.continue_on_error || summary.failed >= batch.max_errors {
            warn!(
                line = idx + 1,
                failed = summary.failed,
                "stopping batch after failure"
            );
            summary.aborted = true;
            break;
        }
    }

    writer.flush()?;
    Ok(summary)
}

fn resolve_mode(strict: bool) -> DecodeMode {
    if strict {
        DecodeMode::Strict
    } else {
        settings::settings().decode_mode()
    }
}

fn print_record(record: &Record, json: bool) {
    if json {
        match serde_json::to_string(record) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Error: {e}"),
        }
        return;
    }
    match (&record.output, &record.error) {
        (Some(out), _) => println!("{out}"),
        (None, Some(err)) => eprintln!("{}: {err}", record.input),
        (None, None) => {}
    }
}

pub fn encode_cmd(values: &[i64], json: bool) {
    let mut failed = 0;
    for &value in values {
        let input = value.to_string();
        let record = Record::new(None, &input, roman::encode(value).map(Converted::Numeral));
        failed += usize::from(record.is_error());
        print_record(&record, json);
    }
    exit_if_failed(failed);
}

pub fn decode_cmd(numerals: &[String], strict: bool, json: bool) {
    let mode = resolve_mode(strict);
    let mut failed = 0;
    for numeral in numerals {
        let record = Record::new(
            None,
            numeral,
            roman::decode_with(numeral, mode).map(Converted::Value),
        );
        failed += usize::from(record.is_error());
        print_record(&record, json);
    }
    exit_if_failed(failed);
}

pub fn convert_cmd(input_file: &str, output_file: Option<&str>, strict: bool) {
    let mode = resolve_mode(strict);
    let batch = &settings::settings().batch;
    let reader = BufReader::new(die!(
        File::open(input_file),
        "Error opening {input_file}: {}"
    ));

    let summary = match output_file {
        Some(path) => {
            let file = die!(File::create(path), "Error creating {path}: {}");
            die!(
                convert_lines(reader, BufWriter::new(file), mode, batch),
                "Error: {}"
            )
        }
        None => die!(
            convert_lines(reader, io::stdout().lock(), mode, batch),
            "Error: {}"
        ),
    };

    info!(
        converted = summary.converted,
        failed = summary.failed,
        aborted = summary.aborted,
        "batch finished"
    );
    exit_if_failed(summary.failed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn batch(continue_on_error: bool, max_errors: usize) -> BatchSettings {
        BatchSettings {
            continue_on_error,
            max_errors,
        }
    }

    fn run(input: &str, mode: DecodeMode, settings: &BatchSettings) -> (BatchSummary, Vec<String>) {
        let mut out = Vec::new();
        let summary = convert_lines(Cursor::new(input), &mut out, mode, settings).unwrap();
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        (summary, lines)
    }

    #[test]
    fn test_convert_one_directions() {
        assert_eq!(
            convert_one("1994", DecodeMode::Lenient),
            Ok(Converted::Numeral("MCMXCIV".to_string()))
        );
        assert_eq!(
            convert_one("MCMXCIV", DecodeMode::Lenient),
            Ok(Converted::Value(1994))
        );
        assert_eq!(
            convert_one("0", DecodeMode::Lenient),
            Err(RomanError::IntegerOutOfBounds(0))
        );
        assert_eq!(
            convert_one("-3", DecodeMode::Lenient),
            Err(RomanError::IntegerOutOfBounds(-3))
        );
        assert_eq!(convert_one("IIII", DecodeMode::Lenient), Ok(Converted::Value(4)));
        assert!(convert_one("IIII", DecodeMode::Strict).is_err());
    }

    #[test]
    fn test_convert_lines_jsonl() {
        let (summary, lines) = run("4\n\n  IX  \nIVCMXCIX\n", DecodeMode::Lenient, &batch(true, 10));
        assert_eq!(
            summary,
            BatchSummary {
                converted: 2,
                failed: 1,
                aborted: false
            }
        );
        assert_eq!(
            lines,
            vec![
                r#"{"line":1,"input":"4","output":"IV"}"#,
                r#"{"line":3,"input":"IX","output":9}"#,
                r#"{"line":4,"input":"IVCMXCIX","error":"invalid roman numeral (unconsumed input at byte 2)"}"#,
            ]
        );
    }

    #[test]
    fn test_convert_lines_stops_on_first_error() {
        let (summary, lines) = run("X\n4000\nV\n", DecodeMode::Lenient, &batch(false, 10));
        assert_eq!(summary.converted, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.aborted);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("integer must be between 1 and 3999"));
    }

    #[test]
    fn test_convert_lines_max_errors() {
        let (summary, lines) = run("A\nB\nC\nD\n", DecodeMode::Lenient, &batch(true, 2));
        assert_eq!(summary.failed, 2);
        assert!(summary.aborted);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_convert_lines_strict_mode() {
        let (summary, _) = run("IIII\nIV\n", DecodeMode::Strict, &batch(true, 10));
        assert_eq!(summary.converted, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_convert_lines_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("input.txt");
        let output_path = dir.path().join("output.jsonl");
        std::fs::write(&input_path, "3999\nMMMCMXCIX\n").unwrap();

        let reader = BufReader::new(File::open(&input_path).unwrap());
        let writer = BufWriter::new(File::create(&output_path).unwrap());
        let summary = convert_lines(reader, writer, DecodeMode::Lenient, &batch(true, 10)).unwrap();
        assert_eq!(summary.converted, 2);

        let written = std::fs::read_to_string(&output_path).unwrap();
        let values: Vec<serde_json::Value> = written
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(values[0]["output"], "MMMCMXCIX");
        assert_eq!(values[1]["output"], 3999);
    }
}
