//! CSV reading with delimiter auto-detection.
//!
//! Turns raw uploaded bytes into a header row plus normalized data rows.
//! Anything that prevents reading the table as a whole is an error; row
//! shape problems are reported as warnings and the row is kept.

use csv::{ReaderBuilder, Terminator};

use crate::errors::{Error, ValidationError};
use crate::Result;

/// Configuration for CSV parsing.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParseConfig {
    /// Delimiter character: ",", ";", "\t", or "auto" (default: "auto")
    pub delimiter: Option<String>,
    /// Quote character (default: "\"")
    pub quote_char: Option<String>,
    /// Whether to skip empty rows (default: true)
    pub skip_empty_rows: Option<bool>,
}

impl ParseConfig {
    /// Returns the effective delimiter, defaulting to "auto"
    pub fn effective_delimiter(&self) -> &str {
        self.delimiter.as_deref().unwrap_or("auto")
    }

    /// Returns whether to skip empty rows
    pub fn skip_empty(&self) -> bool {
        self.skip_empty_rows.unwrap_or(true)
    }

    /// Returns the quote character as a byte
    pub fn quote_byte(&self) -> u8 {
        self.quote_char
            .as_ref()
            .and_then(|s| s.chars().next())
            .map(|c| c as u8)
            .unwrap_or(b'"')
    }
}

/// A table read from CSV text.
#[derive(Debug, Clone)]
pub(crate) struct ParsedTable {
    /// Trimmed header names, in column order
    pub headers: Vec<String>,
    /// Data rows, each padded or truncated to the header width
    pub rows: Vec<Vec<String>>,
    /// The delimiter actually used
    pub delimiter: String,
    /// Non-fatal problems found while reading
    pub warnings: Vec<String>,
}

/// Parses CSV content with the given configuration.
///
/// The first non-empty record is the header row.
pub(crate) fn parse_csv(content: &[u8], config: &ParseConfig) -> Result<ParsedTable> {
    let mut warnings = Vec::new();

    let content_str = decode_content(content, &mut warnings);
    let delimiter = detect_delimiter(&content_str, config);
    let delimiter_byte = delimiter.chars().next().unwrap_or(',') as u8;

    let (headers, rows) = parse_csv_content(&content_str, delimiter_byte, config, &mut warnings)?;

    Ok(ParsedTable {
        headers,
        rows,
        delimiter: delimiter.to_string(),
        warnings,
    })
}

/// Decodes content bytes to UTF-8 string, handling BOM if present.
fn decode_content(content: &[u8], warnings: &mut Vec<String>) -> String {
    // UTF-8 BOM (EF BB BF)
    let content_without_bom = content.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(content);

    match std::str::from_utf8(content_without_bom) {
        Ok(s) => s.to_string(),
        Err(e) => {
            warnings.push(format!(
                "Invalid UTF-8 encoding at byte {}: {}. Some characters may be replaced.",
                e.valid_up_to(),
                e
            ));
            String::from_utf8_lossy(content_without_bom).into_owned()
        }
    }
}

/// Picks the delimiter: the configured one, or the best-scoring candidate.
fn detect_delimiter<'a>(content: &str, config: &'a ParseConfig) -> &'a str {
    let delimiter_setting = config.effective_delimiter();

    if delimiter_setting != "auto" {
        return match delimiter_setting {
            "\\t" | "\t" => "\t",
            "" => ",",
            _ => delimiter_setting,
        };
    }

    let delimiters = [",", ";", "\t"];
    let mut best_delimiter = ",";
    let mut best_score = 0usize;

    for delim in delimiters {
        let score = score_delimiter(content, delim);
        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    best_delimiter
}

/// Scores a delimiter by counting consistent column counts across lines.
fn score_delimiter(content: &str, delimiter: &str) -> usize {
    let lines: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(10)
        .collect();
    let Some(first_line) = lines.first() else {
        return 0;
    };

    let delimiter_char = delimiter.chars().next().unwrap_or(',');
    let first_count = first_line.matches(delimiter_char).count();
    if first_count == 0 {
        return 0;
    }

    let consistent_count = lines
        .iter()
        .filter(|line| line.matches(delimiter_char).count() == first_count)
        .count();

    first_count * consistent_count
}

/// Parses CSV content and returns headers and data rows.
fn parse_csv_content(
    content: &str,
    delimiter: u8,
    config: &ParseConfig,
    warnings: &mut Vec<String>,
) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .quote(config.quote_byte())
        .has_headers(false) // We handle headers manually for more control
        .flexible(true) // Allow varying number of fields
        .terminator(Terminator::Any(b'\n'))
        .from_reader(content.as_bytes());

    let mut all_records: Vec<Vec<String>> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| Error::Csv(format!("Failed to parse row {}: {}", idx + 1, e)))?;
        all_records.push(
            record
                .iter()
                .map(|s| s.trim_end_matches('\r').to_string())
                .collect(),
        );
    }

    let records: Vec<Vec<String>> = if config.skip_empty() {
        all_records
            .into_iter()
            .filter(|row| !row.iter().all(|cell| cell.trim().is_empty()))
            .collect()
    } else {
        all_records
    };

    let mut records = records.into_iter();
    let headers: Vec<String> = match records.next() {
        Some(header_row) => header_row.iter().map(|h| h.trim().to_string()).collect(),
        None => {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "CSV file is empty or contains no valid records".to_string(),
            )))
        }
    };

    let header_count = headers.len();
    let rows = records
        .enumerate()
        .map(|(idx, mut row)| {
            if row.len() < header_count {
                row.resize(header_count, String::new());
            } else if row.len() > header_count {
                warnings.push(format!(
                    "Row {} has {} columns, expected {}. Extra columns ignored.",
                    idx + 1,
                    row.len(),
                    header_count
                ));
                row.truncate(header_count);
            }
            row
        })
        .collect();

    Ok((headers, rows))
}
