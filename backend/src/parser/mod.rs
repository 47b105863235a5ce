//! Dataset parser with encoding and delimiter auto-detection.
//!
//! Turns the raw CSV into validated [`Row`]s. Rows that cannot be used
//! (empty or unknown `section`) are reported as [`SkippedRow`] instead of
//! failing the whole load.

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::{Row, Section};

/// Columns understood by the loader. Only `section` is required.
pub const COLUMNS: [&str; 7] = ["section", "key", "title", "description", "image", "link", "skills"];

/// Candidate delimiters, in tie-break order. `|` is reserved for skill lists.
const DELIMITERS: [char; 3] = [',', ';', '\t'];

/// A row as read from the file, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source file.
    pub line: u64,
    pub section: String,
    pub key: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub skills: String,
}

/// A row dropped during validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

impl RawRow {
    /// Validate into a typed [`Row`].
    pub fn into_row(self) -> Result<Row, SkippedRow> {
        if self.section.trim().is_empty() {
            return Err(SkippedRow {
                line: self.line,
                reason: "empty section".to_string(),
            });
        }

        let section = Section::from_name(&self.section).ok_or_else(|| SkippedRow {
            line: self.line,
            reason: format!("unknown section '{}'", self.section.trim()),
        })?;

        Ok(Row {
            section,
            key: non_empty(self.key),
            title: self.title.trim().to_string(),
            description: non_empty(self.description),
            image: non_empty(self.image),
            link: non_empty(self.link),
            skills: non_empty(self.skills),
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Validated rows, in file order
    pub rows: Vec<Row>,
    /// Rows dropped during validation
    pub skipped: Vec<SkippedRow>,
    /// Detected or used encoding
    pub encoding: String,
    /// Detected or used delimiter
    pub delimiter: char,
    /// Column headers (normalized)
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// A leading byte order mark is removed.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => String::from_utf8_lossy(bytes).to_string(),
        },
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.to_string(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(enc) => enc.decode(bytes).0.to_string(),
            None => String::from_utf8_lossy(bytes).to_string(),
        },
    };

    Ok(decoded.strip_prefix('\u{feff}').map(String::from).unwrap_or(decoded))
}

/// Detect the delimiter by counting occurrences in the header line
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let mut best_sep = DELIMITERS[0];
    let mut best_count = 0;

    for &sep in &DELIMITERS {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV text with an explicit delimiter.
///
/// # Example
/// ```ignore
/// use folio::parser::parse_str;
///
/// let csv = "section,key,title\nprofile,name,Ada";
/// let result = parse_str(csv, ',').unwrap();
/// assert_eq!(result.rows.len(), 1);
/// ```
pub fn parse_str(content: &str, delimiter: char) -> CsvResult<ParseResult> {
    parse_with_metadata(content, delimiter, "utf-8".to_string())
}

/// Read raw rows (before validation) from CSV text.
pub fn read_raw_rows(content: &str, delimiter: char) -> CsvResult<(Vec<String>, Vec<RawRow>)> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let delimiter = u8::try_from(delimiter).map_err(|_| CsvError::ParseError {
        line: 1,
        message: format!("delimiter '{}' is not a single-byte character", delimiter),
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_lowercase())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let index = ColumnIndex::new(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(index.raw_row(&record, line));
    }

    Ok((headers, rows))
}

/// Headers outside [`COLUMNS`]; their cells are ignored.
pub fn unknown_columns(headers: &[String]) -> Vec<&str> {
    headers
        .iter()
        .map(String::as_str)
        .filter(|h| !h.is_empty() && !COLUMNS.contains(h))
        .collect()
}

/// Positions of the known columns in the header row.
struct ColumnIndex {
    section: usize,
    key: Option<usize>,
    title: Option<usize>,
    description: Option<usize>,
    image: Option<usize>,
    link: Option<usize>,
    skills: Option<usize>,
}

impl ColumnIndex {
    fn new(headers: &[String]) -> CsvResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        Ok(Self {
            section: find("section").ok_or_else(|| CsvError::MissingColumn("section".to_string()))?,
            key: find("key"),
            title: find("title"),
            description: find("description"),
            image: find("image"),
            link: find("link"),
            skills: find("skills"),
        })
    }

    fn raw_row(&self, record: &StringRecord, line: u64) -> RawRow {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };

        RawRow {
            line,
            section: cell(Some(self.section)),
            key: cell(self.key),
            title: cell(self.title),
            description: cell(self.description),
            image: cell(self.image),
            link: cell(self.link),
            skills: cell(self.skills),
        }
    }
}

/// Parse CSV text with an explicit delimiter and return metadata.
pub fn parse_with_metadata(content: &str, delimiter: char, encoding: String) -> CsvResult<ParseResult> {
    let (headers, raw_rows) = read_raw_rows(content, delimiter)?;

    let mut rows = Vec::with_capacity(raw_rows.len());
    let mut skipped = Vec::new();

    for raw in raw_rows {
        match raw.into_row() {
            Ok(row) => rows.push(row),
            Err(skip) => skipped.push(skip),
        }
    }

    Ok(ParseResult {
        rows,
        skipped,
        encoding,
        delimiter,
        headers,
    })
}

/// Parse a dataset file with auto-detection of encoding and delimiter.
pub fn parse_file_auto<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}

/// Parse dataset bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);

    parse_with_metadata(&content, delimiter, encoding)
}
