//! CSV reader producing a [`RowMatrix`], with encoding and delimiter auto-detection.
//!
//! The whole input is loaded into memory. The first record is kept as an
//! ordinary row (the header) and ragged rows are passed through untouched;
//! the projection layer reports them when it indexes past their end.

use std::io::Read;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{CsvError, CsvResult};
use crate::models::RowMatrix;

/// Delimiters considered by [`detect_delimiter`], in tie-break order.
const CANDIDATE_DELIMITERS: [char; 4] = [',', ';', '\t', '|'];

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed matrix, header first
    pub matrix: RowMatrix,
    /// Detected or used encoding
    pub encoding: String,
    /// Detected or used delimiter
    pub delimiter: char,
}

/// Detect the encoding of raw bytes using chardet.
///
/// Charsets that [`decode_content`] has no decoder for are reported as `utf-8`.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "iso-8859-15" | "latin-9" | "latin9" => "iso-8859-15".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other if encoding_rs::Encoding::for_label(other.as_bytes()).is_some() => charset,
        other => {
            trace!(charset = other, "no decoder for detected charset, assuming UTF-8");
            "utf-8".to_string()
        }
    }
}

/// Decode bytes to string using the specified encoding.
///
/// `iso-8859-1` is decoded as windows-1252, the WHATWG mapping for that label.
/// Other labels are resolved by `encoding_rs`; an unknown label is an error.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let label = encoding.trim().to_lowercase();

    let decoder = match label.as_str() {
        "utf-8" | "utf8" | "ascii" => {
            return Ok(match std::str::from_utf8(bytes) {
                Ok(s) => s.to_string(),
                Err(_) => String::from_utf8_lossy(bytes).into_owned(),
            });
        }
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::WINDOWS_1252,
        "iso-8859-15" | "latin-9" | "latin9" => encoding_rs::ISO_8859_15,
        other => encoding_rs::Encoding::for_label(other.as_bytes())
            .ok_or_else(|| CsvError::Encoding(format!("unknown encoding '{}'", encoding)))?,
    };

    let (text, _, _) = decoder.decode(bytes);
    Ok(text.into_owned())
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Falls back to `,` when none of the candidates appear.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let mut best_sep = CANDIDATE_DELIMITERS[0];
    let mut best_count = 0;

    for &sep in &CANDIDATE_DELIMITERS {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV from a reader into a matrix with an explicit delimiter.
pub fn parse_matrix<R: Read>(reader: R, delimiter: char) -> CsvResult<RowMatrix> {
    let delimiter_byte = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(CsvError::Delimiter(delimiter))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter_byte)
        .from_reader(reader);

    let rows = csv_reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect::<Vec<_>>()))
        .collect::<Result<Vec<_>, csv::Error>>()?;

    debug!(rows = rows.len(), "parsed CSV matrix");
    Ok(RowMatrix::from_rows(rows))
}

/// Parse CSV text with an explicit delimiter.
///
/// # Example
/// ```
/// use csvsum::parse_str;
///
/// let m = parse_str("name;age\nAlice;30\nBob;25", ';').unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.header().unwrap(), &["name", "age"]);
/// ```
pub fn parse_str(content: &str, delimiter: char) -> CsvResult<RowMatrix> {
    parse_matrix(content.as_bytes(), delimiter)
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);
    debug!(%encoding, ?delimiter, "detected CSV format");

    let matrix = parse_str(&content, delimiter)?;

    Ok(ParseResult {
        matrix,
        encoding,
        delimiter,
    })
}

/// Parse CSV bytes, auto-detecting the encoding and using `delimiter` when given.
pub fn parse_bytes(bytes: &[u8], delimiter: Option<char>) -> CsvResult<ParseResult> {
    match delimiter {
        None => parse_bytes_auto(bytes),
        Some(delimiter) => {
            let encoding = detect_encoding(bytes);
            let content = decode_content(bytes, &encoding)?;
            let matrix = parse_str(&content, delimiter)?;
            Ok(ParseResult {
                matrix,
                encoding,
                delimiter,
            })
        }
    }
}

/// Parse CSV file with auto-detection of encoding and delimiter.
pub fn parse_matrix_file_auto<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}

/// Parse a UTF-8 CSV file with an explicit delimiter.
pub fn parse_matrix_file<P: AsRef<Path>>(path: P, delimiter: char) -> CsvResult<RowMatrix> {
    let file = std::fs::File::open(path.as_ref())?;
    parse_matrix(file, delimiter)
}
