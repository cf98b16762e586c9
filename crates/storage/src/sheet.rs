use calamine::{Data, Reader, open_workbook_auto_from_rs};
use csv::StringRecord;
use flashcards_core::model::{Card, CardError, Deck};
use serde::Deserialize;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use crate::repository::{DeckSource, LoadError};

/// Header names every deck spreadsheet must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Chapter", "Type", "Difficulty", "Question", "Answer"];

/// One spreadsheet row, keyed by header name. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Chapter")]
    chapter: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Difficulty")]
    difficulty: String,
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "Answer")]
    answer: String,
}

impl SheetRow {
    fn into_card(self) -> Result<Card, CardError> {
        Card::from_cells(
            &self.chapter,
            &self.kind,
            &self.difficulty,
            &self.question,
            &self.answer,
        )
    }
}

/// On-disk layout of a deck file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Text export with the given field delimiter.
    Delimited(u8),
    /// Excel or OpenDocument workbook; the first worksheet is read.
    Workbook,
}

impl SheetFormat {
    /// `.xlsx`/`.xlsm`/`.xlsb`/`.xls`/`.ods` are workbooks, `.tsv`/`.tab` are
    /// tab-delimited, everything else is comma-delimited.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Self::Workbook,
            Some("tsv" | "tab") => Self::Delimited(b'\t'),
            _ => Self::Delimited(b','),
        }
    }
}

/// Deck stored as a spreadsheet with a header row: a workbook or a
/// delimited (CSV/TSV) export.
#[derive(Debug, Clone)]
pub struct SpreadsheetSource {
    path: PathBuf,
    format: SheetFormat,
}

impl SpreadsheetSource {
    /// Source for `path`, with the format picked from its extension.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = SheetFormat::for_path(&path);
        Self { path, format }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.format = SheetFormat::Delimited(delimiter);
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn format(&self) -> SheetFormat {
        self.format
    }

    /// Parse a deck from a delimited export.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::MissingColumns` when the header lacks a required
    /// column, `LoadError::InvalidRow` for a row whose cells do not parse,
    /// and `LoadError::Malformed` for delimiter-level or read errors.
    pub fn read_deck<R: Read>(reader: R, delimiter: u8) -> Result<Deck, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        check_columns(&headers)?;

        let mut cards = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            // Header is line 1; quoted fields may span lines.
            let row = record
                .position()
                .map_or(index + 2, |pos| pos.line() as usize);
            if let Some(card) = parse_row(&headers, &record, row)? {
                cards.push(card);
            }
        }

        Ok(Deck::new(cards))
    }

    /// Parse a deck from the first worksheet of an in-memory workbook.
    ///
    /// Numeric cells are rendered as text, so a chapter stored as `3.0`
    /// reads as `3`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Workbook` when the bytes are not a readable
    /// workbook, and the same column and row errors as [`Self::read_deck`].
    pub fn read_workbook(bytes: Vec<u8>) -> Result<Deck, LoadError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let Some(range) = workbook.worksheet_range_at(0).transpose()? else {
            return Err(LoadError::MissingColumns {
                columns: REQUIRED_COLUMNS.to_vec(),
            });
        };

        // `Range` starts at the first used cell; rows are reported 1-based.
        let header_row = range.start().map_or(1, |(row, _)| row as usize + 1);
        let mut rows = range.rows();
        let headers: StringRecord = rows
            .next()
            .map(|cells| cells.iter().map(|cell| cell_text(cell).trim().to_string()).collect())
            .unwrap_or_default();
        check_columns(&headers)?;

        let mut cards = Vec::new();
        for (index, cells) in rows.enumerate() {
            let record: StringRecord = cells.iter().map(cell_text).collect();
            if let Some(card) = parse_row(&headers, &record, header_row + 1 + index)? {
                cards.push(card);
            }
        }

        Ok(Deck::new(cards))
    }

    fn load_delimited(&self, delimiter: u8) -> Result<Deck, LoadError> {
        let file = std::fs::File::open(&self.path).map_err(|source| self.unreadable(source))?;
        Self::read_deck(std::io::BufReader::new(file), delimiter).map_err(|err| match err {
            LoadError::Malformed(err) if err.is_io_error() => self.unreadable(err.into()),
            other => other,
        })
    }

    fn load_workbook(&self) -> Result<Deck, LoadError> {
        let bytes = std::fs::read(&self.path).map_err(|source| self.unreadable(source))?;
        Self::read_workbook(bytes)
    }

    fn unreadable(&self, source: std::io::Error) -> LoadError {
        LoadError::Unreadable {
            path: self.path.clone(),
            source,
        }
    }
}

fn check_columns(headers: &StringRecord) -> Result<(), LoadError> {
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns { columns: missing })
    }
}

/// `None` for a row whose cells are all blank.
fn parse_row(
    headers: &StringRecord,
    record: &StringRecord,
    row: usize,
) -> Result<Option<Card>, LoadError> {
    if record.iter().all(|cell| cell.trim().is_empty()) {
        tracing::debug!(row, "skipping blank row");
        return Ok(None);
    }

    let sheet_row: SheetRow = record.deserialize(Some(headers))?;
    sheet_row
        .into_card()
        .map(Some)
        .map_err(|source| LoadError::InvalidRow { row, source })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        // `f64` displays integral values without a fraction: 3.0 -> "3".
        Data::Float(number) => number.to_string(),
        other => other.to_string(),
    }
}

impl DeckSource for SpreadsheetSource {
    fn load(&self) -> Result<Deck, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::Missing {
                path: self.path.clone(),
            });
        }

        let deck = match self.format {
            SheetFormat::Delimited(delimiter) => self.load_delimited(delimiter)?,
            SheetFormat::Workbook => self.load_workbook()?,
        };

        tracing::info!(path = %self.path.display(), cards = deck.len(), "loaded deck");
        Ok(deck)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
