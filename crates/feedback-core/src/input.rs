//! Reads one spreadsheet column of feedback out of an exported file.

use std::fs;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::{debug, info};

use crate::config::InputSettings;
use crate::error::{Error, Result};

/// Converts spreadsheet column letters into a zero-based index.
///
/// Non-alphabetic characters are ignored and case does not matter, so
/// `"a"`, `" A "` and `"A1"` all give `0`; `"AA"` gives `26`.
pub fn column_index(letters: &str) -> Result<usize> {
    let letters: String = letters.chars().filter(|c| c.is_ascii_alphabetic()).map(|c| c.to_ascii_uppercase()).collect();
    if letters.is_empty() {
        return Err(Error::InvalidConfig("column must contain at least one letter".to_string()));
    }
    let mut index: usize = 0;
    for c in letters.bytes() {
        index = index
            .checked_mul(26)
            .and_then(|i| i.checked_add(usize::from(c - b'A') + 1))
            .ok_or_else(|| Error::InvalidConfig(format!("column '{}' is out of range", letters)))?;
    }
    Ok(index - 1)
}

#[derive(Debug, Clone)]
pub struct FeedbackReader {
    column: usize,
    delimiter: u8,
    has_header: bool,
}

impl FeedbackReader {
    pub fn new(column: usize) -> Self {
        Self { column, delimiter: b',', has_header: false }
    }

    /// Builds a reader from `[input]` settings; `column` overrides the configured letters.
    pub fn from_settings(settings: &InputSettings, column: Option<&str>) -> Result<Self> {
        let column = column_index(column.unwrap_or(&settings.column))?;
        let delimiter = u8::try_from(settings.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| Error::InvalidConfig(format!("delimiter '{}' is not ASCII", settings.delimiter)))?;
        Ok(Self::new(column).with_delimiter(delimiter).with_header(settings.has_header))
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Non-blank, trimmed cells of the configured column, in row order.
    ///
    /// Spreadsheets (`.xlsx`, `.xlsm`, `.xls`, `.xlsb`, `.ods`) are read from their
    /// first worksheet, `.csv` and `.tsv` files as delimited records and
    /// `.txt` files as one feedback item per line. Other extensions are
    /// rejected.
    pub fn read_column(&self, path: &Path) -> Result<Vec<String>> {
        if !path.is_file() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        let extension = path.extension().and_then(|s| s.to_str()).map(str::to_ascii_lowercase);
        let cells = match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xls" | "xlsb" | "ods") => self.read_spreadsheet(path)?,
            Some("csv") => self.read_delimited(path, self.delimiter)?,
            Some("tsv") => self.read_delimited(path, b'\t')?,
            Some("txt") => self.read_lines(path)?,
            other => {
                return Err(Error::InvalidConfig(format!(
                    "unsupported feedback file type '{}' for {}; expected xlsx, xls, ods, csv, tsv or txt",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        };
        info!(path = %path.display(), items = cells.len(), "read feedback column");
        Ok(cells)
    }

    fn read_spreadsheet(&self, path: &Path) -> Result<Vec<String>> {
        let spreadsheet_err = |e: calamine::Error| Error::Spreadsheet(format!("{}: {}", path.display(), e));
        let mut workbook = open_workbook_auto(path).map_err(spreadsheet_err)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::Spreadsheet(format!("{} has no worksheets", path.display())))?
            .map_err(spreadsheet_err)?;
        let (Some((first_row, _)), Some((last_row, _))) = (range.start(), range.end()) else {
            return Ok(Vec::new());
        };
        let column = u32::try_from(self.column)
            .map_err(|_| Error::InvalidConfig(format!("column {} is out of range", self.column)))?;
        let first_row = if self.has_header { first_row + 1 } else { first_row };

        let mut cells = Vec::new();
        for row in first_row..=last_row {
            match range.get_value((row, column)) {
                Some(Data::Empty) | None => {}
                Some(Data::Error(e)) => debug!(row, column = self.column, error = %e, "skipping cell with formula error"),
                Some(value) => {
                    let cell = value.to_string();
                    let cell = cell.trim();
                    if !cell.is_empty() {
                        cells.push(cell.to_string());
                    }
                }
            }
        }
        Ok(cells)
    }

    fn read_delimited(&self, path: &Path, delimiter: u8) -> Result<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.has_header)
            .flexible(true)
            .from_path(path)?;
        let mut cells = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            match record.get(self.column).map(str::trim) {
                Some(cell) if !cell.is_empty() => cells.push(cell.to_string()),
                Some(_) => {}
                None => debug!(row, column = self.column, "row has no cell in column"),
            }
        }
        Ok(cells)
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let content = self.read_file_content(path)?;
        Ok(content.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect())
    }

    fn read_file_content(&self, path: &Path) -> Result<String> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(_) => Ok(String::from_utf8_lossy(&fs::read(path)?).to_string()),
        }
    }
}
