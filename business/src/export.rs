//! Tabular export of whatever a table currently shows.
//!
//! CSV follows RFC 4180: fields containing a comma, double quote, CR or LF
//! are wrapped in double quotes with embedded quotes doubled, and records
//! end with CRLF. The first record is the header. PDF is a recognised
//! format that always reports [`ExportError::Unsupported`].

use std::borrow::Cow;
use std::fmt;

use log::info;
use thiserror::Error;

use crate::format::slug;
use crate::management::list::Cell;

/// Shown in place of a PDF file.
pub const PDF_UNAVAILABLE: &str = "PDF export is not available yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Pdf => "PDF",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0} export is not available yet.")]
    Unsupported(ExportFormat),
}

/// Header plus string rows, ready to serialise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    /// File stem, e.g. `locksmiths-list`.
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn new(name: &str, columns: &[&str]) -> Self {
        Self {
            name: slug(name),
            columns: columns.iter().map(|column| (*column).to_owned()).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a table from cell rows. Short rows are padded with empty
    /// fields and cells past the last column are dropped.
    pub fn from_cells<'a, I>(name: &str, columns: &[&str], rows: I) -> Self
    where
        I: IntoIterator<Item = &'a [Cell]>,
    {
        let mut table = Self::new(name, columns);
        for cells in rows {
            table.push_row(
                (0..columns.len())
                    .map(|index| cells.get(index).map(|cell| cell.display_text().into_owned()).unwrap_or_default()),
            );
        }
        table
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Appends a suffix to the file stem, e.g. the report date.
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        let suffix = slug(suffix);
        if !suffix.is_empty() {
            self.name = format!("{}-{suffix}", self.name);
        }
        self
    }

    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.name, format.extension())
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        write_record(&mut out, self.columns.iter().map(String::as_str));
        for row in &self.rows {
            write_record(&mut out, row.iter().map(String::as_str));
        }
        out
    }

    pub fn render(&self, format: ExportFormat) -> Result<String, ExportError> {
        info!("Export {} requested as {format} ({} rows)", self.name, self.rows.len());
        match format {
            ExportFormat::Csv => Ok(self.to_csv()),
            ExportFormat::Pdf => Err(ExportError::Unsupported(format)),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn write(&self, format: ExportFormat, path: &std::path::Path) -> Result<(), ExportError> {
        let body = self.render(format)?;
        std::fs::write(path, body)?;
        info!("Export written to {}", path.display());
        Ok(())
    }
}

fn write_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (index, field) in fields.enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field));
    }
    out.push_str("\r\n");
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
