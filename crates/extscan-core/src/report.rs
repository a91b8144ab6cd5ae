//! The report accumulator.

use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::record::{ErrorRecord, ExtensionRecord, ReportEntry};

/// Indentation used when rendering the report.
const INDENT: &[u8] = b"    ";

/// Insertion-ordered, append-only list of report entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_record(&mut self, record: ExtensionRecord) {
        self.entries.push(ReportEntry::Extension(record));
    }

    pub fn push_error(&mut self, error: ErrorRecord) {
        self.entries.push(ReportEntry::Error(error));
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extension records, in report order.
    pub fn records(&self) -> impl Iterator<Item = &ExtensionRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Extension(record) => Some(record),
            ReportEntry::Error(_) => None,
        })
    }

    /// Error records, in report order.
    pub fn errors(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Error(error) => Some(error),
            ReportEntry::Extension(_) => None,
        })
    }

    /// Write the report as a JSON array indented by four spaces.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_json(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            Error::Write(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}
