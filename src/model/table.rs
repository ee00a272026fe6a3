//! Row and Table data structures

use std::borrow::Cow;

use crate::config::BlankRowPolicy;
use crate::error::{ExportError, Result};

use super::cell::CellValue;

/// A row of cells; rows in one table need not share a width
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Insert a cell in front of the existing ones
    pub fn prepend(&mut self, cell: impl Into<CellValue>) {
        self.cells.insert(0, cell.into());
    }

    /// Whether the row is left out of the output under `policy`.
    /// A row without cells is always blank.
    pub fn is_blank(&self, policy: BlankRowPolicy) -> bool {
        match policy {
            BlankRowPolicy::Falsy => self.cells.iter().all(CellValue::is_falsy),
            BlankRowPolicy::Empty => self.cells.iter().all(CellValue::is_empty),
        }
    }

    /// CSV field text of every cell
    pub fn fields(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(CellValue::to_field)
    }
}

impl<T> From<Vec<T>> for Row
where
    T: Into<CellValue>,
{
    fn from(cells: Vec<T>) -> Self {
        cells.into_iter().collect()
    }
}

impl<T> FromIterator<T> for Row
where
    T: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Row content plus an optional header row
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Data rows in original order
    pub content: Vec<Row>,
    /// Header labels; `None` until headers are set
    pub headers: Option<Vec<String>>,
}

impl Table {
    /// Create a table without headers
    pub fn new(content: Vec<Row>) -> Self {
        Self {
            content,
            headers: None,
        }
    }

    /// Replace the header labels wholesale
    pub fn set_headers(&mut self, headers: Vec<String>) {
        self.headers = Some(headers);
    }

    /// Whether a non-empty header row is present
    pub fn has_headers(&self) -> bool {
        self.headers.as_ref().is_some_and(|h| !h.is_empty())
    }

    /// Header labels, empty when none were set
    pub fn header_labels(&self) -> &[String] {
        self.headers.as_deref().unwrap_or_default()
    }

    /// Prepend `label` to the headers and a 1-based position to every row.
    ///
    /// Fails with [`ExportError::MissingHeaders`] before touching anything when
    /// no header row is set. Repeated calls stack further index columns.
    pub fn prepend_index(&mut self, label: &str) -> Result<()> {
        let headers = match self.headers.as_mut() {
            Some(headers) if !headers.is_empty() => headers,
            _ => return Err(ExportError::MissingHeaders),
        };

        headers.insert(0, label.to_string());
        for (idx, row) in self.content.iter_mut().enumerate() {
            row.prepend(idx + 1);
        }

        Ok(())
    }

    /// The header row as a row of string cells, if one is set
    pub fn header_row(&self) -> Option<Row> {
        if self.has_headers() {
            Some(self.header_labels().iter().map(String::as_str).collect())
        } else {
            None
        }
    }

    /// Output sequence: the header row first when set, then the content.
    /// Leaves the table untouched.
    pub fn records(&self) -> impl Iterator<Item = Cow<'_, Row>> {
        self.header_row()
            .map(Cow::Owned)
            .into_iter()
            .chain(self.content.iter().map(Cow::Borrowed))
    }
}
