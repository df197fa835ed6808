//! RawTable: rows of string cells loaded from a delimited benchmark file.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Header plus string rows, exactly as read. Never mutated after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_reader<R: Read>(reader: R, separator: u8) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(separator)
            .has_headers(true)
            .from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { headers, rows })
    }

    pub fn load<P: AsRef<Path>>(path: P, separator: u8) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let table = Self::from_reader(file, separator)?;
        debug!(
            path = %path.as_ref().display(),
            rows = table.len(),
            columns = table.headers.len(),
            "loaded table"
        );
        Ok(table)
    }

    /// Load with the per-file checks: path must exist, be a regular file and
    /// hold at least one data row.
    pub fn load_checked<P: AsRef<Path>>(path: P, separator: u8) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(Error::NotAFile(path.to_path_buf()));
        }
        let table = Self::load(path, separator)?;
        if table.is_empty() {
            return Err(Error::EmptyTable(path.to_path_buf()));
        }
        Ok(table)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// All rows, in file order.
    pub fn all(&self) -> TableSlice<'_> {
        TableSlice {
            table: self,
            rows: (0..self.rows.len()).collect(),
        }
    }

    /// Rows where every `(column, value)` pair matches exactly.
    ///
    /// A column that does not exist never matches.
    pub fn filter_eq(&self, pairs: &[(&str, &str)]) -> TableSlice<'_> {
        let cols: Option<Vec<(usize, &str)>> = pairs
            .iter()
            .map(|(c, v)| self.column_index(c).map(|i| (i, *v)))
            .collect();
        let rows = match cols {
            Some(cols) => (0..self.rows.len())
                .filter(|&r| cols.iter().all(|(c, v)| self.cell(r, *c) == Some(*v)))
                .collect(),
            None => Vec::new(),
        };
        TableSlice { table: self, rows }
    }
}

/// A row subset of a [`RawTable`], kept in file order.
#[derive(Debug, Clone)]
pub struct TableSlice<'a> {
    table: &'a RawTable,
    rows: Vec<usize>,
}

impl<'a> TableSlice<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.table.has_column(name)
    }

    /// Cell texts of `name` in row order.
    pub fn text(&self, name: &str) -> Option<Vec<&'a str>> {
        let col = self.table.column_index(name)?;
        let table = self.table;
        Some(
            self.rows
                .iter()
                .map(|&r| table.cell(r, col).unwrap_or(""))
                .collect(),
        )
    }

    /// Values of `name` parsed as numbers. Unparseable cells become NaN.
    pub fn numeric(&self, name: &str) -> Option<Vec<f64>> {
        Some(
            self.text(name)?
                .into_iter()
                .map(|s| s.trim().parse::<f64>().unwrap_or(f64::NAN))
                .collect(),
        )
    }
}
