use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{NormalizeError, Result};
use crate::utils::temporary_sibling_path;

/// A single value: `None` when the source had nothing in that field.
pub type Cell = Option<String>;

/// Ordered columns and ordered rows of text cells.
///
/// Every row has exactly `headers.len()` cells. Row order is never changed
/// by anything in this crate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from parts, padding short rows with absent cells.
    ///
    /// Rows wider than the header are truncated; loading rejects them before
    /// they ever reach this point.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Table { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// All cells of one column, or `None` when the column does not exist.
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// Checked cell access: the outer `None` means the column is missing.
    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let index = self.column_index(name)?;
        self.rows.get(row).map(|cells| &cells[index])
    }

    /// Apply `transform` to every cell of the column `name`.
    ///
    /// Returns the number of cells whose value changed, or `None` when the
    /// column is missing and nothing was touched.
    pub fn map_column<F>(&mut self, name: &str, mut transform: F) -> Option<usize>
    where
        F: FnMut(&Cell) -> Cell,
    {
        let index = self.column_index(name)?;
        let mut changed = 0;
        for row in &mut self.rows {
            let updated = transform(&row[index]);
            if updated != row[index] {
                row[index] = updated;
                changed += 1;
            }
        }
        Some(changed)
    }

    /// Apply `transform` to every cell of every column.
    pub fn map_cells<F>(&mut self, mut transform: F) -> usize
    where
        F: FnMut(&Cell) -> Cell,
    {
        let mut changed = 0;
        for cell in self.rows.iter_mut().flatten() {
            let updated = transform(cell);
            if updated != *cell {
                *cell = updated;
                changed += 1;
            }
        }
        changed
    }

    /// Row-local fill of `target` from `source`: for each row where `should_fill`
    /// holds for the target cell, the source cell is copied verbatim.
    ///
    /// Returns `None` unless both columns exist.
    pub(crate) fn fill_column_from<P>(
        &mut self,
        target: &str,
        source: &str,
        should_fill: P,
    ) -> Option<usize>
    where
        P: Fn(&Cell) -> bool,
    {
        let target_index = self.column_index(target)?;
        let source_index = self.column_index(source)?;
        let mut filled = 0;
        for row in &mut self.rows {
            if should_fill(&row[target_index]) {
                row[target_index] = row[source_index].clone();
                filled += 1;
            }
        }
        Some(filled)
    }

    pub(crate) fn set_headers(&mut self, headers: Vec<String>) {
        debug_assert_eq!(headers.len(), self.headers.len());
        self.headers = headers;
    }

    //////////////////////////////////////////////////////////////
    ///  Loading
    //////////////////////////////////////////////////////////////

    /// Load a delimited file. The first record is the header row.
    pub fn from_csv_path<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file, delimiter)
    }

    /// Load delimited text from any reader.
    ///
    /// Empty fields become absent cells. Short rows are padded with absent
    /// cells, rows wider than the header are rejected.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = rdr.records();

        let headers: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => return Err(NormalizeError::EmptyInput),
        };

        Self::check_header_duplicates(&headers)?;

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            if record.len() > headers.len() {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                return Err(NormalizeError::MalformedRow {
                    line,
                    expected: headers.len(),
                    found: record.len(),
                });
            }

            let row: Vec<Cell> = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect();
            rows.push(row);
        }

        Ok(Table::new(headers, rows))
    }

    /// Reject header rows where the exact same name appears twice.
    /// Positions are reported 1-based.
    ///
    /// Names that only differ in case or spacing are distinct columns here;
    /// whether they clash after renaming is decided by the canonicalizer.
    fn check_header_duplicates(headers: &[String]) -> Result<()> {
        let mut header_positions: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            header_positions
                .entry(header.clone())
                .or_default()
                .push(index);
        }

        let mut details: Vec<(usize, String)> = header_positions
            .into_iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(header, positions)| {
                let columns_str = positions
                    .iter()
                    .map(|p| format!("column {}", p + 1))
                    .collect::<Vec<_>>()
                    .join(", ");
                (
                    positions[0],
                    format!("  • Header '{}' appears in: {}", header, columns_str),
                )
            })
            .collect();

        if details.is_empty() {
            return Ok(());
        }

        // HashMap order is random, report in column order
        details.sort_by_key(|(first, _)| *first);
        Err(NormalizeError::DuplicateHeaders {
            details: details.into_iter().map(|(_, detail)| detail).collect(),
        })
    }

    //////////////////////////////////////////////////////////////
    ///  Storing
    //////////////////////////////////////////////////////////////

    /// Write the table as delimited text. Absent cells become empty fields.
    pub fn write_to<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        // Quote fields only when necessary (e.g., when they contain the delimiter)
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);

        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }
        wtr.flush()?;

        Ok(())
    }

    /// Write the table to `path`.
    ///
    /// The table is staged in a sibling file and renamed over `path` only
    /// after every row was written, so a failed write leaves no partial output.
    pub fn write_csv_path<P: AsRef<Path>>(&self, path: P, delimiter: u8) -> Result<()> {
        let path = path.as_ref();
        let staged = temporary_sibling_path(path);

        let written = File::create(&staged)
            .map_err(NormalizeError::from)
            .and_then(|file| self.write_to(file, delimiter));
        if let Err(e) = written {
            let _ = std::fs::remove_file(&staged);
            return Err(e);
        }

        std::fs::rename(&staged, path)?;
        Ok(())
    }
}
