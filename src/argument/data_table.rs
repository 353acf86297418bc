// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tabular step argument.

use std::{collections::HashMap, fmt};

/// Rows of string cells attached to a step.
///
/// The first row is treated as a header by [`DataTable::rows()`] and
/// [`DataTable::hashes()`].
///
/// ```rust
/// use cucumber_invoke::DataTable;
///
/// let table = DataTable::from(vec![
///     vec!["name", "age"],
///     vec!["Alice", "30"],
///     vec!["Bob", "25"],
/// ]);
///
/// assert_eq!(table.headers(), Some(&["name".to_owned(), "age".to_owned()][..]));
/// assert_eq!(table.hashes()[1]["age"], "25");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DataTable {
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Creates a new [`DataTable`] out of the given rows.
    #[must_use]
    pub const fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Returns all the rows, header included.
    #[must_use]
    pub fn raw(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the first row, if any.
    #[must_use]
    pub fn headers(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Returns the rows following the header.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Maps every non-header row by the header cells.
    ///
    /// Cells beyond the header's width are dropped.
    #[must_use]
    pub fn hashes(&self) -> Vec<HashMap<String, String>> {
        let Some(headers) = self.headers() else {
            return Vec::new();
        };
        self.rows()
            .iter()
            .map(|row| headers.iter().cloned().zip(row.iter().cloned()).collect())
            .collect()
    }

    /// Maps a two-column table's first column onto its second one.
    ///
    /// Returns [`None`] if any row doesn't have exactly 2 cells.
    #[must_use]
    pub fn rows_hash(&self) -> Option<HashMap<String, String>> {
        self.rows
            .iter()
            .map(|row| match row.as_slice() {
                [key, value] => Some((key.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    /// Returns a [`DataTable`] with rows and columns swapped.
    ///
    /// The width is taken from the first row.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let width = self.width();
        let mut columns = vec![Vec::with_capacity(self.rows.len()); width];
        for row in &self.rows {
            for (column, cell) in columns.iter_mut().zip(row) {
                column.push(cell.clone());
            }
        }
        Self::new(columns)
    }

    /// Indicates whether this [`DataTable`] has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows, header included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of cells in the first row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Consumes this [`DataTable`] returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl From<Vec<Vec<&str>>> for DataTable {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_owned).collect())
                .collect(),
        )
    }
}

impl From<Vec<Vec<String>>> for DataTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}

impl fmt::Display for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "| {} |", row.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> DataTable {
        DataTable::from(vec![
            vec!["name", "age"],
            vec!["Alice", "30"],
            vec!["Bob", "25"],
        ])
    }

    #[test]
    fn rows_skip_header() {
        let table = people();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], vec!["Alice", "30"]);
    }

    #[test]
    fn empty_table_has_no_rows() {
        let table = DataTable::default();
        assert!(table.is_empty());
        assert!(table.rows().is_empty());
        assert!(table.hashes().is_empty());
        assert_eq!(table.headers(), None);
        assert_eq!(table.width(), 0);
    }

    #[test]
    fn hashes_by_header() {
        let hashes = people().hashes();
        assert_eq!(hashes.len(), 2);
        assert_eq!(hashes[0]["name"], "Alice");
        assert_eq!(hashes[1]["age"], "25");
    }

    #[test]
    fn rows_hash_requires_two_columns() {
        let table = DataTable::from(vec![
            vec!["timeout", "30"],
            vec!["retries", "3"],
        ]);
        let hash = table.rows_hash().unwrap();
        assert_eq!(hash["retries"], "3");

        let table = DataTable::from(vec![vec!["a", "b", "c"]]);
        assert!(table.rows_hash().is_none());
    }

    #[test]
    fn transposes() {
        let transposed = people().transpose();
        assert_eq!(transposed.raw()[0], vec!["name", "Alice", "Bob"]);
        assert_eq!(transposed.raw()[1], vec!["age", "30", "25"]);
    }

    #[test]
    fn displays_as_gherkin() {
        let table = DataTable::from(vec![vec!["a", "b"], vec!["1", "2"]]);
        assert_eq!(table.to_string(), "| a | b |\n| 1 | 2 |\n");
    }
}
