//! Line-oriented reader for the tab-separated source dumps.
//!
//! The dumps carry one header row, `\t` delimiters and a `\N` sentinel for
//! null fields. Columns are resolved by header name so a reordered dump
//! still parses; a dump without a required column is a schema failure.

use super::error::CatalogError;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

const NULL_SENTINEL: &str = "\\N";

#[derive(Debug)]
pub(crate) struct TsvTable {
    path: PathBuf,
    header: Vec<String>,
    lines: Lines<BufReader<File>>,
}

impl TsvTable {
    pub fn open(path: &Path) -> Result<TsvTable, CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_owned(),
            source,
        })?;
        let mut lines = BufReader::new(file).lines();
        let header_line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(source)) => {
                return Err(CatalogError::Io {
                    path: path.to_owned(),
                    source,
                })
            }
            // An empty file has no columns at all; the first column lookup
            // reports it as a schema failure.
            None => String::new(),
        };
        let header = header_line.split('\t').map(str::to_owned).collect();
        Ok(TsvTable {
            path: path.to_owned(),
            header,
            lines,
        })
    }

    /// Resolve a required column name to its field index.
    pub fn column(&self, name: &'static str) -> Result<usize, CatalogError> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CatalogError::MissingColumn {
                path: self.path.clone(),
                column: name,
            })
    }

    /// Iterate the data rows as raw field vectors. Unreadable lines are
    /// skipped, not fatal.
    pub fn rows(self) -> impl Iterator<Item = Vec<String>> {
        self.lines
            .filter_map(Result::ok)
            .map(|line| line.split('\t').map(str::to_owned).collect())
    }
}

/// Interpret one raw field, mapping the null sentinel (and a missing field on
/// a short row) to `None`.
pub(crate) fn field<'a>(row: &'a [String], index: usize) -> Option<&'a str> {
    match row.get(index) {
        Some(value) if value != NULL_SENTINEL && !value.is_empty() => Some(value),
        _ => None,
    }
}
