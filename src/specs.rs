//! Specs workbook loading.
//!
//! The specs file is the run configuration spreadsheet of the external
//! toolchain. It is loaded eagerly, indexed by its first column, and passed
//! through to the calibration/scenario routines without any field being
//! inspected or modified here.

use crate::error::{Result, RunnerError};
use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SpecsTable {
    path: PathBuf,
    index_name: String,
    columns: Vec<String>,
    keys: Vec<String>,
    rows: Vec<Vec<Data>>,
    by_key: HashMap<String, usize>,
}

impl SpecsTable {
    /// Load the first worksheet, treating the first row as the header and the
    /// first column as the row index.
    pub fn load(path: &Path) -> Result<Self> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| RunnerError::SpecsEmpty(path.display().to_string()))??;

        let mut row_iter = range.rows();
        let header = row_iter
            .next()
            .ok_or_else(|| RunnerError::SpecsEmpty(path.display().to_string()))?;

        let index_name = header.first().map(|c| c.to_string()).unwrap_or_default();
        let columns: Vec<String> = header.iter().skip(1).map(|c| c.to_string()).collect();

        let mut keys = Vec::new();
        let mut rows = Vec::new();
        let mut by_key = HashMap::new();

        for row in row_iter {
            let Some(first) = row.first() else { continue };
            if matches!(first, Data::Empty) {
                continue;
            }
            let key = first.to_string();
            by_key.insert(key.clone(), rows.len());
            keys.push(key);
            rows.push(row.iter().skip(1).cloned().collect());
        }

        Ok(Self {
            path: path.to_path_buf(),
            index_name,
            columns,
            keys,
            rows,
            by_key,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&[Data]> {
        self.by_key.get(key).map(|&i| self.rows[i].as_slice())
    }
}
