//! Dataset ingestion
//!
//! The boundary the core sees uploaded tabular data through: raw CSV bytes
//! in, a sequence of column-name to string-value rows out. No schema
//! validation or typing happens here.

use crate::error::{InsightError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Which upload slot a dataset fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetRole {
    Train,
    Test,
}

/// An ingested tabular dataset: ordered columns plus one string map per row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    name: String,
    columns: Vec<String>,
    rows: Vec<HashMap<String, String>>,
}

impl Dataset {
    /// Parse CSV bytes into a dataset.
    ///
    /// Headers and fields are whitespace-trimmed. Rows shorter than the
    /// header are padded with empty strings; longer rows have their extra
    /// fields dropped. Input without a header row is rejected.
    pub fn from_csv_bytes(name: &str, bytes: &[u8]) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(bytes);

        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|header| header.to_string())
            .collect();

        if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
            return Err(InsightError::DataError(format!(
                "dataset '{name}' has no header row"
            )));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row: HashMap<String, String> = columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let value = record.get(i).unwrap_or("").to_string();
                    (column.clone(), value)
                })
                .collect();
            rows.push(row);
        }

        debug!(
            dataset = name,
            rows = rows.len(),
            columns = columns.len(),
            "parsed dataset"
        );

        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    /// Read a CSV file into a dataset, named after the file stem
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("dataset");
        let bytes = std::fs::read(path)?;
        Self::from_csv_bytes(name, &bytes)
    }

    /// Dataset name (file stem or caller-supplied)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, each a column-name to value map
    pub fn rows(&self) -> &[HashMap<String, String>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Values of one column across all rows, or `None` for an unknown column
    pub fn column_values(&self, column: &str) -> Option<Vec<&str>> {
        if !self.columns.iter().any(|c| c == column) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| row.get(column).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }
}
