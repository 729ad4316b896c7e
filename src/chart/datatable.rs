//! Google Charts DataTable JSON literal.
//!
//! `{"cols": [{"id", "label", "type"}], "rows": [{"c": [{"v", "f"}]}]}`

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
    Datetime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ColumnType,
}

impl Column {
    pub fn new(id: &str, label: &str, kind: ColumnType) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub v: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f: Option<String>,
}

impl Cell {
    pub fn plain(v: Value) -> Self {
        Self { v, f: None }
    }

    /// Datetime cell: `Date(...)` literal value plus an `HH:MM:SS` label.
    pub fn datetime(dt: NaiveDateTime) -> Self {
        Self {
            v: Value::String(date_literal(dt)),
            f: Some(dt.format("%H:%M:%S").to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub c: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    pub cols: Vec<Column>,
    pub rows: Vec<Row>,
}

impl DataTable {
    pub fn new(cols: Vec<Column>) -> Self {
        Self {
            cols,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(Row { c: cells });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// `Date(year, month0, day, h, m, s[, ms])`, the month is zero-based.
pub fn date_literal(dt: NaiveDateTime) -> String {
    let ms = dt.nanosecond() / 1_000_000;
    let base = format!(
        "Date({}, {}, {}, {}, {}, {}",
        dt.year(),
        dt.month0(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    );
    if ms == 0 {
        format!("{base})")
    } else {
        format!("{base}, {ms})")
    }
}
