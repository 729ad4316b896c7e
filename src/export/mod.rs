// src/export/mod.rs

mod fs_utils;
mod json_csv;

use crate::core::Report;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `report` to `path`, asking before overwriting unless `force`.
pub fn export_report(report: &Report, format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;
    match format {
        ExportFormat::Csv => json_csv::export_csv(report, path),
        ExportFormat::Json => json_csv::export_json(report, path),
    }
}
