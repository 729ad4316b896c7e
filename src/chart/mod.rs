//! Chart rendering: one parameterized renderer for every statistic.

pub mod datatable;
pub mod interval;
pub mod render;

pub use datatable::{Cell, Column, ColumnType, DataTable};
pub use interval::{parse_fractional_interval, parse_interval};
pub use render::{ChartType, ChartView, NO_DATA_MESSAGE, render};

use crate::core::stats::Report;
use crate::errors::{AppError, AppResult};

/// Render a computed report through its wire form.
///
/// The payload comes from this process, so a shape mismatch is an internal
/// fault rather than bad input.
pub fn render_report(report: &Report) -> AppResult<ChartView> {
    let payload = serde_json::to_value(report)?;
    render(report.kind(), &payload).map_err(|e| match e {
        AppError::ChartShape(msg) => {
            AppError::Other(format!("computed report does not fit its chart: {msg}"))
        }
        other => other,
    })
}
