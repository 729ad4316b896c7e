//! Turns an endpoint payload into something the dashboard can draw.
//!
//! One layout table drives all four statistics; the payload is taken in its
//! wire form so the renderer accepts exactly what the API answers.

use super::datatable::{Cell, Column, ColumnType, DataTable};
use super::interval::parse_fractional_interval;
use crate::errors::{AppError, AppResult};
use crate::models::ChartKind;
use serde::Serialize;
use serde_json::{Value, json};

pub const NO_DATA_MESSAGE: &str = "No data for this user.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartType {
    ColumnChart,
    LineChart,
    PieChart,
    Timeline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartView {
    Placeholder {
        message: String,
    },
    Chart {
        kind: ChartKind,
        chart_type: ChartType,
        data: DataTable,
        options: Value,
    },
}

impl ChartView {
    pub fn no_data() -> Self {
        ChartView::Placeholder {
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ChartView::Placeholder { .. })
    }
}

struct Layout {
    chart_type: ChartType,
    /// First payload row carries column labels instead of data.
    header_row: bool,
    columns: Vec<Column>,
    options: Value,
}

impl Layout {
    fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::MeanTimeWeekday => Layout {
                chart_type: ChartType::ColumnChart,
                header_row: false,
                columns: vec![
                    Column::new("", "Weekday", ColumnType::String),
                    Column::new("", "Mean time (h:m:s)", ColumnType::Datetime),
                ],
                options: json!({ "hAxis": { "title": "Weekday" } }),
            },
            ChartKind::PresenceStartEnd => Layout {
                chart_type: ChartType::Timeline,
                header_row: false,
                columns: vec![
                    Column::new("", "Weekday", ColumnType::String),
                    Column::new("Start", "", ColumnType::Datetime),
                    Column::new("End", "", ColumnType::Datetime),
                ],
                options: json!({ "hAxis": { "title": "Weekday" } }),
            },
            ChartKind::PresenceWeekday => Layout {
                chart_type: ChartType::PieChart,
                header_row: true,
                columns: vec![
                    Column::new("", "Weekday", ColumnType::String),
                    Column::new("", "Presence (s)", ColumnType::Number),
                ],
                options: json!({}),
            },
            ChartKind::MonthlyPresence => Layout {
                chart_type: ChartType::LineChart,
                header_row: true,
                columns: vec![
                    Column::new("", "Month", ColumnType::String),
                    Column::new("", "Presence (s)", ColumnType::Number),
                ],
                options: json!({ "curveType": "function" }),
            },
        }
    }
}

/// `0` (and an empty array, which the dashboard scripts compared equal to
/// zero) means "no data".
pub fn is_no_data(payload: &Value) -> bool {
    match payload {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(rows) => rows.is_empty(),
        _ => false,
    }
}

pub fn render(kind: ChartKind, payload: &Value) -> AppResult<ChartView> {
    if is_no_data(payload) {
        return Ok(ChartView::no_data());
    }

    let rows = payload
        .as_array()
        .ok_or_else(|| shape(format!("{kind}: expected an array of rows or 0")))?;

    let mut layout = Layout::for_kind(kind);
    let data_rows = if layout.header_row {
        apply_header(kind, &mut layout.columns, &rows[0])?;
        &rows[1..]
    } else {
        &rows[..]
    };

    let mut table = DataTable::new(layout.columns);
    for (i, row) in data_rows.iter().enumerate() {
        let cells = build_cells(kind, i, row, &table.cols)?;
        table.add_row(cells);
    }

    Ok(ChartView::Chart {
        kind,
        chart_type: layout.chart_type,
        data: table,
        options: layout.options,
    })
}

fn shape(msg: String) -> AppError {
    AppError::ChartShape(msg)
}

fn apply_header(kind: ChartKind, columns: &mut [Column], header: &Value) -> AppResult<()> {
    let labels = header
        .as_array()
        .filter(|h| h.len() == columns.len())
        .ok_or_else(|| shape(format!("{kind}: header must have {} labels", columns.len())))?;

    for (col, label) in columns.iter_mut().zip(labels) {
        let label = label
            .as_str()
            .ok_or_else(|| shape(format!("{kind}: header labels must be strings")))?;
        col.label = label.to_string();
    }
    Ok(())
}

fn build_cells(kind: ChartKind, index: usize, row: &Value, cols: &[Column]) -> AppResult<Vec<Cell>> {
    let values = row
        .as_array()
        .ok_or_else(|| shape(format!("{kind}: row {index} is not an array")))?;

    if values.len() != cols.len() {
        return Err(shape(format!(
            "{kind}: row {index} has {} cells, expected {}",
            values.len(),
            cols.len()
        )));
    }

    values
        .iter()
        .zip(cols)
        .map(|(v, col)| match col.kind {
            ColumnType::String if v.is_string() => Ok(Cell::plain(v.clone())),
            ColumnType::Number if v.is_number() => Ok(Cell::plain(v.clone())),
            ColumnType::Datetime => v
                .as_f64()
                .and_then(parse_fractional_interval)
                .map(Cell::datetime)
                .ok_or_else(|| shape(format!("{kind}: row {index} has a bad time value {v}"))),
            _ => Err(shape(format!(
                "{kind}: row {index} has a {:?} cell where {:?} was expected",
                v, col.kind
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_payload_renders_placeholder() {
        for kind in ChartKind::ALL {
            let view = render(kind, &json!(0)).unwrap();
            assert_eq!(view, ChartView::no_data());
            let v = serde_json::to_value(&view).unwrap();
            assert_eq!(v["status"], "placeholder");
            assert_eq!(v["message"], "No data for this user.");
        }
    }

    #[test]
    fn mean_time_rows_become_formatted_datetimes() {
        let payload = json!([["Mon", 28800.0], ["Tue", 0], ["Wed", 30047.5]]);
        let view = render(ChartKind::MeanTimeWeekday, &payload).unwrap();

        let ChartView::Chart { chart_type, data, options, .. } = view else {
            panic!("expected a chart");
        };
        assert_eq!(chart_type, ChartType::ColumnChart);
        assert_eq!(data.len(), 3);
        assert_eq!(data.cols[1].kind, ColumnType::Datetime);
        assert_eq!(data.rows[0].c[1].f.as_deref(), Some("08:00:00"));
        assert_eq!(data.rows[2].c[1].f.as_deref(), Some("08:20:47"));
        assert_eq!(options["hAxis"]["title"], "Weekday");
    }

    #[test]
    fn start_end_rewrites_both_time_columns() {
        let payload = json!([["Mon", 33134.0, 57257.0]]);
        let view = render(ChartKind::PresenceStartEnd, &payload).unwrap();
        let ChartView::Chart { chart_type, data, .. } = view else {
            panic!("expected a chart");
        };
        assert_eq!(chart_type, ChartType::Timeline);
        assert_eq!(data.rows[0].c[1].f.as_deref(), Some("09:12:14"));
        assert_eq!(data.rows[0].c[2].f.as_deref(), Some("15:54:17"));
    }

    #[test]
    fn header_row_names_columns_and_is_not_counted() {
        let payload = json!([["Month", "Presence (s)"], ["2013.09", 23553], ["2013.10", 29928]]);
        let view = render(ChartKind::MonthlyPresence, &payload).unwrap();
        let ChartView::Chart { chart_type, data, options, .. } = view else {
            panic!("expected a chart");
        };
        assert_eq!(chart_type, ChartType::LineChart);
        assert_eq!(data.len(), 2);
        assert_eq!(data.cols[0].label, "Month");
        assert_eq!(options["curveType"], "function");
    }

    #[test]
    fn one_table_row_per_input_row() {
        let payload = json!([
            ["Weekday", "Presence (s)"],
            ["Mon", 1], ["Tue", 2], ["Wed", 3], ["Thu", 4], ["Fri", 5], ["Sat", 0], ["Sun", 0]
        ]);
        let view = render(ChartKind::PresenceWeekday, &payload).unwrap();
        let ChartView::Chart { data, .. } = view else {
            panic!("expected a chart");
        };
        assert_eq!(data.len(), 7);
    }

    #[test]
    fn wrong_arity_is_a_shape_error() {
        let payload = json!([["Mon", 1.0, 2.0]]);
        let err = render(ChartKind::MeanTimeWeekday, &payload).unwrap_err();
        assert!(matches!(err, AppError::ChartShape(_)));
    }

    #[test]
    fn wrong_cell_type_is_a_shape_error() {
        let payload = json!([["Weekday", "Presence (s)"], ["Mon", "lots"]]);
        assert!(render(ChartKind::PresenceWeekday, &payload).is_err());
        assert!(render(ChartKind::MeanTimeWeekday, &json!({"rows": []})).is_err());
    }
}
