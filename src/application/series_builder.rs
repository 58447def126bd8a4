// Series builder - Turns a raw grid into chart series
use crate::domain::error::{BuildError, CellKind, CellParseError};
use crate::domain::grid::{transpose, RawGrid};
use crate::domain::series::{ColorPalette, Series, SeriesPoint};

/// How blank cells in the data rows are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Pad trimmed rows and drop readings whose timestamp and value are both blank.
    pub skip_blank_readings: bool,
}

/// Build one series per column pair, in column order.
pub fn build(grid: RawGrid, palette: &ColorPalette) -> Result<Vec<Series>, BuildError> {
    build_with(grid, palette, BuildOptions::default())
}

pub fn build_with(
    mut grid: RawGrid,
    palette: &ColorPalette,
    options: BuildOptions,
) -> Result<Vec<Series>, BuildError> {
    if options.skip_blank_readings {
        grid.pad_rows();
    }
    grid.validate()?;

    let columns = transpose(&grid.rows);
    let mut series_list = Vec::with_capacity(columns.len() / 2);

    for (pair, cols) in columns.chunks_exact(2).enumerate() {
        let ts_col = pair * 2;
        let (timestamps, values) = (&cols[0], &cols[1]);

        let mut points = Vec::with_capacity(timestamps.len().saturating_sub(1));
        for row in 1..timestamps.len() {
            let (ts_cell, value_cell) = (timestamps[row].trim(), values[row].trim());
            if options.skip_blank_readings && ts_cell.is_empty() && value_cell.is_empty() {
                continue;
            }

            let timestamp = parse_timestamp(ts_cell).ok_or_else(|| CellParseError {
                row,
                column: ts_col,
                kind: CellKind::Timestamp,
                content: timestamps[row].clone(),
            })?;
            let value = parse_value(value_cell).ok_or_else(|| CellParseError {
                row,
                column: ts_col + 1,
                kind: CellKind::Value,
                content: values[row].clone(),
            })?;

            points.push(SeriesPoint::new(timestamp, value));
        }

        series_list.push(Series::new(
            timestamps[0].clone(),
            palette.color_for(pair).map(str::to_string),
            points,
        ));
    }

    tracing::debug!("Built {} series from {} rows", series_list.len(), grid.rows.len());
    Ok(series_list)
}

/// Integer epoch seconds that map onto a real UTC instant.
fn parse_timestamp(cell: &str) -> Option<i64> {
    let secs = cell.parse::<i64>().ok()?;
    chrono::DateTime::from_timestamp(secs, 0).map(|t| t.timestamp())
}

fn parse_value(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
