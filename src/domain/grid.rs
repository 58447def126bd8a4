// Raw spreadsheet grid
use super::error::MalformedGridError;

/// Row-major cell matrix exactly as the spreadsheet service returned it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    pub rows: Vec<Vec<String>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Width of the header row.
    pub fn width(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Checks the grid is non-empty, rectangular and has an even width.
    pub fn validate(&self) -> Result<(), MalformedGridError> {
        let columns = self.width();
        if columns == 0 {
            return Err(MalformedGridError::Empty);
        }
        if columns % 2 != 0 {
            return Err(MalformedGridError::OddColumnCount { columns });
        }
        for (row, cells) in self.rows.iter().enumerate().skip(1) {
            if cells.len() != columns {
                return Err(MalformedGridError::RaggedRow {
                    row,
                    expected: columns,
                    found: cells.len(),
                });
            }
        }
        Ok(())
    }

    /// Pads short data rows with blank cells up to the header width.
    /// Longer rows are left alone so `validate` still rejects them.
    pub fn pad_rows(&mut self) {
        let columns = self.width();
        for cells in self.rows.iter_mut().skip(1) {
            if cells.len() < columns {
                cells.resize(columns, String::new());
            }
        }
    }
}

/// Transposes a rectangular row-major matrix into column-major order.
pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let width = rows.first().map(|r| r.len()).unwrap_or(0);
    (0..width)
        .map(|col| rows.iter().map(|row| row[col].clone()).collect())
        .collect()
}
