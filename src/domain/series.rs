// Series domain models

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// Epoch seconds, UTC.
    pub timestamp: i64,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }

    pub fn time_ms(&self) -> i64 {
        self.timestamp * 1000
    }
}

/// One column pair of the grid, ready to become one chart dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: Option<String>,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(label: String, color: Option<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            label,
            color,
            points,
        }
    }
}

/// Colors handed out positionally to the first series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPalette {
    colors: Vec<String>,
}

impl ColorPalette {
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }

    /// Color for the series at `index`, if the palette reaches that far.
    pub fn color_for(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_runs_out() {
        let palette = ColorPalette::new(vec!["#123456".to_string(), "#abcdef".to_string()]);
        assert_eq!(palette.color_for(0), Some("#123456"));
        assert_eq!(palette.color_for(1), Some("#abcdef"));
        assert_eq!(palette.color_for(2), None);
        assert_eq!(ColorPalette::default().color_for(0), None);
    }

    #[test]
    fn test_point_time_ms() {
        assert_eq!(SeriesPoint::new(1060, 3.0).time_ms(), 1_060_000);
    }
}
