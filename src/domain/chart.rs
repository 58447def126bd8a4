// Chart-facing domain models
use super::series::Series;
use serde::{Deserialize, Serialize};

pub const MAX_TIME_TICKS: usize = 10;

/// Static axis and display options handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub value_axis_title: String,
    pub minute_bucketing: bool,
    pub max_time_ticks_visible: usize,
    pub date_time_display_format: String,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            value_axis_title: "Precipitation (mm)".to_string(),
            minute_bucketing: true,
            max_time_ticks_visible: MAX_TIME_TICKS,
            date_time_display_format: "MMM d, HH:mm".to_string(),
        }
    }
}

impl AxisConfig {
    /// Tick cap actually applied to the time axis.
    pub fn time_ticks(&self) -> usize {
        self.max_time_ticks_visible.min(MAX_TIME_TICKS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub x: i64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<DataPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl From<Series> for ChartDataset {
    fn from(series: Series) -> Self {
        let data = series
            .points
            .iter()
            .map(|p| DataPoint {
                x: p.time_ms(),
                y: p.value,
            })
            .collect();

        Self {
            label: series.label,
            data,
            background_color: series.color,
        }
    }
}
