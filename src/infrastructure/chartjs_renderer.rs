// Chart.js renderer - Builds the bar chart configuration object
use crate::application::chart_renderer::ChartRenderer;
use crate::domain::chart::{AxisConfig, ChartDataset};
use crate::domain::page::{Container, Element};
use serde_json::{json, Value};

#[derive(Debug, Clone, Default)]
pub struct ChartJsRenderer;

impl ChartJsRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn chart_config(datasets: &[ChartDataset], axis: &AxisConfig) -> Value {
        let mut time = json!({
            "displayFormats": {
                "minute": axis.date_time_display_format,
                "hour": axis.date_time_display_format,
                "day": axis.date_time_display_format,
            },
            "tooltipFormat": axis.date_time_display_format,
        });
        if axis.minute_bucketing {
            time["unit"] = json!("minute");
        }

        json!({
            "type": "bar",
            "data": { "datasets": datasets },
            "options": {
                "scales": {
                    "x": {
                        "type": "time",
                        "stacked": true,
                        "time": time,
                        "ticks": {
                            "autoSkip": true,
                            "maxTicksLimit": axis.time_ticks(),
                        },
                    },
                    "y": {
                        "type": "linear",
                        "stacked": true,
                        "beginAtZero": true,
                        "title": {
                            "display": true,
                            "text": axis.value_axis_title,
                        },
                    },
                },
            },
        })
    }
}

impl ChartRenderer for ChartJsRenderer {
    fn render(&self, container: &mut Container, datasets: &[ChartDataset], axis: &AxisConfig) {
        let canvas_id = format!("{}-canvas", container.id);
        tracing::debug!("Rendering {} datasets into {}", datasets.len(), canvas_id);
        container.replace_content(Element::Chart {
            canvas_id,
            config: Self::chart_config(datasets, axis),
        });
    }
}
