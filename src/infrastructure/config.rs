use crate::application::chart_widget::WidgetSettings;
use crate::application::series_builder::BuildOptions;
use crate::domain::chart::AxisConfig;
use crate::domain::series::ColorPalette;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub sheets: SheetsSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
    /// HTML file hosting the chart container; the built-in page when unset.
    #[serde(default)]
    pub page_template: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            page_template: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SheetsSettings {
    pub api_key: String,
    pub spreadsheet_id: String,
    pub range: String,
    #[serde(default = "default_discovery_url")]
    pub discovery_url: String,
}

fn default_discovery_url() -> String {
    "https://sheets.googleapis.com/$discovery/rest?version=v4".to_string()
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartSettings {
    pub container_id: String,
    pub palette: Vec<String>,
    pub skip_blank_readings: bool,
    pub axis: AxisConfig,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            container_id: "precipitation-chart".to_string(),
            palette: vec![
                "#4e79a7".to_string(),
                "#f28e2b".to_string(),
                "#e15759".to_string(),
                "#76b7b2".to_string(),
                "#59a14f".to_string(),
                "#edc948".to_string(),
            ],
            skip_blank_readings: false,
            axis: AxisConfig::default(),
        }
    }
}

impl ChartSettings {
    pub fn widget_settings(&self) -> WidgetSettings {
        WidgetSettings {
            container_id: self.container_id.clone(),
            palette: ColorPalette::new(self.palette.clone()),
            axis: self.axis.clone(),
            build_options: BuildOptions {
                skip_blank_readings: self.skip_blank_readings,
            },
        }
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/chart")
}

pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()?;

    Ok(settings.try_deserialize()?)
}
