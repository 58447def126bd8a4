// Application state for HTTP handlers
use crate::application::chart_widget::ChartWidget;

#[derive(Clone)]
pub struct AppState {
    pub widget: ChartWidget,
    pub page_template: String,
}
