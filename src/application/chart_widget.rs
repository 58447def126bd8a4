// Chart widget - One page load: fetch, build, render or report
use crate::application::chart_renderer::{ChartRenderer, HostPage};
use crate::application::error_presentation::report_error;
use crate::application::series_builder::{build_with, BuildOptions};
use crate::application::sheet_source::SheetSource;
use crate::domain::chart::{AxisConfig, ChartDataset};
use crate::domain::error::ChartError;
use crate::domain::series::{ColorPalette, Series};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Fetching,
    Rendered,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page has no container for the widget; nothing was fetched.
    NotInstalled,
    Finished(WidgetState),
}

#[derive(Debug, Clone)]
pub struct WidgetSettings {
    pub container_id: String,
    pub palette: ColorPalette,
    pub axis: AxisConfig,
    pub build_options: BuildOptions,
}

#[derive(Clone)]
pub struct ChartWidget {
    source: Arc<dyn SheetSource>,
    renderer: Arc<dyn ChartRenderer>,
    settings: WidgetSettings,
}

impl ChartWidget {
    pub fn new(
        source: Arc<dyn SheetSource>,
        renderer: Arc<dyn ChartRenderer>,
        settings: WidgetSettings,
    ) -> Self {
        Self {
            source,
            renderer,
            settings,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.settings.container_id
    }

    /// Run the pipeline once for a page. Every failure ends in the error notice.
    pub async fn load<P: HostPage>(&self, page: &mut P) -> LoadOutcome {
        let Some(container) = page.container(&self.settings.container_id) else {
            tracing::debug!(
                "Container {} not on page, widget not installed",
                self.settings.container_id
            );
            return LoadOutcome::NotInstalled;
        };

        let mut state = WidgetState::Idle;
        advance(&mut state, WidgetState::Fetching);

        match self.fetch_series().await {
            Ok(series) => {
                let datasets: Vec<ChartDataset> = series.into_iter().map(ChartDataset::from).collect();
                self.renderer.render(container, &datasets, &self.settings.axis);
                advance(&mut state, WidgetState::Rendered);
            }
            Err(e) => {
                report_error(container, &e);
                advance(&mut state, WidgetState::Errored);
            }
        }

        LoadOutcome::Finished(state)
    }

    async fn fetch_series(&self) -> Result<Vec<Series>, ChartError> {
        let grid = self.source.fetch().await?;
        let series = build_with(grid, &self.settings.palette, self.settings.build_options)?;
        Ok(series)
    }
}

fn advance(state: &mut WidgetState, next: WidgetState) {
    tracing::debug!("Chart widget {:?} -> {:?}", state, next);
    *state = next;
}
