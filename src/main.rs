// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::chart_widget::ChartWidget;
use crate::infrastructure::chartjs_renderer::ChartJsRenderer;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::sheets_source::GoogleSheetsSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;
use crate::presentation::page::DEFAULT_TEMPLATE;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    let page_template = match &app_config.server.page_template {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read page template {}", path))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    // The Sheets session starts on the first page load
    let source = Arc::new(GoogleSheetsSource::new(app_config.sheets.clone()));
    let renderer = Arc::new(ChartJsRenderer::new());
    let widget = ChartWidget::new(source, renderer, app_config.chart.widget_settings());

    let state = Arc::new(AppState {
        widget,
        page_template,
    });

    let addr: SocketAddr = app_config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address {}", app_config.server.bind_addr))?;
    tracing::info!("Starting precip-chart on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router(state)).await?;

    Ok(())
}
