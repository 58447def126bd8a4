// HTTP request handlers
use crate::application::chart_widget::LoadOutcome;
use crate::presentation::app_state::AppState;
use crate::presentation::page::HtmlPage;
use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(chart_page))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Serve the page; each request is one page load of the widget.
pub async fn chart_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut page = HtmlPage::new(state.page_template.as_str());

    match state.widget.load(&mut page).await {
        LoadOutcome::NotInstalled => {
            tracing::debug!("Page has no {} container", state.widget.container_id());
        }
        LoadOutcome::Finished(widget_state) => {
            tracing::info!("Chart page load finished: {:?}", widget_state);
        }
    }

    Html(page.into_html())
}
