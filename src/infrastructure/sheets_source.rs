// Google Sheets v4 adapter
use crate::application::sheet_source::SheetSource;
use crate::domain::error::FetchError;
use crate::domain::grid::RawGrid;
use crate::infrastructure::config::SheetsSettings;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::OnceCell;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiscoveryDocument {
    root_url: String,
    #[serde(default)]
    service_path: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    /// Absent when the range holds no data.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// An initialized API session: credential plus the endpoint from discovery.
#[derive(Debug, Clone)]
pub struct SheetsSession {
    base_url: String,
    api_key: String,
}

impl SheetsSession {
    pub async fn connect(
        client: &reqwest::Client,
        settings: &SheetsSettings,
    ) -> anyhow::Result<Self> {
        let response = client
            .get(&settings.discovery_url)
            .send()
            .await
            .context("Failed to request discovery document")?;

        if !response.status().is_success() {
            anyhow::bail!("Discovery request failed with status {}", response.status());
        }

        let doc = response
            .json::<DiscoveryDocument>()
            .await
            .context("Failed to parse discovery document")?;

        let root = if doc.root_url.ends_with('/') {
            doc.root_url
        } else {
            format!("{}/", doc.root_url)
        };

        Ok(Self {
            base_url: format!("{}{}", root, doc.service_path),
            api_key: settings.api_key.clone(),
        })
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str) -> String {
        format!(
            "{}v4/spreadsheets/{}/values/{}?majorDimension=ROWS&key={}",
            self.base_url,
            urlencoding::encode(spreadsheet_id),
            urlencoding::encode(range),
            urlencoding::encode(&self.api_key)
        )
    }
}

#[derive(Debug)]
pub struct GoogleSheetsSource {
    client: reqwest::Client,
    settings: SheetsSettings,
    /// Set by the first page load whose session start succeeds.
    session: OnceCell<SheetsSession>,
}

impl GoogleSheetsSource {
    pub fn new(settings: SheetsSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
            session: OnceCell::new(),
        }
    }

    /// One session attempt per call; a failure is left for the next page load.
    async fn session(&self) -> Result<&SheetsSession, FetchError> {
        self.session
            .get_or_try_init(|| async {
                match SheetsSession::connect(&self.client, &self.settings).await {
                    Ok(session) => {
                        tracing::info!("Sheets session ready at {}", session.base_url);
                        Ok(session)
                    }
                    Err(e) => {
                        tracing::warn!("Sheets session failed to initialize: {:#}", e);
                        Err(FetchError::SessionNotReady(format!("{:#}", e)))
                    }
                }
            })
            .await
    }
}

#[async_trait]
impl SheetSource for GoogleSheetsSource {
    async fn fetch(&self) -> Result<RawGrid, FetchError> {
        let session = self.session().await?;
        let range = &self.settings.range;

        let url = session.values_url(&self.settings.spreadsheet_id, range);
        tracing::debug!("Fetching range {} from spreadsheet", range);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await?;
        let value_range: ValueRange =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::debug!("Fetched {} rows", value_range.values.len());
        Ok(RawGrid::new(value_range.values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use crate::domain::error::error_chain;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    async fn spawn_server(build: impl FnOnce(String) -> Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let router = build(base.clone());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        base
    }

    async fn closed_port_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    fn discovery_route(root_url: String) -> Router {
        Router::new().route(
            "/discovery",
            get(move || {
                let root_url = root_url.clone();
                async move { Json(serde_json::json!({"rootUrl": root_url, "servicePath": ""})) }
            }),
        )
    }

    fn settings(base: &str) -> SheetsSettings {
        SheetsSettings {
            api_key: "test-key".to_string(),
            spreadsheet_id: "sheet-123".to_string(),
            range: "Sheet1!A1:D".to_string(),
            discovery_url: format!("{}/discovery", base),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_grid_unchanged() {
        let base = spawn_server(|base| {
            discovery_route(base).route(
                "/v4/spreadsheets/:id/values/:range",
                get(
                    |Path((id, range)): Path<(String, String)>,
                     Query(params): Query<HashMap<String, String>>| async move {
                        assert_eq!(id, "sheet-123");
                        assert_eq!(range, "Sheet1!A1:D");
                        assert_eq!(params.get("key").map(String::as_str), Some("test-key"));
                        Json(serde_json::json!({
                            "range": "Sheet1!A1:D3",
                            "majorDimension": "ROWS",
                            "values": [["T1", "T2"], ["1000", "2.5"], ["1060", "3.0"]]
                        }))
                    },
                ),
            )
        })
        .await;

        let source = GoogleSheetsSource::new(settings(&base));
        let grid = source.fetch().await.unwrap();

        assert_eq!(
            grid.rows,
            vec![
                vec!["T1".to_string(), "T2".to_string()],
                vec!["1000".to_string(), "2.5".to_string()],
                vec!["1060".to_string(), "3.0".to_string()],
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_range_decodes_to_empty_grid() {
        let base = spawn_server(|base| {
            discovery_route(base).route(
                "/v4/spreadsheets/:id/values/:range",
                get(|| async { Json(serde_json::json!({"range": "Sheet1", "majorDimension": "ROWS"})) }),
            )
        })
        .await;

        let source = GoogleSheetsSource::new(settings(&base));
        assert!(source.fetch().await.unwrap().rows.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let base = spawn_server(|base| {
            discovery_route(base).route(
                "/v4/spreadsheets/:id/values/:range",
                get(|| async { (StatusCode::BAD_REQUEST, "Unable to parse range") }),
            )
        })
        .await;

        let source = GoogleSheetsSource::new(settings(&base));
        match source.fetch().await {
            Err(FetchError::Status { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "Unable to parse range");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unexpected_body_is_decode_error() {
        let base = spawn_server(|base| {
            discovery_route(base).route(
                "/v4/spreadsheets/:id/values/:range",
                get(|| async { "<html>not json</html>" }),
            )
        })
        .await;

        let source = GoogleSheetsSource::new(settings(&base));
        assert!(matches!(source.fetch().await, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_discovery_leaves_session_not_ready() {
        let dead = closed_port_url().await;
        let source = GoogleSheetsSource::new(settings(&dead));
        assert!(matches!(
            source.fetch().await,
            Err(FetchError::SessionNotReady(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_values_endpoint_is_transport_error() {
        let dead = closed_port_url().await;
        let base = spawn_server(move |_| discovery_route(dead)).await;

        let source = GoogleSheetsSource::new(settings(&base));
        assert!(matches!(source.fetch().await, Err(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn test_session_starts_once_discovery_recovers() {
        let discovery_calls = Arc::new(AtomicUsize::new(0));
        let calls = discovery_calls.clone();
        let base = spawn_server(move |base| {
            Router::new()
                .route(
                    "/discovery",
                    get(move || {
                        let root_url = base.clone();
                        let attempt = calls.fetch_add(1, Ordering::SeqCst);
                        async move {
                            if attempt == 0 {
                                Err(StatusCode::SERVICE_UNAVAILABLE)
                            } else {
                                Ok(Json(serde_json::json!({"rootUrl": root_url})))
                            }
                        }
                    }),
                )
                .route(
                    "/v4/spreadsheets/:id/values/:range",
                    get(|| async { Json(serde_json::json!({"values": [["T1", "T2"]]})) }),
                )
        })
        .await;

        let source = GoogleSheetsSource::new(settings(&base));

        assert!(matches!(
            source.fetch().await,
            Err(FetchError::SessionNotReady(_))
        ));
        assert_eq!(source.fetch().await.unwrap().rows.len(), 1);
        assert_eq!(source.fetch().await.unwrap().rows.len(), 1);
        assert_eq!(discovery_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_transport_error_chain_keeps_cause_without_key() {
        let dead = closed_port_url().await;
        let base = spawn_server(move |_| discovery_route(dead)).await;

        let source = GoogleSheetsSource::new(settings(&base));
        let err = source.fetch().await.unwrap_err();

        let logged = error_chain(&err).to_lowercase();
        assert!(logged.starts_with("request to spreadsheet service failed: "));
        assert!(logged.contains("refused"), "cause missing from {:?}", logged);
        assert!(!logged.contains("test-key"));
    }

    #[test]
    fn test_values_url_encodes_range() {
        let session = SheetsSession {
            base_url: "https://sheets.googleapis.com/".to_string(),
            api_key: "k".to_string(),
        };
        assert_eq!(
            session.values_url("abc", "Sheet1!A1:F"),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/Sheet1%21A1%3AF?majorDimension=ROWS&key=k"
        );
    }
}
