// Infrastructure layer - External dependencies and adapters
pub mod chartjs_renderer;
pub mod config;
pub mod sheets_source;
