// Application layer - Use cases and the seams to external services
pub mod chart_renderer;
pub mod chart_widget;
pub mod error_presentation;
pub mod series_builder;
pub mod sheet_source;
