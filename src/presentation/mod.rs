// Presentation layer - HTTP surface and the host page
pub mod app_state;
pub mod handlers;
pub mod page;
