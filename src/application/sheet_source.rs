// Source trait for spreadsheet data access
use crate::domain::error::FetchError;
use crate::domain::grid::RawGrid;
use async_trait::async_trait;

#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Read the configured range once. No retry on failure.
    async fn fetch(&self) -> Result<RawGrid, FetchError>;
}
