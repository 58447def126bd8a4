// Rendering and host page boundaries
use crate::domain::chart::{AxisConfig, ChartDataset};
use crate::domain::page::Container;

/// Draws a chart into a container.
pub trait ChartRenderer: Send + Sync {
    /// `datasets` are in stacking/legend order.
    fn render(&self, container: &mut Container, datasets: &[ChartDataset], axis: &AxisConfig);
}

/// The page hosting the widget.
pub trait HostPage {
    fn container(&mut self, id: &str) -> Option<&mut Container>;
}
