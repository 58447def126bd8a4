// Domain layer - Pure types with no I/O
pub mod chart;
pub mod error;
pub mod grid;
pub mod page;
pub mod series;
