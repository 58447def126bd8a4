// Error taxonomy for the chart pipeline
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// The spreadsheet read failed or could not be issued.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("spreadsheet session is not ready: {0}")]
    SessionNotReady(String),

    #[error("request to spreadsheet service failed")]
    Transport(#[source] reqwest::Error),

    #[error("spreadsheet service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode spreadsheet response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    /// The request URL carries the API key, so it is stripped.
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.without_url())
    }
}

/// Display of an error followed by each of its sources, joined by ": ".
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Structural problems with the grid as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGridError {
    #[error("grid is empty: a header row with at least one cell is required")]
    Empty,

    #[error("grid must have an even number of columns, found {columns}")]
    OddColumnCount { columns: usize },

    #[error("row {row} has {found} cells but the header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Timestamp,
    Value,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Timestamp => f.write_str("timestamp"),
            CellKind::Value => f.write_str("value"),
        }
    }
}

/// A data cell that could not be read as its column's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {kind} cell at row {row}, column {column}: {content:?}")]
pub struct CellParseError {
    pub row: usize,
    pub column: usize,
    pub kind: CellKind,
    pub content: String,
}

/// Everything that can stop a chart from being shown.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    MalformedGrid(#[from] MalformedGridError),

    #[error(transparent)]
    CellParse(#[from] CellParseError),
}

/// Failures of the series builder alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    MalformedGrid(#[from] MalformedGridError),

    #[error(transparent)]
    CellParse(#[from] CellParseError),
}

impl From<BuildError> for ChartError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::MalformedGrid(e) => ChartError::MalformedGrid(e),
            BuildError::CellParse(e) => ChartError::CellParse(e),
        }
    }
}
