use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, PopulationError>;

/// Error type covering the failures that abort an import, a schema
/// preparation, or a verification run.
///
/// Unreadable cells are not represented here: they are coerced to zero by the
/// extraction engine so that imperfect historical sheets still load.
#[derive(Debug, Error)]
pub enum PopulationError {
    /// Wrapper for IO failures while inspecting a path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization of a report fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the spreadsheet reader.
    #[error("spreadsheet read error: {0}")]
    Workbook(#[from] calamine::Error),

    /// Errors bubbled up from the database connection or a query.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Raised when the workbook lists a sheet that cannot be loaded.
    #[error("missing sheet '{0}' in workbook")]
    MissingSheet(String),

    /// Raised when a workbook or database path given by the user does not
    /// exist.
    #[error("file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the environment holds an unusable configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Raised when a table selector is neither `all` nor one of the four
/// population tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unrecognised table '{0}' (expected all or [regionale|departementale]_[classe|quinquennal])"
)]
pub struct UnknownTable(pub String);
