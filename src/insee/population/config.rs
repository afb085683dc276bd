use std::path::{Path, PathBuf};

use tracing::debug;

use crate::insee::population::error::{PopulationError, Result};
use crate::insee::population::model::Table;

/// Environment variable naming the SQLite database file.
pub const DATABASE_ENV: &str = "POPULATION_DATABASE";
/// Environment variable naming the directory holding the source workbooks.
pub const INPUT_DIR_ENV: &str = "POPULATION_INPUT_DIR";

pub const DEFAULT_DATABASE: &str = "population.sqlite";
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Loads `.env` from the working directory into the process environment.
///
/// A missing file is not an error; a malformed one is.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded environment file");
            Ok(Some(path))
        }
        Err(error) if error.not_found() => Ok(None),
        Err(error) => Err(PopulationError::Config(error.to_string())),
    }
}

/// Where the tool reads workbooks from and writes records to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: PathBuf,
    pub input_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
        }
    }
}

impl Settings {
    pub fn new(database: impl Into<PathBuf>, input_dir: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
            input_dir: input_dir.into(),
        }
    }

    /// Conventional location of the workbook feeding `table`.
    pub fn input_path(&self, table: Table) -> PathBuf {
        self.input_dir.join(table.file_name())
    }

    /// `file` when given, the conventional location otherwise.
    pub fn resolve_input(&self, table: Table, file: Option<&Path>) -> PathBuf {
        file.map(Path::to_path_buf)
            .unwrap_or_else(|| self.input_path(table))
    }
}
