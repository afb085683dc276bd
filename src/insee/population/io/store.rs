use std::io::ErrorKind;
use std::path::Path;

use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use tracing::{debug, info, instrument};

use crate::insee::population::error::{PopulationError, Result};
use crate::insee::population::model::{PopulationRecord, Table};

/// Destination of extracted population records.
///
/// No uniqueness is enforced: loading the same records twice stores them
/// twice. Callers empty the table first when a rerun must be idempotent.
pub trait RecordSink {
    /// Appends `records` to `table` in order and returns how many were written.
    fn load<I>(&mut self, table: Table, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = PopulationRecord>;
}

/// Source of stored population sums, queried by verification.
pub trait PopulationTotals {
    /// `SUM(population)` for `year` in `table`, `None` when the table has no
    /// row for that year.
    fn population_total(&self, table: Table, year: i32) -> Result<Option<i64>>;
}

/// What schema preparation did to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// The table did not exist and was created.
    Created,
    /// The table existed and its rows were deleted.
    Emptied,
    /// The table existed and was dropped and created again.
    Recreated,
}

/// SQLite database holding the four population tables.
pub struct PopulationStore {
    conn: Connection,
}

impl PopulationStore {
    /// Opens or creates the database file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        debug!(database = %path.display(), "opened population database");
        Ok(Self { conn })
    }

    /// Opens the database file at `path` read-only. A missing file is
    /// reported instead of being created.
    pub fn open_existing(path: &Path) -> Result<Self> {
        match std::fs::metadata(path) {
            Ok(_) => {}
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Err(PopulationError::MissingInput(path.to_path_buf()));
            }
            Err(error) => return Err(error.into()),
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(database = %path.display(), "opened population database read-only");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    pub fn table_exists(&self, table: Table) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table.name()],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn create_table(&self, table: Table) -> Result<()> {
        let name = table.name();
        self.conn.execute_batch(&format!(
            "CREATE TABLE {name} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                region VARCHAR(3) NOT NULL,
                annee SMALLINT NOT NULL,
                sexe TINYINT NOT NULL,
                age TINYINT NOT NULL,
                population INTEGER NOT NULL
            );
            CREATE INDEX {name}_region ON {name} (region);
            CREATE INDEX {name}_annee ON {name} (annee);"
        ))?;
        Ok(())
    }

    pub fn drop_table(&self, table: Table) -> Result<()> {
        self.conn
            .execute_batch(&format!("DROP TABLE IF EXISTS {}", table.name()))?;
        Ok(())
    }

    /// Deletes every row of `table` and returns how many were removed.
    pub fn truncate(&self, table: Table) -> Result<usize> {
        let removed = self
            .conn
            .execute(&format!("DELETE FROM {}", table.name()), [])?;
        Ok(removed)
    }

    /// Makes `table` ready for an import: creates it when missing, otherwise
    /// empties it, dropping and recreating it first when `remove` is set.
    #[instrument(level = "info", skip_all, fields(table = %table, remove = remove))]
    pub fn prepare(&self, table: Table, remove: bool) -> Result<TableAction> {
        if !self.table_exists(table)? {
            self.create_table(table)?;
            info!("table created");
            return Ok(TableAction::Created);
        }

        if remove {
            self.drop_table(table)?;
            self.create_table(table)?;
            info!("table recreated");
            return Ok(TableAction::Recreated);
        }

        let removed = self.truncate(table)?;
        info!(removed, "table emptied");
        Ok(TableAction::Emptied)
    }

    /// Number of rows stored for `year` in `table`.
    pub fn count_records(&self, table: Table, year: i32) -> Result<i64> {
        let count = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {} WHERE annee = ?1", table.name()),
            params![year],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Population stored for one region, year, sex and age band.
    pub fn population(
        &self,
        table: Table,
        region: &str,
        year: i32,
        sex: u8,
        age: u8,
    ) -> Result<Option<i64>> {
        let population = self
            .conn
            .query_row(
                &format!(
                    "SELECT population FROM {} \
                     WHERE region = ?1 AND annee = ?2 AND sexe = ?3 AND age = ?4",
                    table.name()
                ),
                params![region, year, sex, age],
                |row| row.get(0),
            )
            .optional()?;
        Ok(population)
    }
}

impl RecordSink for PopulationStore {
    /// Inserts the records of one call inside a single transaction. Earlier
    /// calls stay committed if a later one fails.
    fn load<I>(&mut self, table: Table, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = PopulationRecord>,
    {
        let tx = self.conn.transaction()?;
        let mut written = 0;
        {
            let mut stmt = tx.prepare_cached(&format!(
                "INSERT INTO {} (region, annee, sexe, age, population) VALUES (?1, ?2, ?3, ?4, ?5)",
                table.name()
            ))?;
            for record in records {
                stmt.execute(params![
                    record.region,
                    record.year,
                    record.sex.code(),
                    record.age,
                    record.population,
                ])?;
                written += 1;
            }
        }
        tx.commit()?;
        Ok(written)
    }
}

impl PopulationTotals for PopulationStore {
    fn population_total(&self, table: Table, year: i32) -> Result<Option<i64>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT SUM(population) FROM {} WHERE annee = ?1",
            table.name()
        ))?;
        let total = stmt.query_row(params![year], |row| row.get::<_, Option<i64>>(0))?;
        Ok(total)
    }
}
