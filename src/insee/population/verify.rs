use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::insee::population::error::{Result, UnknownTable};
use crate::insee::population::io::store::PopulationTotals;
use crate::insee::population::model::Table;
use crate::insee::population::progress::Progress;
use crate::insee::population::reference::ReferenceTotals;

/// Tables covered by a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableSelector {
    #[default]
    All,
    Single(Table),
}

impl TableSelector {
    pub fn tables(self) -> Vec<Table> {
        match self {
            TableSelector::All => Table::ALL.to_vec(),
            TableSelector::Single(table) => vec![table],
        }
    }
}

impl FromStr for TableSelector {
    type Err = UnknownTable;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        if value == "all" {
            Ok(TableSelector::All)
        } else {
            value.parse().map(TableSelector::Single)
        }
    }
}

impl fmt::Display for TableSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSelector::All => f.write_str("all"),
            TableSelector::Single(table) => write!(f, "{table}"),
        }
    }
}

/// A stored yearly total that differs from the published one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub table: Table,
    pub year: i32,
    /// Stored sum, `None` when the table holds no row for the year.
    pub actual: Option<i64>,
    pub expected: i64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actual = self.actual.map(|value| value.to_string()).unwrap_or_default();
        write!(
            f,
            "population total of {} for year {} does not match (DB={} != {})",
            self.table, self.year, actual, self.expected
        )
    }
}

/// Outcome of a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    /// Number of (table, year) pairs compared.
    pub checked: usize,
    pub mismatches: Vec<Mismatch>,
}

/// Compares stored yearly sums with `reference` for every selected table
/// and year, and returns every difference found.
///
/// A year with no stored row is a mismatch, even against a zero reference.
/// All pairs are checked; mismatches never stop the run.
#[instrument(level = "info", skip_all, fields(selector = %selector))]
pub fn verify<T>(
    totals: &T,
    selector: TableSelector,
    reference: &ReferenceTotals<'_>,
) -> Result<Verification>
where
    T: PopulationTotals + ?Sized,
{
    let tables = selector.tables();
    let mut progress = Progress::new("check", tables.len() * reference.len());
    let mut mismatches = Vec::new();

    for table in tables {
        for (year, expected) in reference.iter() {
            let actual = totals.population_total(table, year)?;
            if actual != Some(expected) {
                let mismatch = Mismatch {
                    table,
                    year,
                    actual,
                    expected,
                };
                warn!(%table, year, ?actual, expected, "population total mismatch");
                mismatches.push(mismatch);
            }
            progress.advance(format_args!("{table} {year}"));
        }
    }

    info!(
        checked = progress.current(),
        planned = progress.total(),
        mismatches = mismatches.len(),
        "verification finished"
    );
    Ok(Verification {
        checked: progress.current(),
        mismatches,
    })
}
