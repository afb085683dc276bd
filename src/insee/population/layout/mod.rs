//! Year- and variant-aware coordinates of the population workbooks.
//!
//! A [`CoordinateDescriptor`] tells the extraction engine which rows hold
//! which region and which columns hold which age band for each sex. The
//! descriptors are static tables; [`resolve`] picks the one matching a
//! dataset variant and year, and [`skip_row`] filters rows whose data the
//! source does not publish for that year.

mod tables;

use crate::insee::population::model::{AgeAggregation, Scope};

/// Maps a worksheet row to an INSEE region or department code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub row: u32,
    pub code: &'static str,
}

/// Maps a worksheet column to an age band ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeColumn {
    pub column: &'static str,
    pub band: u8,
}

/// Row and column layout of one year sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateDescriptor {
    pub zones: &'static [Zone],
    pub male: &'static [AgeColumn],
    pub female: &'static [AgeColumn],
}

/// Year whose quinquennial sheets use a shifted row layout.
pub const SHIFTED_LAYOUT_YEAR: i32 = 1998;

/// First year without overseas rows in the source.
pub const OVERSEAS_SERIES_START: i32 = 1990;

/// Mayotte is missing from the sheets in `(1998, 2013]`.
pub const MAYOTTE_GAP: (i32, i32) = (1998, 2013);

/// Selects the descriptor for a dataset variant and year.
///
/// Every call returns a fully formed descriptor; the 1998 layouts are
/// alternate tables rather than patches applied to the base one.
pub fn resolve(scope: Scope, aggregation: AgeAggregation, year: i32) -> CoordinateDescriptor {
    let (male, female) = age_columns(scope, aggregation);
    CoordinateDescriptor {
        zones: zones(scope, aggregation, year),
        male,
        female,
    }
}

fn zones(scope: Scope, aggregation: AgeAggregation, year: i32) -> &'static [Zone] {
    let shifted = aggregation == AgeAggregation::Quinquennial && year == SHIFTED_LAYOUT_YEAR;
    match (scope, shifted) {
        (Scope::Regional, false) => tables::REGIONAL_ZONES,
        (Scope::Regional, true) => tables::REGIONAL_ZONES_QUINQUENNIAL_1998,
        (Scope::Departmental, false) => tables::DEPARTMENTAL_ZONES,
        (Scope::Departmental, true) => tables::DEPARTMENTAL_ZONES_QUINQUENNIAL_1998,
    }
}

fn age_columns(
    scope: Scope,
    aggregation: AgeAggregation,
) -> (&'static [AgeColumn], &'static [AgeColumn]) {
    match (scope, aggregation) {
        (Scope::Regional, AgeAggregation::Class) => {
            (tables::REGIONAL_CLASS_MALE, tables::REGIONAL_CLASS_FEMALE)
        }
        (Scope::Regional, AgeAggregation::Quinquennial) => (
            tables::REGIONAL_QUINQUENNIAL_MALE,
            tables::REGIONAL_QUINQUENNIAL_FEMALE,
        ),
        (Scope::Departmental, AgeAggregation::Class) => (
            tables::DEPARTMENTAL_CLASS_MALE,
            tables::DEPARTMENTAL_CLASS_FEMALE,
        ),
        (Scope::Departmental, AgeAggregation::Quinquennial) => (
            tables::DEPARTMENTAL_QUINQUENNIAL_MALE,
            tables::DEPARTMENTAL_QUINQUENNIAL_FEMALE,
        ),
    }
}

/// Row holding Mayotte in the base layout of each scope.
fn mayotte_row(scope: Scope) -> u32 {
    match scope {
        Scope::Regional => 24,
        Scope::Departmental => 107,
    }
}

/// Last metropolitan row in the base layout of each scope.
fn last_metropolitan_row(scope: Scope) -> u32 {
    match scope {
        Scope::Regional => 18,
        Scope::Departmental => 101,
    }
}

/// True when the Mayotte row must be skipped because the territory is not
/// published for `year`.
pub fn mayotte_missing(scope: Scope, year: i32, row: u32) -> bool {
    let (after, through) = MAYOTTE_GAP;
    year > after && year <= through && row == mayotte_row(scope)
}

/// True when `row` lies past the metropolitan block in a year that predates
/// the overseas series.
pub fn before_overseas_series(scope: Scope, year: i32, row: u32) -> bool {
    year < OVERSEAS_SERIES_START && row > last_metropolitan_row(scope)
}

/// Row-skip rule applied during extraction.
///
/// Rules are keyed by row number, not by region code, and use the base
/// layout's row numbers even when a shifted layout is active.
pub fn skip_row(scope: Scope, year: i32, row: u32) -> bool {
    mayotte_missing(scope, year, row) || before_overseas_series(scope, year, row)
}
