use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::insee::population::error::UnknownTable;

/// Geographic breakdown of a population dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// One row per region.
    Regional,
    /// One row per department.
    Departmental,
}

impl Scope {
    /// Both scopes, in table order.
    pub const ALL: [Scope; 2] = [Scope::Regional, Scope::Departmental];

    /// Name used in file names and table names.
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Regional => "regionale",
            Scope::Departmental => "departementale",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How ages are grouped into bands in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeAggregation {
    /// Five broad bands: 0-19, 20-39, 40-59, 60-74, 75+.
    Class,
    /// Twenty five-year bands: 0-4, 5-9, ..., 90-94, 95+.
    Quinquennial,
}

impl AgeAggregation {
    /// Both aggregation modes, in table order.
    pub const ALL: [AgeAggregation; 2] = [AgeAggregation::Class, AgeAggregation::Quinquennial];

    /// Name used in file names and table names.
    pub fn as_str(self) -> &'static str {
        match self {
            AgeAggregation::Class => "classe",
            AgeAggregation::Quinquennial => "quinquennal",
        }
    }

    /// Number of age bands per sex.
    pub fn band_count(self) -> usize {
        match self {
            AgeAggregation::Class => 5,
            AgeAggregation::Quinquennial => 20,
        }
    }
}

impl fmt::Display for AgeAggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sex as encoded in the destination tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Stored code: 1 for women, 2 for men.
    pub fn code(self) -> u8 {
        match self {
            Sex::Female => 1,
            Sex::Male => 2,
        }
    }
}

/// One of the four destination tables, keyed by scope and aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Table {
    pub scope: Scope,
    pub aggregation: AgeAggregation,
}

impl Table {
    /// The four tables in the order verification walks them.
    pub const ALL: [Table; 4] = [
        Table::new(Scope::Regional, AgeAggregation::Class),
        Table::new(Scope::Regional, AgeAggregation::Quinquennial),
        Table::new(Scope::Departmental, AgeAggregation::Class),
        Table::new(Scope::Departmental, AgeAggregation::Quinquennial),
    ];

    pub const fn new(scope: Scope, aggregation: AgeAggregation) -> Self {
        Self { scope, aggregation }
    }

    /// SQL table name, `{scope}_{aggregation}`.
    pub fn name(self) -> &'static str {
        match (self.scope, self.aggregation) {
            (Scope::Regional, AgeAggregation::Class) => "regionale_classe",
            (Scope::Regional, AgeAggregation::Quinquennial) => "regionale_quinquennal",
            (Scope::Departmental, AgeAggregation::Class) => "departementale_classe",
            (Scope::Departmental, AgeAggregation::Quinquennial) => "departementale_quinquennal",
        }
    }

    /// Conventional source file name, `{scope}-{aggregation}.xls`.
    pub fn file_name(self) -> String {
        format!("{}-{}.xls", self.scope, self.aggregation)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = UnknownTable;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|table| table.name() == value)
            .ok_or_else(|| UnknownTable(value.to_string()))
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A cell coordinate as written in the workbook: column letters and a
/// 1-based row number, e.g. `AB` + `12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAddress {
    pub column: &'static str,
    pub row: u32,
}

impl CellAddress {
    pub fn new(column: &'static str, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based `(row, column)` position, or `None` when the address is
    /// malformed (row 0, empty or non-alphabetic column).
    pub fn position(&self) -> Option<(u32, u32)> {
        let row = self.row.checked_sub(1)?;
        let column = column_index(self.column)?;
        Some((row, column))
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

/// Decodes spreadsheet column letters into a zero-based index: `A` is 0,
/// `Z` is 25, `AA` is 26.
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut index: u32 = 0;
    for letter in letters.chars() {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let digit = letter.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }
    Some(index - 1)
}

/// One stored population figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationRecord {
    /// INSEE region or department code.
    pub region: &'static str,
    pub year: i32,
    pub sex: Sex,
    /// Age band ordinal, starting at 1.
    pub age: u8,
    pub population: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters_decode_to_zero_based_indexes() {
        assert_eq!(column_index("A"), Some(0));
        assert_eq!(column_index("H"), Some(7));
        assert_eq!(column_index("Z"), Some(25));
        assert_eq!(column_index("AA"), Some(26));
        assert_eq!(column_index("AP"), Some(41));
        assert_eq!(column_index("BL"), Some(63));
        assert_eq!(column_index("bl"), Some(63));
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("A1"), None);
    }

    #[test]
    fn address_position_is_row_major_and_zero_based() {
        assert_eq!(CellAddress::new("H", 6).position(), Some((5, 7)));
        assert_eq!(CellAddress::new("H", 0).position(), None);
        assert_eq!(CellAddress::new("AA", 24).to_string(), "AA24");
    }

    #[test]
    fn table_names_round_trip_through_from_str() {
        for table in Table::ALL {
            assert_eq!(table.name().parse::<Table>(), Ok(table));
        }
        assert_eq!(
            "regionale".parse::<Table>(),
            Err(UnknownTable("regionale".into()))
        );
    }

    #[test]
    fn file_names_follow_scope_and_aggregation() {
        let table = Table::new(Scope::Departmental, AgeAggregation::Quinquennial);
        assert_eq!(table.file_name(), "departementale-quinquennal.xls");
        assert_eq!(table.name(), "departementale_quinquennal");
    }

    #[test]
    fn sex_codes_match_storage_convention() {
        assert_eq!(Sex::Female.code(), 1);
        assert_eq!(Sex::Male.code(), 2);
    }
}
