use std::path::Path;

use calamine::{DataType, Range, Reader, open_workbook_auto};
use tracing::{debug, warn};

use crate::insee::population::error::{PopulationError, Result};
use crate::insee::population::model::CellAddress;

/// Sheet of notes shipped at the front of every INSEE population file.
pub const INFORMATION_SHEET: &str = "À savoir";

/// Cell lookup by spreadsheet address.
pub trait CellSource {
    /// Returns the cell at `address`, or `None` when the address is malformed
    /// or outside the populated range.
    fn cell(&self, address: CellAddress) -> Option<&DataType>;
}

impl CellSource for Range<DataType> {
    fn cell(&self, address: CellAddress) -> Option<&DataType> {
        self.get_value(address.position()?)
    }
}

/// A named worksheet loaded in memory.
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub name: String,
    pub cells: Range<DataType>,
}

/// A year sheet: the worksheet cells and the year parsed from its name.
#[derive(Debug, Clone, Copy)]
pub struct YearSheet<'a> {
    pub year: i32,
    pub cells: &'a Range<DataType>,
}

/// A workbook read fully into memory, sheets kept in file order.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Worksheet>,
}

impl Workbook {
    /// Opens an `.xls`, `.xlsx`, `.xlsb` or `.ods` file and loads every sheet.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PopulationError::MissingInput(path.to_path_buf()));
        }

        let mut reader = open_workbook_auto(path)?;
        let names = reader.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(names.len());

        for name in names {
            let cells = reader
                .worksheet_range(&name)
                .ok_or_else(|| PopulationError::MissingSheet(name.clone()))??;
            debug!(sheet = %name, rows = cells.height(), columns = cells.width(), "loaded sheet");
            sheets.push(Worksheet { name, cells });
        }

        Ok(Self { sheets })
    }

    /// Builds a workbook from sheets already in memory.
    pub fn from_sheets(sheets: Vec<Worksheet>) -> Self {
        Self { sheets }
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Sheet names in file order.
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str())
    }

    /// Sheets named after a year, in file order.
    ///
    /// The information sheet is excluded. Any other sheet whose name is not a
    /// year is logged and skipped.
    pub fn year_sheets(&self) -> impl Iterator<Item = YearSheet<'_>> {
        self.sheets.iter().filter_map(|sheet| {
            if sheet.name == INFORMATION_SHEET {
                return None;
            }
            match sheet.name.trim().parse::<i32>() {
                Ok(year) => Some(YearSheet {
                    year,
                    cells: &sheet.cells,
                }),
                Err(_) => {
                    warn!(sheet = %sheet.name, "ignoring sheet that is not named after a year");
                    None
                }
            }
        })
    }
}
