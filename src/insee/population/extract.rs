use calamine::DataType;

use crate::insee::population::io::workbook::CellSource;
use crate::insee::population::layout::{CoordinateDescriptor, skip_row};
use crate::insee::population::model::{CellAddress, PopulationRecord, Scope, Sex};

/// Walks `descriptor` over one year sheet and yields its population records.
///
/// For every zone row kept by [`skip_row`], the male columns are read first,
/// then the female columns. Cells that are missing, out of range or
/// unreadable yield a population of zero. The iterator is lazy and only reads
/// from `sheet`.
pub fn extract<'a, S>(
    sheet: &'a S,
    descriptor: CoordinateDescriptor,
    scope: Scope,
    year: i32,
) -> impl Iterator<Item = PopulationRecord> + 'a
where
    S: CellSource + ?Sized,
{
    descriptor
        .zones
        .iter()
        .filter(move |zone| !skip_row(scope, year, zone.row))
        .flat_map(move |zone| {
            let male = descriptor.male.iter().map(|column| (Sex::Male, column));
            let female = descriptor.female.iter().map(|column| (Sex::Female, column));
            male.chain(female).map(move |(sex, column)| {
                let address = CellAddress::new(column.column, zone.row);
                PopulationRecord {
                    region: zone.code,
                    year,
                    sex,
                    age: column.band,
                    population: coerce_population(sheet.cell(address)),
                }
            })
        })
}

/// Number of records [`extract`] yields for `descriptor` in `year`.
pub fn expected_record_count(descriptor: &CoordinateDescriptor, scope: Scope, year: i32) -> usize {
    let rows = descriptor
        .zones
        .iter()
        .filter(|zone| !skip_row(scope, year, zone.row))
        .count();
    rows * (descriptor.male.len() + descriptor.female.len())
}

/// Converts a cell into a population count.
///
/// Numbers are truncated toward zero, including cells carrying a date or
/// duration format, which are read as their serial value. Text is read as a
/// leading decimal number ("12.7" gives 12, "42 hab." gives 42); anything
/// else gives 0.
pub fn coerce_population(cell: Option<&DataType>) -> i64 {
    match cell {
        Some(DataType::Int(value)) => *value,
        Some(DataType::Float(value))
        | Some(DataType::DateTime(value))
        | Some(DataType::Duration(value)) => truncate(*value),
        Some(DataType::String(text)) => leading_integer(text),
        Some(DataType::Bool(value)) => i64::from(*value),
        _ => 0,
    }
}

fn truncate(value: f64) -> i64 {
    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

fn leading_integer(text: &str) -> i64 {
    let text = text.trim();
    if let Ok(value) = text.parse::<f64>() {
        if value.is_finite() {
            return truncate(value);
        }
    }

    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        return 0;
    }
    text[..sign + digits].parse().unwrap_or(0)
}
