use std::path::Path;

use insee_population::PopulationError;
use insee_population::import;
use insee_population::io::store::{PopulationStore, RecordSink};
use insee_population::io::workbook::{INFORMATION_SHEET, Workbook};
use insee_population::layout::resolve;
use insee_population::model::{AgeAggregation, CellAddress, Scope, Table, column_index};
use insee_population::reference::ReferenceTotals;
use insee_population::verify::{self, TableSelector};
use rust_xlsxwriter::{Workbook as XlsxWorkbook, Worksheet};
use tempfile::tempdir;

const REGIONAL_CLASS: Table = Table::new(Scope::Regional, AgeAggregation::Class);
const REGIONAL_QUINQUENNIAL: Table = Table::new(Scope::Regional, AgeAggregation::Quinquennial);

fn write_number(sheet: &mut Worksheet, address: CellAddress, value: f64) {
    let column = column_index(address.column).expect("valid column") as u16;
    sheet
        .write_number(address.row - 1, column, value)
        .expect("number written");
}

fn write_text(sheet: &mut Worksheet, address: CellAddress, value: &str) {
    let column = column_index(address.column).expect("valid column") as u16;
    sheet
        .write_string(address.row - 1, column, value)
        .expect("text written");
}

/// Writes `value` in every cell of every zone row of the base layout,
/// including rows the importer is expected to skip.
fn fill_year(sheet: &mut Worksheet, table: Table, year: i32, value: f64) {
    let descriptor = resolve(table.scope, table.aggregation, year);
    for zone in descriptor.zones {
        for column in descriptor.male.iter().chain(descriptor.female) {
            write_number(sheet, CellAddress::new(column.column, zone.row), value);
        }
    }
}

fn build_regional_class(path: &Path) {
    let mut workbook = XlsxWorkbook::new();

    let notes = workbook.add_worksheet();
    notes.set_name(INFORMATION_SHEET).expect("sheet named");
    notes.write_string(0, 0, "Estimations de population").expect("note written");

    for year in [2019, 2005, 1985] {
        let sheet = workbook.add_worksheet();
        sheet.set_name(year.to_string()).expect("sheet named");
        fill_year(sheet, REGIONAL_CLASS, year, 10.0);
        if year == 2019 {
            write_text(sheet, CellAddress::new("H", 6), "12.7");
            write_text(sheet, CellAddress::new("I", 6), "n.d.");
        }
    }

    workbook.save(path).expect("workbook saved");
}

fn prepared_store(table: Table) -> PopulationStore {
    let store = PopulationStore::open_in_memory().expect("store opened");
    store.prepare(table, false).expect("table prepared");
    store
}

#[test]
fn workbook_sheets_are_read_in_file_order() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("regionale-classe.xlsx");
    build_regional_class(&path);

    let workbook = Workbook::open(&path).expect("workbook opened");
    assert_eq!(workbook.sheet_count(), 4);
    assert_eq!(
        workbook.sheet_names().collect::<Vec<_>>(),
        vec![INFORMATION_SHEET, "2019", "2005", "1985"]
    );
    let years: Vec<i32> = workbook.year_sheets().map(|sheet| sheet.year).collect();
    assert_eq!(years, vec![2019, 2005, 1985]);
}

#[test]
fn regional_class_import_applies_row_skips_and_coercion() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("regionale-classe.xlsx");
    build_regional_class(&path);

    let mut store = prepared_store(REGIONAL_CLASS);
    let report = import::import_file(&path, REGIONAL_CLASS, &mut store).expect("import ran");

    assert_eq!(report.years, vec![2019, 2005, 1985]);
    assert_eq!(report.records, 180 + 170 + 130);

    assert_eq!(store.count_records(REGIONAL_CLASS, 2019).unwrap(), 180);
    assert_eq!(store.count_records(REGIONAL_CLASS, 2005).unwrap(), 170);
    assert_eq!(store.count_records(REGIONAL_CLASS, 1985).unwrap(), 130);

    // H6 holds "12.7" and I6 holds "n.d." for region 84 in 2019.
    assert_eq!(store.population(REGIONAL_CLASS, "84", 2019, 2, 1).unwrap(), Some(12));
    assert_eq!(store.population(REGIONAL_CLASS, "84", 2019, 2, 2).unwrap(), Some(0));
    assert_eq!(store.population(REGIONAL_CLASS, "84", 2019, 1, 1).unwrap(), Some(10));

    // Mayotte is filled in the 2005 sheet but not imported.
    assert_eq!(store.population(REGIONAL_CLASS, "06", 2005, 1, 1).unwrap(), None);
    assert_eq!(store.population(REGIONAL_CLASS, "06", 2019, 1, 1).unwrap(), Some(10));
    // No overseas region before 1990.
    assert_eq!(store.population(REGIONAL_CLASS, "01", 1985, 1, 1).unwrap(), None);
}

#[test]
fn verification_reports_only_differing_years() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("regionale-classe.xlsx");
    build_regional_class(&path);

    let mut store = prepared_store(REGIONAL_CLASS);
    import::import_file(&path, REGIONAL_CLASS, &mut store).expect("import ran");

    let entries: [(i32, i64); 4] = [(2019, 1800 - 20 + 12), (2005, 1700), (1985, 1300), (1975, 0)];
    let reference = ReferenceTotals::new(&entries);
    let outcome = verify::verify(&store, TableSelector::Single(REGIONAL_CLASS), &reference)
        .expect("verification ran");

    assert_eq!(outcome.checked, 4);
    let mismatches = outcome.mismatches;
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].year, 1975);
    assert_eq!(mismatches[0].actual, None);
}

#[test]
fn verification_of_all_tables_fails_on_missing_tables() {
    let store = prepared_store(REGIONAL_CLASS);
    let result = verify::verify(&store, TableSelector::All, &ReferenceTotals::national());
    assert!(matches!(result, Err(PopulationError::Database(_))));
}

#[test]
fn checking_a_mistyped_database_path_leaves_no_file_behind() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("populaton.sqlite");

    let result = PopulationStore::open_existing(&path).and_then(|store| {
        verify::verify(&store, TableSelector::All, &ReferenceTotals::national())
    });

    assert!(matches!(result, Err(PopulationError::MissingInput(missing)) if missing == path));
    assert!(!path.exists());
}

#[test]
fn checking_an_imported_database_file() {
    let temp_dir = tempdir().expect("temporary directory");
    let workbook_path = temp_dir.path().join("regionale-classe.xlsx");
    let database = temp_dir.path().join("population.sqlite");
    build_regional_class(&workbook_path);
    {
        let mut store = PopulationStore::open(&database).expect("database created");
        store.prepare(REGIONAL_CLASS, false).expect("table prepared");
        import::import_file(&workbook_path, REGIONAL_CLASS, &mut store).expect("import ran");
    }

    let store = PopulationStore::open_existing(&database).expect("database opened");
    let entries: [(i32, i64); 2] = [(2005, 1700), (1985, 1)];
    let outcome = verify::verify(
        &store,
        TableSelector::Single(REGIONAL_CLASS),
        &ReferenceTotals::new(&entries),
    )
    .expect("verification ran");

    assert_eq!(outcome.checked, 2);
    assert_eq!(outcome.mismatches.len(), 1);
    assert_eq!(outcome.mismatches[0].actual, Some(1300));
}

#[test]
fn national_check_flags_every_year_of_an_empty_table() {
    let store = prepared_store(REGIONAL_CLASS);
    let mismatches = verify::verify(
        &store,
        TableSelector::Single(REGIONAL_CLASS),
        &ReferenceTotals::national(),
    )
    .expect("verification ran")
    .mismatches;
    assert_eq!(mismatches.len(), 45);
    assert!(mismatches.iter().all(|mismatch| mismatch.actual.is_none()));
}

#[test]
fn rerunning_an_import_duplicates_records() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("regionale-classe.xlsx");
    build_regional_class(&path);

    let mut store = prepared_store(REGIONAL_CLASS);
    import::import_file(&path, REGIONAL_CLASS, &mut store).expect("first import");
    import::import_file(&path, REGIONAL_CLASS, &mut store).expect("second import");
    assert_eq!(store.count_records(REGIONAL_CLASS, 2019).unwrap(), 360);

    store.prepare(REGIONAL_CLASS, false).expect("table emptied");
    import::import_file(&path, REGIONAL_CLASS, &mut store).expect("third import");
    assert_eq!(store.count_records(REGIONAL_CLASS, 2019).unwrap(), 180);
}

#[test]
fn quinquennial_1998_sheet_is_read_with_shifted_rows() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("regionale-quinquennal.xlsx");

    let mut workbook = XlsxWorkbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("1998").expect("sheet named");
    fill_year(sheet, REGIONAL_QUINQUENNIAL, 1998, 1.0);
    // Reunion's first male band in the shifted layout.
    write_number(sheet, CellAddress::new("W", 26), 5000.0);
    workbook.save(&path).expect("workbook saved");

    let mut store = prepared_store(REGIONAL_QUINQUENNIAL);
    let report =
        import::import_file(&path, REGIONAL_QUINQUENNIAL, &mut store).expect("import ran");

    assert_eq!(report.records, 17 * 40);
    assert_eq!(
        store.population(REGIONAL_QUINQUENNIAL, "04", 1998, 2, 1).unwrap(),
        Some(5000)
    );
    assert_eq!(
        store.population(REGIONAL_QUINQUENNIAL, "06", 1998, 2, 1).unwrap(),
        None
    );
}

#[test]
fn missing_input_is_reported_before_any_load() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("departementale-classe.xls");
    let table = Table::new(Scope::Departmental, AgeAggregation::Class);

    let mut store = prepared_store(table);
    let error = import::import_file(&path, table, &mut store).unwrap_err();
    assert!(matches!(error, PopulationError::MissingInput(missing) if missing == path));

    let written = store.load(table, std::iter::empty()).expect("empty load");
    assert_eq!(written, 0);
    assert_eq!(store.count_records(table, 2019).unwrap(), 0);
}
