use std::path::Path;

use tracing::{debug, info, instrument};

use crate::insee::population::error::Result;
use crate::insee::population::extract::{expected_record_count, extract};
use crate::insee::population::io::store::RecordSink;
use crate::insee::population::io::workbook::Workbook;
use crate::insee::population::layout::resolve;
use crate::insee::population::model::Table;
use crate::insee::population::progress::Progress;

/// Outcome of importing one workbook into its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub table: Table,
    /// Year sheets imported, in file order.
    pub years: Vec<i32>,
    pub records: usize,
}

/// Loads the workbook at `path` and imports every year sheet into `table`.
#[instrument(level = "info", skip_all, fields(input = %path.display(), table = %table))]
pub fn import_file<S>(path: &Path, table: Table, sink: &mut S) -> Result<ImportReport>
where
    S: RecordSink,
{
    let workbook = Workbook::open(path)?;
    info!(sheet_count = workbook.sheet_count(), "workbook loaded");
    import_workbook(&workbook, table, sink)
}

/// Runs resolve, extract and load for each year sheet of `workbook`.
///
/// Sheets are loaded one at a time; a failure leaves earlier years in the
/// sink.
pub fn import_workbook<S>(workbook: &Workbook, table: Table, sink: &mut S) -> Result<ImportReport>
where
    S: RecordSink,
{
    let sheets: Vec<_> = workbook.year_sheets().collect();
    let mut progress = Progress::new("import", sheets.len());
    let mut report = ImportReport {
        table,
        years: Vec::with_capacity(sheets.len()),
        records: 0,
    };

    for sheet in sheets {
        let descriptor = resolve(table.scope, table.aggregation, sheet.year);
        let records = extract(sheet.cells, descriptor, table.scope, sheet.year);
        let written = sink.load(table, records)?;
        debug!(
            year = sheet.year,
            written,
            expected = expected_record_count(&descriptor, table.scope, sheet.year),
            "year imported"
        );

        report.years.push(sheet.year);
        report.records += written;
        progress.advance(format_args!("year {}", sheet.year));
    }

    info!(
        years = report.years.len(),
        records = report.records,
        "import finished"
    );
    Ok(report)
}
