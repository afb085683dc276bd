use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use insee_population::config::{self, Settings};
use insee_population::import;
use insee_population::io::store::{PopulationStore, TableAction};
use insee_population::model::{AgeAggregation, Scope, Table};
use insee_population::reference::ReferenceTotals;
use insee_population::sources;
use insee_population::verify::{self, TableSelector};
use insee_population::{PopulationError, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(error) = config::load_dotenv().and_then(|_| init_tracing()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| PopulationError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::new(cli.database, cli.input_dir);
    match cli.command {
        Command::Import(args) => execute_import(&settings, args),
        Command::Prepare(args) => execute_prepare(&settings, args),
        Command::Check(args) => execute_check(&settings, args),
        Command::Sources => execute_sources(&settings),
    }
}

fn execute_import(settings: &Settings, args: ImportArgs) -> Result<()> {
    let table = Table::new(args.scope.into(), args.age.into());
    let input = settings.resolve_input(table, args.file.as_deref());
    if !input.exists() {
        return Err(PopulationError::MissingInput(input));
    }

    let mut store = PopulationStore::open(&settings.database)?;
    if args.truncate {
        store.prepare(table, false)?;
    } else if !store.table_exists(table)? {
        store.create_table(table)?;
        info!(%table, "created missing table");
    }

    let report = import::import_file(&input, table, &mut store)?;
    println!(
        "{}: {} records imported from {} year sheets",
        report.table,
        report.records,
        report.years.len()
    );
    Ok(())
}

fn execute_prepare(settings: &Settings, args: PrepareArgs) -> Result<()> {
    let store = PopulationStore::open(&settings.database)?;
    let tables = match args.table {
        Some(table) => vec![table],
        None => Table::ALL.to_vec(),
    };

    for table in tables {
        let action = store.prepare(table, args.remove)?;
        let outcome = match action {
            TableAction::Created => "created",
            TableAction::Emptied => "emptied",
            TableAction::Recreated => "recreated",
        };
        println!("table {table}: {outcome}");
    }
    Ok(())
}

fn execute_check(settings: &Settings, args: CheckArgs) -> Result<()> {
    let store = PopulationStore::open_existing(&settings.database)?;
    let outcome = verify::verify(&store, args.table, &ReferenceTotals::national())?;

    match args.format {
        OutputFormat::Text => {
            for mismatch in &outcome.mismatches {
                println!("{mismatch}");
            }
            info!(checked = outcome.checked, "check complete");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }
    Ok(())
}

fn execute_sources(settings: &Settings) -> Result<()> {
    println!("source: {}", sources::PUBLICATION_PAGE);
    for table in Table::ALL {
        println!(
            "{}\t{}",
            settings.input_path(table).display(),
            sources::download_url(table)
        );
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Import INSEE regional and departmental population estimates into SQLite."
)]
struct Cli {
    /// SQLite database file.
    #[arg(long, global = true, env = config::DATABASE_ENV, default_value = config::DEFAULT_DATABASE)]
    database: PathBuf,

    /// Directory holding the `{type}-{age}.xls` source workbooks.
    #[arg(long, global = true, env = config::INPUT_DIR_ENV, default_value = config::DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import one population workbook into its table.
    Import(ImportArgs),
    /// Create the population tables, or empty them when they exist.
    Prepare(PrepareArgs),
    /// Compare stored yearly totals with the published national figures.
    Check(CheckArgs),
    /// List the expected input files and where INSEE publishes them.
    Sources,
}

#[derive(clap::Args)]
struct ImportArgs {
    /// Population breakdown.
    #[arg(value_enum)]
    scope: ScopeKind,

    /// Age aggregation mode.
    #[arg(long, value_enum, default_value_t = AgeKind::Classe)]
    age: AgeKind,

    /// Workbook to read instead of the conventional file in the input directory.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Empty the destination table before importing.
    #[arg(long)]
    truncate: bool,
}

#[derive(clap::Args)]
struct PrepareArgs {
    /// Drop and recreate tables that already exist.
    #[arg(long)]
    remove: bool,

    /// Only prepare this table, e.g. `regionale_classe`.
    #[arg(long)]
    table: Option<Table>,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// `all` or a single table name.
    #[arg(long, default_value = "all")]
    table: TableSelector,

    /// How mismatches are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ScopeKind {
    Regionale,
    Departementale,
}

impl From<ScopeKind> for Scope {
    fn from(kind: ScopeKind) -> Self {
        match kind {
            ScopeKind::Regionale => Scope::Regional,
            ScopeKind::Departementale => Scope::Departmental,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum AgeKind {
    Classe,
    Quinquennal,
}

impl From<AgeKind> for AgeAggregation {
    fn from(kind: AgeKind) -> Self {
        match kind {
            AgeKind::Classe => AgeAggregation::Class,
            AgeKind::Quinquennal => AgeAggregation::Quinquennial,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}
