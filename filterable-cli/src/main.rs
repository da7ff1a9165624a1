//! Filterable CLI
//!
//! Loads a table and a filter configuration from JSON files, applies filter
//! toggles and a search term, and prints the rows that stay visible.
//!
//! ```bash
//! filterable-cli --table games.json --config options.json \
//!     --exclude 3=fps --exclude released=no --search blizzard
//! ```

mod error;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use filterable_lib::model::{ColumnKey, FilterControl, TableRow};
use filterable_lib::{FilterConfig, FilterableTable};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use crate::error::CliError;

/// Line printed when no row is visible.
const EMPTY_PLACEHOLDER: &str = "No results";

#[derive(Parser)]
#[command(name = "filterable-cli")]
#[command(about = "Filter table rows by column values and a search term", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with the table rows
    #[arg(short, long, value_name = "FILE")]
    table: PathBuf,

    /// JSON file with filter options (caseSensitiveFilter, caseSensitiveSearch, arrayColumns)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Toggle a filtered value; repeat the same pair to toggle it back
    #[arg(short, long, value_name = "COLUMN=VALUE")]
    exclude: Vec<String>,

    /// Search term that a visible row must contain
    #[arg(short, long, default_value = "")]
    search: String,

    /// Only print the number of visible rows
    #[arg(long)]
    count: bool,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Write log output to this file instead of the terminal
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logger(cli.verbosity, cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => FilterConfig::from_path(path)?,
        None => FilterConfig::default(),
    };
    let rows = load_rows(&cli.table)?;
    log::info!("Loaded {} rows from {}", rows.len(), cli.table.display());

    let mut table = FilterableTable::new(config, rows);
    log::debug!("Filter options: {:?}", table.engine().config());
    for exclude in &cli.exclude {
        let control = parse_toggle(exclude)?;
        table.toggle_control(&control);
    }
    table.set_search_term(&cli.search);

    let stdout = io::stdout();
    render(&table, cli.count, &mut stdout.lock()).map_err(CliError::Output)
}

/// Writes the visible rows, one per line, prefixed by their stripe class.
///
/// With `count` set only `visible/total` is written. When no row is visible
/// the empty-results placeholder is written instead.
fn render(table: &FilterableTable<TableRow>, count: bool, out: &mut impl Write) -> io::Result<()> {
    let visibility = table.visibility();
    if count {
        return writeln!(out, "{}/{}", visibility.visible_count(), visibility.len());
    }

    if visibility.is_result_empty() {
        return writeln!(out, "{}", EMPTY_PLACEHOLDER);
    }

    for (index, stripe) in visibility.stripes() {
        if let Some(row) = table.rows().get(index) {
            writeln!(out, "{}\t{}", stripe.as_str(), row.cells.join("\t"))?;
        }
    }
    Ok(())
}

fn init_logger(verbosity: u8, log_file: Option<&Path>) -> Result<(), CliError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
        }
    }
    Ok(())
}

fn load_rows(path: &Path) -> Result<Vec<TableRow>, CliError> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses `COLUMN=VALUE`. The value may be empty; the column may not.
fn parse_toggle(arg: &str) -> Result<FilterControl, CliError> {
    let (column, value) = arg
        .split_once('=')
        .ok_or_else(|| CliError::InvalidToggle(arg.to_string()))?;
    let column: ColumnKey = column
        .parse()
        .map_err(|_| CliError::InvalidToggle(arg.to_string()))?;
    Ok(FilterControl::new(column, value))
}
