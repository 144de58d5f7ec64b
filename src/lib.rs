//! tsvcut: read a TSV file into memory, select columns by zero-based index
//! or header name, optionally filter data rows by substring containment,
//! and print the selected columns tab-joined.
//!
//! The pipeline is one linear pass with no branching back: load the whole
//! table, resolve the selection into column indices, then filter and print
//! each row in file order.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use tracing::debug;

pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod select;
pub mod table;

pub use config::{AppConfig, ConfigManager};
pub use error::{Error, Result};
pub use filter::FilterSpec;
pub use select::{Selection, SelectionPlan};
pub use table::{ReadOptions, Row, Table};

/// Name used for the config directory.
pub const APP_NAME: &str = "tsvcut";

/// Everything one invocation needs, after argument and config merging.
#[derive(Debug, Clone)]
pub struct Options {
    pub path: PathBuf,
    pub filter: Option<String>,
    pub selection: Selection,
    pub read: ReadOptions,
    pub separator: String,
}

impl Options {
    pub fn new(path: impl Into<PathBuf>, selection: Selection) -> Self {
        Self {
            path: path.into(),
            filter: None,
            selection,
            read: ReadOptions::default(),
            separator: "\t".to_string(),
        }
    }

    pub fn with_filter(mut self, needle: impl Into<String>) -> Self {
        self.filter = Some(needle.into());
        self
    }
}

/// Run the whole pipeline for one invocation, writing passing rows to `out`.
///
/// Fails before any output on a non-`.tsv` path or an unreadable file.
/// Per-row failures (a column index outside a visited row) terminate the
/// pass with earlier rows already written; the print is best effort, not
/// transactional.
pub fn run<W: Write>(opts: &Options, out: &mut W) -> Result<()> {
    if !tsvcut_cli::is_tsv_path(&opts.path) {
        return Err(Error::NotTsv {
            path: opts.path.clone(),
        });
    }

    let file = File::open(&opts.path).map_err(|source| Error::Unreadable {
        path: opts.path.clone(),
        source,
    })?;
    let table =
        Table::read(BufReader::new(file), opts.read).map_err(|source| Error::Unreadable {
            path: opts.path.clone(),
            source,
        })?;

    emit(&table, opts, out)
}

/// Resolve, filter, and print an already-loaded table.
pub fn emit<W: Write>(table: &Table, opts: &Options, out: &mut W) -> Result<()> {
    let plan = SelectionPlan::resolve(&opts.selection, table);
    let filter = FilterSpec::derive(opts.filter.as_deref(), &plan);
    debug!(
        columns = plan.indices().len(),
        filtered = filter.is_some(),
        "emitting table"
    );

    for (row_index, row) in table.rows().iter().enumerate() {
        let keep = match &filter {
            Some(filter) => filter.keeps(row_index, row)?,
            None => true,
        };
        if keep {
            output::write_row(out, row_index, row, &plan, &opts.separator)?;
        }
    }
    Ok(())
}
