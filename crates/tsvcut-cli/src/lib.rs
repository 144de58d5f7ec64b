//! Shared CLI definitions for tsvcut.
//!
//! Used by the main binary and by the build script (manpage) and
//! gen_docs binary (command-line-options markdown).

use clap::{ArgGroup, CommandFactory, Parser};
use std::path::Path;
use std::path::PathBuf;

/// Command-line arguments for tsvcut
#[derive(Clone, Parser, Debug)]
#[command(
    name = "tsvcut",
    version,
    about = "Select and filter TSV columns at the command line",
    group(ArgGroup::new("selection").required(true).args(["colnums", "cols"]))
)]
pub struct Args {
    /// Path to the TSV file to read. `.tsv` is matched anywhere in the
    /// path, so names like `data.tsv.bak` are accepted.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Keep only data rows whose filter column contains this substring.
    /// The filter column is the first selected column, the header row is
    /// always printed, and an empty substring keeps every row.
    #[arg(long, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Zero-based indices of the columns to print, in output order
    #[arg(long, num_args = 1.., value_name = "INDEX")]
    pub colnums: Vec<usize>,

    /// Header names of the columns to print. Every header cell equal to a
    /// requested name is selected, so a name appearing twice in the header
    /// contributes two columns and an unknown name contributes none.
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub cols: Vec<String>,
}

/// True when the path names a TSV file. `.tsv` is matched as a substring
/// of the whole path, not as an extension.
pub fn is_tsv_path(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().contains(".tsv")
}

/// Render the command-line options as a markdown table for the docs build.
pub fn render_options_markdown() -> String {
    let cmd = Args::command();
    let mut out = String::from("# Command-line options\n\n| Option | Description |\n|---|---|\n");
    for arg in cmd.get_arguments() {
        if arg.get_id() == "help" || arg.get_id() == "version" {
            continue;
        }
        let name = match arg.get_long() {
            Some(long) => format!("`--{}`", long),
            None => format!("`<{}>`", arg.get_id().as_str().to_uppercase()),
        };
        let help = arg
            .get_help()
            .map(|h| h.to_string().replace('\n', " "))
            .unwrap_or_default();
        out.push_str(&format!("| {} | {} |\n", name, help));
    }
    out
}
