//! Binary that emits command-line options markdown to stdout.
//!
//! Used by the docs build process to refresh the command-line reference
//! page before rendering.

fn main() {
    print!("{}", tsvcut_cli::render_options_markdown());
}
