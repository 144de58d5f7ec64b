//! In-memory table storage and the whitespace-or-quoted token scanner.
//!
//! The loader reads the whole stream line by line before any row is
//! evaluated. Blank lines contribute no row; every other line becomes one
//! `Row` of tokenized cells, in file order. The table is never mutated
//! after loading.

use std::io::{self, BufRead};

use tracing::debug;

/// One line of the file after tokenization.
pub type Row = Vec<String>;

/// Loader knobs. The defaults reproduce the standard pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Drop zero-length lines instead of storing them as empty rows.
    pub skip_blank_lines: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
        }
    }
}

/// An ordered, immutable collection of tokenized rows.
///
/// Rows are not required to share a width; callers index cells per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Read and tokenize an entire stream.
    pub fn read<R: BufRead>(reader: R, opts: ReadOptions) -> io::Result<Self> {
        let mut rows = Vec::new();
        for line in reader.lines() {
            let line = line?;
            // Blank means zero-length after line-ending removal; a line of
            // spaces still tokenizes (to an empty row).
            if line.is_empty() && opts.skip_blank_lines {
                continue;
            }
            rows.push(tokenize(&line));
        }
        debug!(rows = rows.len(), "loaded table");
        Ok(Self { rows })
    }

    /// Tokenize already-loaded text with default options. Cannot fail.
    pub fn parse(text: &str) -> Self {
        let rows = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(tokenize)
            .collect();
        Self { rows }
    }

    /// All rows in file order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row 0, the source of column names for name-based selection.
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Split one line into cells.
///
/// Runs of whitespace separate tokens. A token opening with a double quote
/// runs to the closing quote with interior whitespace kept and the quotes
/// stripped; a backslash inside quotes takes the next character literally.
/// An unterminated quote consumes the rest of the line (best effort, not
/// guaranteed lossless).
pub fn tokenize(line: &str) -> Row {
    let mut cells = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if c == '"' {
            chars.next();
            let mut cell = String::new();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            cell.push(escaped);
                        }
                    }
                    '"' => break,
                    _ => cell.push(c),
                }
            }
            cells.push(cell);
        } else {
            let mut cell = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                cell.push(c);
                chars.next();
            }
            cells.push(cell);
        }
    }
    cells
}
