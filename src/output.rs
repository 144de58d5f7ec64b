//! Rendering selected cells of a row as one joined output line.

use std::io::Write;

use crate::error::{Error, Result};
use crate::select::SelectionPlan;
use crate::table::Row;

/// Render the planned cells of `row` joined by `separator`. No trailing
/// separator and no newline; an empty plan renders an empty line.
pub fn render_row(
    row_index: usize,
    row: &Row,
    plan: &SelectionPlan,
    separator: &str,
) -> Result<String> {
    let mut line = String::new();
    for (pos, &column) in plan.indices().iter().enumerate() {
        let cell = row.get(column).ok_or(Error::ColumnOutOfRange {
            row: row_index,
            column,
            width: row.len(),
        })?;
        if pos > 0 {
            line.push_str(separator);
        }
        line.push_str(cell);
    }
    Ok(line)
}

/// Render and write one row, with its trailing newline.
pub fn write_row<W: Write>(
    out: &mut W,
    row_index: usize,
    row: &Row,
    plan: &SelectionPlan,
    separator: &str,
) -> Result<()> {
    let line = render_row(row_index, row, plan, separator)?;
    writeln!(out, "{line}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::Selection;
    use crate::table::Table;

    fn plan(indices: Vec<usize>) -> SelectionPlan {
        SelectionPlan::resolve(&Selection::Indices(indices), &Table::default())
    }

    fn row() -> Row {
        vec!["a".into(), "b".into(), "c".into()]
    }

    #[test]
    fn joins_in_plan_order() {
        let line = render_row(0, &row(), &plan(vec![2, 0]), "\t").unwrap();
        assert_eq!(line, "c\ta");
    }

    #[test]
    fn repeated_index_repeats_cell() {
        let line = render_row(0, &row(), &plan(vec![1, 1]), "\t").unwrap();
        assert_eq!(line, "b\tb");
    }

    #[test]
    fn empty_plan_renders_empty_line() {
        let line = render_row(0, &row(), &plan(vec![]), "\t").unwrap();
        assert_eq!(line, "");
    }

    #[test]
    fn no_trailing_separator() {
        let line = render_row(0, &row(), &plan(vec![0, 1, 2]), "\t").unwrap();
        assert_eq!(line, "a\tb\tc");
    }

    #[test]
    fn honors_custom_separator() {
        let line = render_row(0, &row(), &plan(vec![0, 2]), ", ").unwrap();
        assert_eq!(line, "a, c");
    }

    #[test]
    fn write_row_appends_newline() {
        let mut out = Vec::new();
        write_row(&mut out, 0, &row(), &plan(vec![0]), "\t").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\n");
    }

    #[test]
    fn out_of_range_index_is_fatal() {
        match render_row(2, &row(), &plan(vec![0, 7]), "\t") {
            Err(Error::ColumnOutOfRange { row, column, width }) => {
                assert_eq!(row, 2);
                assert_eq!(column, 7);
                assert_eq!(width, 3);
            }
            other => panic!("expected ColumnOutOfRange, got {:?}", other),
        }
    }
}
