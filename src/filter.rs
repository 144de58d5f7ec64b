//! Row filtering: substring containment on one column.

use crate::error::{Error, Result};
use crate::select::SelectionPlan;
use crate::table::Row;

/// A resolved row filter: keep rows whose `column` cell contains `needle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub column: usize,
    pub needle: String,
}

impl FilterSpec {
    /// Derive the filter from the `--filter` argument and the resolved plan.
    ///
    /// The filter tests the first selected column. With no needle, an
    /// empty needle, or an empty plan there is nothing to test and no
    /// filter is derived, which keeps every row.
    pub fn derive(needle: Option<&str>, plan: &SelectionPlan) -> Option<Self> {
        let needle = needle?;
        if needle.is_empty() {
            return None;
        }
        let column = plan.filter_column()?;
        Some(Self {
            column,
            needle: needle.to_string(),
        })
    }

    /// Whether the row at `row_index` (counting from the top of the table)
    /// survives the filter. The header row always does; it is output
    /// metadata, not data.
    pub fn keeps(&self, row_index: usize, row: &Row) -> Result<bool> {
        if row_index == 0 {
            return Ok(true);
        }
        let cell = row.get(self.column).ok_or(Error::ColumnOutOfRange {
            row: row_index,
            column: self.column,
            width: row.len(),
        })?;
        Ok(cell.contains(&self.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::Selection;
    use crate::table::Table;

    fn plan() -> SelectionPlan {
        let table = Table::parse("a\tb\n");
        SelectionPlan::resolve(&Selection::Indices(vec![1, 0]), &table)
    }

    #[test]
    fn derive_uses_first_selected_column() {
        let spec = FilterSpec::derive(Some("x"), &plan()).unwrap();
        assert_eq!(spec.column, 1);
        assert_eq!(spec.needle, "x");
    }

    #[test]
    fn derive_nothing_without_needle() {
        assert_eq!(FilterSpec::derive(None, &plan()), None);
    }

    #[test]
    fn empty_needle_means_no_filter() {
        assert_eq!(FilterSpec::derive(Some(""), &plan()), None);
    }

    #[test]
    fn derive_nothing_from_empty_plan() {
        assert_eq!(FilterSpec::derive(Some("x"), &SelectionPlan::default()), None);
    }

    #[test]
    fn header_row_always_passes() {
        let spec = FilterSpec {
            column: 0,
            needle: "zzz".into(),
        };
        let row: Row = vec!["header".into()];
        assert!(spec.keeps(0, &row).unwrap());
    }

    #[test]
    fn data_row_passes_on_substring() {
        let spec = FilterSpec {
            column: 1,
            needle: "ob".into(),
        };
        let row: Row = vec!["1".into(), "bob".into()];
        assert!(spec.keeps(1, &row).unwrap());

        let row: Row = vec!["1".into(), "alice".into()];
        assert!(!spec.keeps(1, &row).unwrap());
    }

    #[test]
    fn out_of_range_column_is_fatal() {
        let spec = FilterSpec {
            column: 5,
            needle: "x".into(),
        };
        let row: Row = vec!["only".into()];
        match spec.keeps(3, &row) {
            Err(Error::ColumnOutOfRange { row, column, width }) => {
                assert_eq!(row, 3);
                assert_eq!(column, 5);
                assert_eq!(width, 1);
            }
            other => panic!("expected ColumnOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn header_passes_even_with_bad_column() {
        // Bounds are only checked where a cell is actually read.
        let spec = FilterSpec {
            column: 9,
            needle: "x".into(),
        };
        let row: Row = vec!["h".into()];
        assert!(spec.keeps(0, &row).unwrap());
    }
}
