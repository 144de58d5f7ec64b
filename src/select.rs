//! Column selection: resolving user selectors into a plan of indices.

use tracing::debug;

use crate::table::Table;

/// How the user identified the output columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based column indices, used as-is.
    Indices(Vec<usize>),
    /// Header names, resolved against row 0.
    Names(Vec<String>),
}

/// The resolved, ordered list of column indices printed for every row.
///
/// Derived once, before the per-row pass begins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPlan {
    indices: Vec<usize>,
}

impl SelectionPlan {
    /// Resolve a selection against the table.
    ///
    /// Name resolution scans the header row left to right once per
    /// requested name and keeps every exact match, in header order. One
    /// name can therefore contribute zero, one, or several indices, and
    /// the plan can end up shorter or longer than the request. A name
    /// matching nothing is not an error.
    pub fn resolve(selection: &Selection, table: &Table) -> Self {
        let indices = match selection {
            Selection::Indices(indices) => indices.clone(),
            Selection::Names(names) => {
                let header = table.header().map(Vec::as_slice).unwrap_or(&[]);
                let mut indices = Vec::new();
                for name in names {
                    for (idx, cell) in header.iter().enumerate() {
                        if cell == name {
                            indices.push(idx);
                        }
                    }
                }
                indices
            }
        };
        debug!(?indices, "resolved selection");
        Self { indices }
    }

    /// Planned indices, in output order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Column the row filter tests: the first selector, when there is one.
    pub fn filter_column(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
