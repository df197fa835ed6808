//! Experiment identities and the catalog of identities present in a table.

use std::collections::BTreeSet;
use std::fmt;

use crate::data::table::{RawTable, TableSlice};

/// Descriptor-field values identifying one benchmark variant, e.g. `(group, name)`.
///
/// Ordered lexicographically by its values, which gives the catalog its
/// stable ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExperimentIdentity(Vec<String>);

impl ExperimentIdentity {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Label used in the selection list, e.g. `A: x`.
    pub fn label(&self) -> String {
        self.0.join(": ")
    }

    /// Rows of `table` whose descriptor columns equal this identity's values.
    pub fn rows<'a>(&self, table: &'a RawTable, descriptor_columns: &[String]) -> TableSlice<'a> {
        let pairs: Vec<(&str, &str)> = descriptor_columns
            .iter()
            .map(String::as_str)
            .zip(self.0.iter().map(String::as_str))
            .collect();
        table.filter_eq(&pairs)
    }
}

/// Column label in chart tables, e.g. `(A,x)`.
impl fmt::Display for ExperimentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(","))
    }
}

/// Sorted, deduplicated experiment identities of a table.
///
/// Positions in [`ExperimentCatalog::identities`] are the integer handles the
/// selection UI hands back.
#[derive(Debug, Clone, Default)]
pub struct ExperimentCatalog {
    identities: Vec<ExperimentIdentity>,
}

impl ExperimentCatalog {
    pub fn from_table(table: &RawTable, descriptor_columns: &[String]) -> Self {
        Self {
            identities: list_identities(table, descriptor_columns),
        }
    }

    pub fn identities(&self) -> &[ExperimentIdentity] {
        &self.identities
    }

    pub fn get(&self, idx: usize) -> Option<&ExperimentIdentity> {
        self.identities.get(idx)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Resolve catalog indices; out-of-range indices are dropped.
    pub fn resolve(&self, indices: &[usize]) -> Vec<ExperimentIdentity> {
        indices.iter().filter_map(|&i| self.get(i).cloned()).collect()
    }
}

/// Project descriptor columns, deduplicate and sort.
///
/// If a descriptor column is missing the table has no identities.
pub fn list_identities(table: &RawTable, descriptor_columns: &[String]) -> Vec<ExperimentIdentity> {
    let all = table.all();
    let columns: Option<Vec<Vec<&str>>> = descriptor_columns.iter().map(|c| all.text(c)).collect();
    let Some(columns) = columns else {
        return Vec::new();
    };
    let set: BTreeSet<ExperimentIdentity> = (0..all.len())
        .map(|r| ExperimentIdentity::new(columns.iter().map(|col| col[r])))
        .collect();
    set.into_iter().collect()
}
