//! MetricSpec: how one chart metric is derived from raw columns.

use serde::{Deserialize, Serialize};

use crate::data::table::TableSlice;

/// A named chart metric: a column taken as is, or the ratio of two columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricSpec {
    Direct {
        column: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Ratio {
        numerator: String,
        denominator: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl MetricSpec {
    pub fn direct(column: impl Into<String>) -> Self {
        MetricSpec::Direct {
            column: column.into(),
            name: None,
        }
    }

    pub fn ratio(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        MetricSpec::Ratio {
            numerator: numerator.into(),
            denominator: denominator.into(),
            name: None,
        }
    }

    /// Set an explicit display name.
    pub fn named(mut self, display: impl Into<String>) -> Self {
        match &mut self {
            MetricSpec::Direct { name, .. } | MetricSpec::Ratio { name, .. } => {
                *name = Some(display.into());
            }
        }
        self
    }

    /// Display name, which is also the metric's key in chart data.
    pub fn name(&self) -> String {
        match self {
            MetricSpec::Direct { column, name } => name.clone().unwrap_or_else(|| column.clone()),
            MetricSpec::Ratio {
                numerator,
                denominator,
                name,
            } => name
                .clone()
                .unwrap_or_else(|| format!("Ratio {numerator} to {denominator}")),
        }
    }

    pub fn required_columns(&self) -> Vec<&str> {
        match self {
            MetricSpec::Direct { column, .. } => vec![column.as_str()],
            MetricSpec::Ratio {
                numerator,
                denominator,
                ..
            } => vec![numerator.as_str(), denominator.as_str()],
        }
    }

    pub fn is_applicable(&self, slice: &TableSlice<'_>) -> bool {
        self.required_columns().iter().all(|c| slice.has_column(c))
    }

    /// Derive the metric column for `slice`, or `None` when a required column
    /// is absent. Division follows IEEE rules (x/0 is inf, 0/0 is NaN).
    pub fn derive(&self, slice: &TableSlice<'_>) -> Option<Vec<f64>> {
        match self {
            MetricSpec::Direct { column, .. } => slice.numeric(column),
            MetricSpec::Ratio {
                numerator,
                denominator,
                ..
            } => {
                let num = slice.numeric(numerator)?;
                let den = slice.numeric(denominator)?;
                Some(num.iter().zip(&den).map(|(n, d)| n / d).collect())
            }
        }
    }
}
