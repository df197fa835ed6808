//! Chart data: one aligned table per metric, one column per experiment.

use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::data::experiment::ExperimentIdentity;
use crate::data::metric::MetricSpec;
use crate::data::table::RawTable;
use crate::error::{Error, Result};

/// One named column of a [`SeriesTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// A table indexed by a shared numeric index, one column per series.
///
/// Columns always have exactly `index.len()` values; [`SeriesTable::push_column`]
/// is the only way to add one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesTable {
    index_name: String,
    index: Vec<f64>,
    columns: Vec<SeriesColumn>,
}

impl SeriesTable {
    pub fn new(index_name: impl Into<String>, index: Vec<f64>) -> Self {
        Self {
            index_name: index_name.into(),
            index,
            columns: Vec::new(),
        }
    }

    /// Append a column, padding with NaN or truncating to the index length.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) {
        let name = name.into();
        let values = fit_to_len(values, self.index.len(), &name);
        self.columns.push(SeriesColumn { name, values });
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn index(&self) -> &[f64] {
        &self.index
    }

    pub fn columns(&self) -> &[SeriesColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&SeriesColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.index.is_empty()
    }

    pub fn row(&self, i: usize) -> Vec<f64> {
        self.columns.iter().map(|c| c.values[i]).collect()
    }

    /// Keep only `names`, in the order given. Unknown names are skipped.
    pub fn project(&self, names: &[String]) -> SeriesTable {
        SeriesTable {
            index_name: self.index_name.clone(),
            index: self.index.clone(),
            columns: names
                .iter()
                .filter_map(|n| self.column(n).cloned())
                .collect(),
        }
    }

    /// Interpret a raw table as a series table: the first column is the
    /// index, every other column is a series.
    pub fn from_raw(raw: &RawTable) -> Result<Self> {
        let all = raw.all();
        let index_name = raw
            .headers()
            .first()
            .ok_or_else(|| Error::MissingColumn("index".to_string()))?;
        let index = all
            .numeric(index_name)
            .ok_or_else(|| Error::MissingColumn(index_name.clone()))?;
        let mut table = SeriesTable::new(index_name.clone(), index);
        for name in raw.headers().iter().skip(1) {
            if let Some(values) = all.numeric(name) {
                table.push_column(name.clone(), values);
            }
        }
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R, separator: u8) -> Result<Self> {
        Self::from_raw(&RawTable::from_reader(reader, separator)?)
    }

    /// Write the index column followed by every series column.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut w = csv::Writer::from_writer(writer);
        let mut header = vec![self.index_name.clone()];
        header.extend(self.column_names());
        w.write_record(&header)?;
        for (i, x) in self.index.iter().enumerate() {
            let mut record = vec![x.to_string()];
            record.extend(self.columns.iter().map(|c| c.values[i].to_string()));
            w.write_record(&record)?;
        }
        w.flush()?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))
    }
}

fn fit_to_len(mut values: Vec<f64>, len: usize, name: &str) -> Vec<f64> {
    if values.len() != len {
        warn!(
            column = name,
            rows = values.len(),
            index_len = len,
            "row count differs from the shared index; aligning by position"
        );
        values.resize(len, f64::NAN);
    }
    values
}

/// Ordered mapping from metric name to its [`SeriesTable`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    tables: Vec<(String, SeriesTable)>,
}

impl ChartData {
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn get(&self, metric: &str) -> Option<&SeriesTable> {
        self.tables.iter().find(|(n, _)| n == metric).map(|(_, t)| t)
    }

    /// Metric names in discovery order.
    pub fn metric_names(&self) -> Vec<&str> {
        self.tables.iter().map(|(n, _)| n.as_str()).collect()
    }

}

impl IntoIterator for ChartData {
    type Item = (String, SeriesTable);
    type IntoIter = std::vec::IntoIter<(String, SeriesTable)>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}

/// Derives [`ChartData`] from a raw table for a set of selected experiments.
pub struct ChartDataBuilder<'a> {
    pub descriptor_columns: &'a [String],
    pub index_column: &'a str,
    pub metrics: &'a [MetricSpec],
}

impl<'a> ChartDataBuilder<'a> {
    pub fn from_config(cfg: &'a AnalysisConfig) -> Self {
        Self {
            descriptor_columns: &cfg.descriptor_columns,
            index_column: &cfg.index_column,
            metrics: &cfg.metrics,
        }
    }

    /// Build one table per metric applicable to at least one selected
    /// experiment.
    ///
    /// The index comes from the first selected experiment's rows, in row
    /// order. Every other experiment is aligned to it by position.
    pub fn build(&self, raw: &RawTable, selected: &[ExperimentIdentity]) -> ChartData {
        let Some(first) = selected.first() else {
            return ChartData::default();
        };

        let first_rows = first.rows(raw, self.descriptor_columns);
        let index = first_rows.numeric(self.index_column).unwrap_or_else(|| {
            warn!(
                column = self.index_column,
                "index column missing; using row positions"
            );
            (0..first_rows.len()).map(|i| i as f64).collect()
        });

        // Per experiment: metric name -> derived values.
        let mut metric_order: Vec<String> = Vec::new();
        let mut derived: Vec<Vec<(String, Vec<f64>)>> =
            Vec::with_capacity(selected.len());
        for identity in selected {
            let rows = identity.rows(raw, self.descriptor_columns);
            let columns: Vec<(String, Vec<f64>)> = self
                .metrics
                .iter()
                .filter(|m| m.is_applicable(&rows))
                .filter_map(|m| m.derive(&rows).map(|v| (m.name(), v)))
                .collect();
            debug!(
                experiment = %identity,
                metrics = ?columns.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>(),
                "derived metrics"
            );
            for (name, _) in &columns {
                if !metric_order.contains(name) {
                    metric_order.push(name.clone());
                }
            }
            derived.push(columns);
        }

        let tables = metric_order
            .into_iter()
            .map(|metric| {
                let mut table = SeriesTable::new(self.index_column, index.clone());
                for (identity, columns) in selected.iter().zip(&derived) {
                    let values = columns
                        .iter()
                        .find(|(n, _)| *n == metric)
                        .map(|(_, v)| v.clone())
                        .unwrap_or_else(|| vec![f64::NAN; index.len()]);
                    table.push_column(identity.to_string(), values);
                }
                (metric, table)
            })
            .collect();

        ChartData { tables }
    }
}
