//! Figures and interactive charts owned by one application window.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info};

use crate::config::{AnalysisConfig, ExportStyle};
use crate::data::chart_data::{ChartData, SeriesTable};
use crate::data::export;
use crate::data::visibility::{LineId, SeriesVisibilityController};
use crate::error::Result;

/// Axis settings of an interactive chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartAxes {
    pub x_log_base: f64,
    pub y_log_base: f64,
    pub y_label: String,
}

impl ChartAxes {
    pub fn from_config(cfg: &AnalysisConfig) -> Self {
        Self {
            x_log_base: cfg.x_log_base,
            y_log_base: cfg.y_log_base,
            y_label: cfg.y_axis_label.clone(),
        }
    }
}

impl Default for ChartAxes {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

/// Map `(x, y)` pairs into log-log plot space. Non-positive values become NaN
/// and break the line.
pub fn log_points(xs: &[f64], ys: &[f64], x_base: f64, y_base: f64) -> Vec<[f64; 2]> {
    let log = |v: f64, base: f64| {
        if v <= 0.0 {
            f64::NAN
        } else if base == 2.0 {
            v.log2()
        } else if base == 10.0 {
            v.log10()
        } else {
            v.log(base)
        }
    };
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| [log(x, x_base), log(y, y_base)])
        .collect()
}

/// One chart: its data, the series visibility state, and where the last
/// table export went.
#[derive(Debug, Clone)]
pub struct InteractiveChart {
    pub title: String,
    pub data: SeriesTable,
    pub visibility: SeriesVisibilityController,
    pub axes: ChartAxes,
    pub last_export: Option<PathBuf>,
}

impl InteractiveChart {
    pub fn new(title: impl Into<String>, data: SeriesTable, axes: ChartAxes) -> Self {
        let visibility = SeriesVisibilityController::new(data.column_names());
        Self {
            title: title.into(),
            data,
            visibility,
            axes,
            last_export: None,
        }
    }

    /// Data restricted to checklist-included series.
    pub fn filtered_data(&self) -> SeriesTable {
        self.data.project(&self.visibility.visible_series_names())
    }

    /// Points of a plotted line in plot space, or `None` for a stale handle.
    pub fn line_points(&self, line: LineId) -> Option<Vec<[f64; 2]>> {
        let plotted = self.visibility.lines().iter().find(|l| l.id == line)?;
        let column = self.data.columns().get(plotted.series)?;
        Some(log_points(
            self.data.index(),
            &column.values,
            self.axes.x_log_base,
            self.axes.y_log_base,
        ))
    }

    /// Write the filtered data to `out_<timestamp>.html` in `dir`.
    pub fn generate_table(&mut self, dir: &Path, style: &ExportStyle) -> Result<PathBuf> {
        let path = export::timestamped_output_path(dir, &Local::now());
        let visible = self.visibility.visible_series_names();
        export::export_table(&self.data, &visible, &path, style)?;
        self.last_export = Some(path.clone());
        Ok(path)
    }
}

/// A window holding one chart per metric.
#[derive(Debug, Clone)]
pub struct Figure {
    pub id: usize,
    pub title: String,
    pub charts: Vec<InteractiveChart>,
}

impl Figure {
    /// Rows and columns of the chart grid: a single chart spans the window,
    /// more are laid out two per row.
    pub fn grid_shape(count: usize) -> (usize, usize) {
        let cols = if count <= 1 { 1 } else { 2 };
        (count.div_ceil(cols).max(1), cols)
    }
}

/// Open figures plus the id counter for the next one.
#[derive(Debug, Default)]
pub struct FigureSession {
    next_figure_id: usize,
    figures: Vec<Figure>,
}

impl FigureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn figures_mut(&mut self) -> &mut [Figure] {
        &mut self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Open a figure with one chart per metric. Ids start at 1.
    pub fn open_figure(
        &mut self,
        title: impl Into<String>,
        data: ChartData,
        axes: &ChartAxes,
    ) -> usize {
        self.next_figure_id += 1;
        let id = self.next_figure_id;
        let charts = data
            .into_iter()
            .map(|(metric, table)| InteractiveChart::new(metric, table, axes.clone()))
            .collect::<Vec<_>>();
        info!(figure = id, charts = charts.len(), "opened figure");
        self.figures.push(Figure {
            id,
            title: title.into(),
            charts,
        });
        id
    }

    /// Open a figure around a single already-built chart.
    pub fn open_chart(&mut self, chart: InteractiveChart) -> usize {
        self.next_figure_id += 1;
        let id = self.next_figure_id;
        self.figures.push(Figure {
            id,
            title: chart.title.clone(),
            charts: vec![chart],
        });
        id
    }

    pub fn figure(&self, id: usize) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id == id)
    }

    pub fn close_figure(&mut self, id: usize) -> bool {
        let before = self.figures.len();
        self.figures.retain(|f| f.id != id);
        let closed = self.figures.len() != before;
        if closed {
            debug!(figure = id, "closed figure");
        }
        closed
    }

    /// Release every figure. The id counter keeps running.
    pub fn close_all(&mut self) {
        if !self.figures.is_empty() {
            debug!(count = self.figures.len(), "closing all figures");
        }
        self.figures.clear();
    }
}
