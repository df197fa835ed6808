use std::path::{Path, PathBuf};

use eframe::egui;
use tracing::info;

use crate::config::AnalysisConfig;
use crate::data::chart_data::SeriesTable;
use crate::data::export;
use crate::data::session::{ChartAxes, FigureSession, InteractiveChart};
use crate::data::table::RawTable;
use crate::error::Result;
use crate::panels::show_figure_window;

/// Load one chart-data CSV (first column is the index), write its full
/// table to `out{idx}.html` next to it and return the chart.
pub fn load_plot_file(
    path: &Path,
    idx: usize,
    config: &AnalysisConfig,
) -> Result<InteractiveChart> {
    let path = std::path::absolute(path)?;
    let raw = RawTable::load_checked(&path, config.separator_byte())?;
    let data = SeriesTable::from_raw(&raw)?;

    let out = export::output_path_for(&path, idx);
    export::export_table(&data, &data.column_names(), &out, &config.export)?;

    let title = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    info!(file = %path.display(), series = data.columns().len(), "loaded chart data");
    Ok(InteractiveChart::new(title, data, ChartAxes::from_config(config)))
}

/// One interactive chart window per loaded file.
pub struct PlotApp {
    session: FigureSession,
    config: AnalysisConfig,
    export_dir: PathBuf,
}

impl PlotApp {
    pub fn new(charts: Vec<InteractiveChart>, config: AnalysisConfig) -> Self {
        let mut session = FigureSession::new();
        for chart in charts {
            session.open_chart(chart);
        }
        Self {
            session,
            config,
            export_dir: std::env::current_dir().unwrap_or_default(),
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.is_empty() {
                ui.label("All charts closed.");
            }
        });

        let mut closed = Vec::new();
        for figure in self.session.figures_mut() {
            if !show_figure_window(ctx, figure, &self.config.export, &self.export_dir) {
                closed.push(figure.id);
            }
        }
        for id in closed {
            self.session.close_figure(id);
        }
    }
}

impl Drop for PlotApp {
    fn drop(&mut self) {
        self.session.close_all();
    }
}
