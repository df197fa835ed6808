use std::path::{Path, PathBuf};

use eframe::egui;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::data::chart_data::ChartDataBuilder;
use crate::data::experiment::ExperimentCatalog;
use crate::data::selection::ExperimentSelection;
use crate::data::session::{ChartAxes, FigureSession};
use crate::data::table::RawTable;
use crate::panels::{show_figure_window, Panel, SelectionPanel};

/// Picker window over one benchmark file. Every Plot press opens a figure
/// with one chart per metric.
pub struct AnalyseApp {
    pub file_name: String,
    raw: RawTable,
    config: AnalysisConfig,
    catalog: ExperimentCatalog,
    selection: SelectionPanel,
    session: FigureSession,
    axes: ChartAxes,
    export_dir: PathBuf,
    status: String,
}

impl AnalyseApp {
    pub fn new(path: &Path, raw: RawTable, config: AnalysisConfig) -> Self {
        let catalog = ExperimentCatalog::from_table(&raw, &config.descriptor_columns);
        let selection = ExperimentSelection::new(&catalog, config.min_selection);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let status = format!("{} experiments, {} rows", catalog.len(), raw.len());
        info!(file = %file_name, experiments = catalog.len(), "analysing");
        Self {
            file_name,
            axes: ChartAxes::from_config(&config),
            raw,
            config,
            catalog,
            selection: SelectionPanel::new(selection),
            session: FigureSession::new(),
            export_dir: std::env::current_dir().unwrap_or_default(),
            status,
        }
    }

    pub fn session(&self) -> &FigureSession {
        &self.session
    }

    /// Build chart data for the given catalog indices and open a figure.
    /// Selections below the configured minimum are ignored.
    pub fn plot(&mut self, selection: &[usize]) -> Option<usize> {
        if selection.len() < self.config.min_selection {
            return None;
        }
        let selected = self.catalog.resolve(selection);
        let data = ChartDataBuilder::from_config(&self.config).build(&self.raw, &selected);
        if data.is_empty() {
            warn!("no metric applies to the selected experiments");
        }
        let title = selected
            .iter()
            .map(|id| id.label())
            .collect::<Vec<_>>()
            .join(" vs ");
        let id = self.session.open_figure(title, data, &self.axes);
        self.status = format!("Opened figure {id}");
        Some(id)
    }
}

impl eframe::App for AnalyseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.selection.render_menu(ui);
                ui.separator();
                ui.label(&self.status);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("Analyse: {}", self.file_name));
            ui.separator();
            self.selection.show(ui);
        });
        if let Some(sel) = self.selection.take_plot_request() {
            self.plot(&sel);
        }

        let style = self.config.export.clone();
        let mut closed = Vec::new();
        for figure in self.session.figures_mut() {
            if !show_figure_window(ctx, figure, &style, &self.export_dir) {
                closed.push(figure.id);
            }
        }
        for id in closed {
            self.session.close_figure(id);
        }
    }
}

impl Drop for AnalyseApp {
    fn drop(&mut self) {
        self.session.close_all();
    }
}
