//! Entry points that open native windows.
//!
//! Both calls block until the window is closed.

use std::path::{Path, PathBuf};

use eframe::egui;
use tracing::error;

use crate::config::AnalysisConfig;
use crate::data::table::RawTable;
use crate::error::Result;

use super::analyse_app::AnalyseApp;
use super::plot_app::{load_plot_file, PlotApp};

fn native_options(size: [f32; 2], min_size: [f32; 2]) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size(min_size),
        ..Default::default()
    }
}

fn run_app<A: eframe::App + 'static>(
    title: &str,
    opts: eframe::NativeOptions,
    app: A,
) -> Result<()> {
    eframe::run_native(
        title,
        opts,
        Box::new(move |cc| {
            // Phosphor icons are used in button labels.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

/// Open the experiment picker for one benchmark file.
///
/// Load failures (missing file, not a file, no rows) are returned before
/// any window opens.
pub fn run_analyse(path: &Path, config: AnalysisConfig) -> Result<()> {
    let raw = RawTable::load_checked(path, config.separator_byte())?;
    let app = AnalyseApp::new(path, raw, config);
    let title = format!("Analyse: {}", app.file_name);
    run_app(&title, native_options([900.0, 500.0], [300.0, 150.0]), app)
}

/// Open one interactive chart per file. Files that fail to load are
/// reported on stderr and skipped; with nothing left no window opens.
///
/// Returns the number of charts shown.
pub fn run_plot(paths: &[PathBuf], config: AnalysisConfig) -> Result<usize> {
    let mut charts = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        match load_plot_file(path, i + 1, &config) {
            Ok(chart) => charts.push(chart),
            Err(e) => {
                eprintln!("{e}");
                error!(file = %path.display(), "skipped: {e}");
            }
        }
    }
    let count = charts.len();
    if count == 0 {
        return Ok(0);
    }
    let app = PlotApp::new(charts, config);
    run_app("benchplot", native_options([1400.0, 900.0], [400.0, 300.0]), app)?;
    Ok(count)
}
