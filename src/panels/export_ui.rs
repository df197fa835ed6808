use std::path::Path;

use egui::Ui;
use tracing::error;

use crate::config::ExportStyle;
use crate::data::session::InteractiveChart;

/// "Generate table" and "Save CSV" actions for one chart.
pub fn render_export_buttons(
    ui: &mut Ui,
    chart: &mut InteractiveChart,
    style: &ExportStyle,
    export_dir: &Path,
) {
    if ui
        .button(format!("{} Generate table", egui_phosphor::regular::TABLE))
        .on_hover_text("Write the checked series to an HTML table and open it")
        .clicked()
    {
        match chart.generate_table(export_dir, style) {
            Ok(path) => {
                let abs = std::fs::canonicalize(&path).unwrap_or(path);
                ui.ctx()
                    .open_url(egui::OpenUrl::new_tab(format!("file://{}", abs.display())));
            }
            Err(e) => error!("Failed to export table: {e}"),
        }
    }

    if ui
        .button(format!("{} Save CSV", egui_phosphor::regular::FLOPPY_DISK))
        .on_hover_text("Save the checked series as CSV (reopen with `benchplot plot`)")
        .clicked()
    {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.csv", sanitize_file_stem(&chart.title)))
            .add_filter("CSV", &["csv"])
            .save_file()
        {
            if let Err(e) = chart.filtered_data().save_csv(&path) {
                error!("Failed to save chart CSV: {e}");
            }
        }
    }

    if let Some(path) = &chart.last_export {
        ui.small(format!("Last table: {}", path.display()));
    }
}

/// Metric names contain `/` and brackets; keep file names portable.
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
