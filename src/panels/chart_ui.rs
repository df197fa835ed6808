//! Interactive chart widget: log-log plot, clickable legend, series checklist.
//!
//! Mouse gestures:
//! - click a legend entry: show/hide its line
//! - middle / right click on the plot: show / hide all lines
//! - middle / right click on the checklist: check / uncheck all series

use std::path::Path;

use eframe::egui;
use egui::{Color32, PointerButton, RichText, Ui};
use egui_plot::{Line, Plot};

use crate::config::ExportStyle;
use crate::data::session::{Figure, InteractiveChart};
use crate::data::visibility::{ChartClick, ClickArea, ClickButton};

use super::export_ui::render_export_buttons;

/// Distinct color for the series at `index`.
pub fn series_color(index: usize) -> Color32 {
    const PALETTE: [Color32; 10] = [
        Color32::from_rgb(31, 119, 180),
        Color32::from_rgb(255, 127, 14),
        Color32::from_rgb(44, 160, 44),
        Color32::from_rgb(214, 39, 40),
        Color32::from_rgb(148, 103, 189),
        Color32::from_rgb(140, 86, 75),
        Color32::from_rgb(227, 119, 194),
        Color32::from_rgb(127, 127, 127),
        Color32::from_rgb(188, 189, 34),
        Color32::from_rgb(23, 190, 207),
    ];
    PALETTE[index % PALETTE.len()]
}

fn pressed_button(ui: &Ui) -> Option<ClickButton> {
    ui.input(|i| {
        if i.pointer.button_clicked(PointerButton::Middle) {
            Some(ClickButton::Middle)
        } else if i.pointer.button_clicked(PointerButton::Secondary) {
            Some(ClickButton::Secondary)
        } else {
            None
        }
    })
}

/// Draw one interactive chart. `id_salt` must be unique per chart on screen.
pub fn render_chart(
    ui: &mut Ui,
    chart: &mut InteractiveChart,
    id_salt: impl std::hash::Hash + Copy,
    style: &ExportStyle,
    export_dir: &Path,
) {
    ui.strong(&chart.title);
    ui.horizontal_top(|ui| {
        let side_width = 220.0;
        let plot_width = (ui.available_width() - side_width).max(200.0);
        ui.vertical(|ui| {
            ui.set_width(plot_width);
            render_legend(ui, chart);
            render_plot(ui, chart, id_salt);
        });
        ui.vertical(|ui| {
            ui.set_width(side_width);
            render_checklist(ui, chart, id_salt);
            ui.separator();
            if ui
                .button(format!("{} Update series", egui_phosphor::regular::ARROWS_CLOCKWISE))
                .on_hover_text("Re-plot the checked series")
                .clicked()
            {
                chart.visibility.update_series();
            }
            render_export_buttons(ui, chart, style, export_dir);
        });
    });
}

fn render_legend(ui: &mut Ui, chart: &mut InteractiveChart) {
    if !chart.visibility.has_legend() {
        return;
    }
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for entry in chart.visibility.legend() {
            let Some(series) = chart.visibility.series_for(entry.proxy) else {
                continue;
            };
            let alpha = chart.visibility.legend_alpha(entry.proxy);
            let color = series_color(series).gamma_multiply(alpha);
            let text = RichText::new(format!("━ {}", entry.label)).color(color);
            if ui
                .add(egui::Button::new(text).frame(false))
                .on_hover_text("Click to show/hide")
                .clicked()
            {
                clicked = Some(entry.proxy);
            }
        }
    });
    if let Some(proxy) = clicked {
        chart.visibility.toggle(proxy);
    }
}

fn render_plot(ui: &mut Ui, chart: &mut InteractiveChart, id_salt: impl std::hash::Hash) {
    let configured = chart.visibility.axes_configured();
    let x_base = chart.axes.x_log_base;
    let y_base = chart.axes.y_log_base;

    let mut plot = Plot::new(("chart_plot", id_salt))
        .height(320.0)
        .allow_scroll(false);
    if configured {
        plot = plot
            .y_axis_label(chart.axes.y_label.clone())
            .x_axis_label(chart.data.index_name().to_string())
            .x_axis_formatter(move |x, _range| format!("{:.4}", x_base.powf(x.value)))
            .y_axis_formatter(move |y, _range| format!("{:.3e}", y_base.powf(y.value)));
    }

    let lines: Vec<_> = chart
        .visibility
        .lines()
        .iter()
        .filter(|l| chart.visibility.is_line_visible(l.id))
        .filter_map(|l| {
            let name = chart.data.columns().get(l.series)?.name.clone();
            let pts = chart.line_points(l.id)?;
            Some((name, series_color(l.series), pts))
        })
        .collect();

    let resp = plot.show(ui, |plot_ui| {
        for (name, color, pts) in lines {
            plot_ui.line(Line::new(name, pts).color(color).width(1.5));
        }
    });

    if resp.response.hovered() {
        if let Some(button) = pressed_button(ui) {
            chart.visibility.on_click(ChartClick {
                area: ClickArea::Plot,
                button,
            });
        }
    }
}

fn render_checklist(ui: &mut Ui, chart: &mut InteractiveChart, id_salt: impl std::hash::Hash) {
    let names: Vec<(String, bool)> = chart
        .visibility
        .series()
        .iter()
        .map(|s| (s.name.clone(), s.checklist_included))
        .collect();
    let resp = egui::ScrollArea::vertical()
        .id_salt(("checklist", id_salt))
        .max_height(240.0)
        .show(ui, |ui| {
            for (idx, (name, mut included)) in names.into_iter().enumerate() {
                if ui.checkbox(&mut included, name).changed() {
                    chart.visibility.set_included(idx, included);
                }
            }
        });
    if ui.rect_contains_pointer(resp.inner_rect) {
        if let Some(button) = pressed_button(ui) {
            chart.visibility.on_click(ChartClick {
                area: ClickArea::Checklist,
                button,
            });
        }
    }
}

/// Show a figure as a window. Returns `false` once the user closed it.
pub fn show_figure_window(
    ctx: &egui::Context,
    figure: &mut Figure,
    style: &ExportStyle,
    export_dir: &Path,
) -> bool {
    let mut open = true;
    let figure_id = figure.id;
    let (rows, cols) = Figure::grid_shape(figure.charts.len());
    egui::Window::new(format!("Figure {}: {}", figure.id, figure.title))
        .id(egui::Id::new(("figure", figure_id)))
        .open(&mut open)
        .default_size([1100.0, 800.0])
        .vscroll(true)
        .show(ctx, |ui| {
            if figure.charts.is_empty() {
                let msg = "No metric applies to the selected experiments.";
                ui.label(RichText::new(msg).italics());
                return;
            }
            for (row, pair) in figure.charts.chunks_mut(cols).take(rows).enumerate() {
                ui.columns(cols, |columns| {
                    for (col, chart) in pair.iter_mut().enumerate() {
                        let chart_idx = row * cols + col;
                        render_chart(
                            &mut columns[col],
                            chart,
                            (figure_id, chart_idx),
                            style,
                            export_dir,
                        );
                    }
                });
                ui.separator();
            }
        });
    open
}
