//! Base/compare experiment picker of the analyse window.

use eframe::egui;
use egui::Ui;

use crate::data::selection::ExperimentSelection;

use super::panel_trait::{Panel, PanelState};

pub struct SelectionPanel {
    pub selection: ExperimentSelection,
    state: PanelState,
    pending: Option<Vec<usize>>,
}

impl SelectionPanel {
    pub fn new(selection: ExperimentSelection) -> Self {
        Self {
            selection,
            state: PanelState::default(),
            pending: None,
        }
    }

    /// Queue the current plot selection. Does nothing for an invalid one.
    pub fn request_plot(&mut self) -> bool {
        if !self.selection.is_valid() {
            return false;
        }
        self.pending = Some(self.selection.plot_selection());
        true
    }

    /// Catalog indices of the last Plot press, at most once.
    pub fn take_plot_request(&mut self) -> Option<Vec<usize>> {
        self.pending.take()
    }

    fn render_picker(&mut self, ui: &mut Ui) {
        egui::Grid::new("experiment_selection")
            .num_columns(2)
            .spacing([5.0, 5.0])
            .show(ui, |ui| {
                ui.label("Base experiment:");
                self.render_base_combo(ui);
                ui.end_row();

                ui.label("Compare experiment:");
                self.render_comparison_list(ui);
                ui.end_row();
            });

        let mut pressed = false;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let valid = self.selection.is_valid();
            let plot_btn =
                egui::Button::new(format!("{} Plot", egui_phosphor::regular::CHART_LINE));
            if ui
                .add_enabled(valid, plot_btn)
                .on_disabled_hover_text("Select a base and at least one experiment to compare")
                .clicked()
            {
                pressed = true;
            }
        });
        if pressed {
            self.request_plot();
        }
    }

    fn render_base_combo(&mut self, ui: &mut Ui) {
        let selected_text = self
            .selection
            .base()
            .and_then(|b| self.selection.entries().get(b))
            .map(|e| e.label.clone())
            .unwrap_or_default();
        let mut new_base = None;
        egui::ComboBox::from_id_salt("base_experiment")
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for entry in self.selection.entries() {
                    let is_base = self.selection.base() == Some(entry.idx);
                    if ui.selectable_label(is_base, &entry.label).clicked() {
                        new_base = Some(entry.idx);
                    }
                }
            });
        if new_base.is_some() {
            self.selection.set_base(new_base);
        }
    }

    fn render_comparison_list(&mut self, ui: &mut Ui) {
        let mut toggled = None;
        egui::ScrollArea::vertical()
            .id_salt("comparison_list")
            .max_height(ui.available_height().max(150.0))
            .show(ui, |ui| {
                for entry in self.selection.filtered_entries() {
                    if ui.selectable_label(entry.is_selected, &entry.label).clicked() {
                        toggled = Some(entry.idx);
                    }
                }
            });
        if let Some(idx) = toggled {
            self.selection.toggle_comparison(idx);
        }
    }
}

impl Panel for SelectionPanel {
    fn name(&self) -> &'static str {
        "Experiments"
    }

    fn state(&self) -> &PanelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui) {
        self.render_picker(ui);
    }
}
