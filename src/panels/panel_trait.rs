use eframe::egui;
use egui::Ui;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub trait Panel {
    fn name(&self) -> &'static str;
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn render_panel(&mut self, _ui: &mut Ui) {}

    /// Menu entry toggling the panel.
    fn render_menu(&mut self, ui: &mut Ui) {
        let name = self.name();
        ui.toggle_value(&mut self.state_mut().visible, name);
    }

    /// Render the panel body unless it is hidden.
    fn show(&mut self, ui: &mut Ui) {
        if self.state().visible {
            self.render_panel(ui);
        }
    }
}
