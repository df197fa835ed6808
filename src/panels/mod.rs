pub mod chart_ui;
pub mod export_ui;
pub mod panel_trait;
pub mod selection_ui;

pub use chart_ui::{render_chart, show_figure_window};
pub use panel_trait::{Panel, PanelState};
pub use selection_ui::SelectionPanel;
