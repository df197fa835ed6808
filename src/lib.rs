//! benchplot crate root: re-exports and module wiring.
//!
//! Compares benchmark experiments from CSV output:
//! - `data`: UI-free tables, metric derivation, selection and visibility state
//! - `panels`: egui widgets (experiment picker, interactive chart, export buttons)
//! - `app`: eframe applications and `run_*` entry points
//! - `config`: column roles, metrics and export formatting
//! - `error`: error type for loading and exporting

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_analyse, run_plot, AnalyseApp, PlotApp};
pub use config::{AnalysisConfig, ExportStyle};
pub use data::chart_data::{ChartData, ChartDataBuilder, SeriesTable};
pub use data::experiment::{list_identities, ExperimentCatalog, ExperimentIdentity};
pub use data::metric::MetricSpec;
pub use data::table::RawTable;
pub use data::visibility::SeriesVisibilityController;
pub use error::{Error, Result};
