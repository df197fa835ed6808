//! eframe applications and their entry points.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`analyse_app`] | Experiment picker that opens one figure per Plot press |
//! | [`plot_app`]    | Interactive chart per chart-data CSV file |
//! | [`run`]         | [`run_analyse()`] / [`run_plot()`] and native window setup |

mod analyse_app;
mod plot_app;
mod run;

pub use analyse_app::AnalyseApp;
pub use plot_app::{load_plot_file, PlotApp};
pub use run::{run_analyse, run_plot};
