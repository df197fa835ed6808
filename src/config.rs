//! Configuration shared by the analyse and plot windows.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::metric::MetricSpec;
use crate::error::Result;

// ─────────────────────────────────────────────────────────────────────────────
// Export styling
// ─────────────────────────────────────────────────────────────────────────────

/// Number formatting and highlight colors for exported HTML tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportStyle {
    /// Digits after the decimal separator.
    pub precision: usize,
    pub thousands_sep: char,
    pub decimal_sep: char,
    /// CSS color of the row maximum.
    pub max_color: String,
    /// CSS color of the row minimum.
    pub min_color: String,
}

impl Default for ExportStyle {
    fn default() -> Self {
        Self {
            precision: 3,
            thousands_sep: '.',
            decimal_sep: ',',
            max_color: "lightcoral".to_string(),
            min_color: "limegreen".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AnalysisConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field                | Purpose |
/// |----------------------|---------|
/// | `separator`          | CSV field delimiter |
/// | `descriptor_columns` | Columns identifying an experiment variant |
/// | `index_column`       | Independent variable shared by all series |
/// | `metrics`            | Chart metrics derived per experiment |
/// | `export`             | HTML table formatting |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    // ── Input ────────────────────────────────────────────────────────────────
    pub separator: char,
    pub descriptor_columns: Vec<String>,
    pub index_column: String,
    pub metrics: Vec<MetricSpec>,

    // ── Selection ────────────────────────────────────────────────────────────
    /// Number of experiments that must be chosen before plotting is enabled.
    pub min_selection: usize,

    // ── Chart ────────────────────────────────────────────────────────────────
    pub y_axis_label: String,
    pub x_log_base: f64,
    pub y_log_base: f64,

    // ── Export ───────────────────────────────────────────────────────────────
    pub export: ExportStyle,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            descriptor_columns: vec!["Group".to_string(), "Experiment".to_string()],
            index_column: "Problem Space".to_string(),
            metrics: vec![
                MetricSpec::direct("us/Iteration"),
                MetricSpec::direct("Task sum[us] Mean"),
                MetricSpec::direct("Task creation[us] Mean"),
                MetricSpec::ratio("Task sum[us] Mean", "us/Iteration").named("Proc_time ratio"),
                MetricSpec::ratio("Task creation[us] Mean", "us/Iteration")
                    .named("Creation to Proc time ratio"),
            ],
            min_selection: 2,
            y_axis_label: "Time [ms]".to_string(),
            x_log_base: 2.0,
            y_log_base: 10.0,
            export: ExportStyle::default(),
        }
    }
}

impl AnalysisConfig {
    /// Read a JSON config. Missing fields fall back to defaults.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// The delimiter as the single byte the CSV reader expects.
    ///
    /// Non-ASCII separators fall back to `,`.
    pub fn separator_byte(&self) -> u8 {
        if self.separator.is_ascii() {
            self.separator as u8
        } else {
            b','
        }
    }
}
