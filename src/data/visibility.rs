//! Series visibility bookkeeping for one interactive chart.
//!
//! Each series carries two independent flags:
//! - `checklist_included`: whether the series is plotted on the next
//!   [`SeriesVisibilityController::update_series`] and included in table exports.
//! - `line_visible`: whether its already plotted line is shown. Toggled from
//!   the legend; dimmed legend entries mark hidden lines.
//!
//! Plotted lines and legend proxies get fresh handles on every rebuild, and
//! the proxy -> line relation is an explicit map rebuilt with them.

use std::collections::HashMap;

use tracing::debug;

/// Legend opacity for a visible line.
pub const LEGEND_ALPHA_VISIBLE: f32 = 1.0;
/// Legend opacity for a hidden line.
pub const LEGEND_ALPHA_HIDDEN: f32 = 0.2;

/// Handle of a plotted line. Valid until the next rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(u64);

/// Handle of a legend entry. Valid until the next rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegendProxyId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesState {
    pub name: String,
    pub checklist_included: bool,
    pub line_visible: bool,
}

/// A line on the current plot, drawn for `series` (index into the series list).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottedLine {
    pub id: LineId,
    pub series: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub proxy: LegendProxyId,
    pub label: String,
}

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickArea {
    Plot,
    Checklist,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickButton {
    Primary,
    Middle,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartClick {
    pub area: ClickArea,
    pub button: ClickButton,
}

#[derive(Debug, Clone, Default)]
pub struct SeriesVisibilityController {
    series: Vec<SeriesState>,
    lines: Vec<PlottedLine>,
    legend: Vec<LegendEntry>,
    legend_lines: HashMap<LegendProxyId, LineId>,
    next_handle: u64,
    generation: u64,
}

impl SeriesVisibilityController {
    /// All series included and visible, plot already built once.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ctrl = Self {
            series: names
                .into_iter()
                .map(|n| SeriesState {
                    name: n.into(),
                    checklist_included: true,
                    line_visible: true,
                })
                .collect(),
            ..Default::default()
        };
        ctrl.update_series();
        ctrl
    }

    pub fn series(&self) -> &[SeriesState] {
        &self.series
    }

    pub fn lines(&self) -> &[PlottedLine] {
        &self.lines
    }

    /// Empty when nothing is plotted.
    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn has_legend(&self) -> bool {
        !self.legend.is_empty()
    }

    /// Number of rebuilds so far (the first render counts).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Axis scales are only configured when at least one line is plotted.
    pub fn axes_configured(&self) -> bool {
        !self.lines.is_empty()
    }

    pub fn line_for(&self, proxy: LegendProxyId) -> Option<LineId> {
        self.legend_lines.get(&proxy).copied()
    }

    fn series_of_line(&self, line: LineId) -> Option<usize> {
        self.lines.iter().find(|l| l.id == line).map(|l| l.series)
    }

    /// Series index behind a legend entry, resolved through its line.
    pub fn series_for(&self, proxy: LegendProxyId) -> Option<usize> {
        self.line_for(proxy).and_then(|line| self.series_of_line(line))
    }

    pub fn is_line_visible(&self, line: LineId) -> bool {
        self.series_of_line(line)
            .map(|s| self.series[s].line_visible)
            .unwrap_or(false)
    }

    pub fn legend_alpha(&self, proxy: LegendProxyId) -> f32 {
        match self.line_for(proxy) {
            Some(line) if self.is_line_visible(line) => LEGEND_ALPHA_VISIBLE,
            _ => LEGEND_ALPHA_HIDDEN,
        }
    }

    /// Flip the line behind a legend entry. Returns the new visibility, or
    /// `None` for a stale proxy.
    pub fn toggle(&mut self, proxy: LegendProxyId) -> Option<bool> {
        let line = self.line_for(proxy)?;
        let series = self.series_of_line(line)?;
        self.toggle_series(series)
    }

    /// Flip line visibility of series `idx`.
    pub fn toggle_series(&mut self, idx: usize) -> Option<bool> {
        let s = self.series.get_mut(idx)?;
        s.line_visible = !s.line_visible;
        debug!(series = %s.name, visible = s.line_visible, "toggled line");
        Some(s.line_visible)
    }

    /// Show or hide every line. Checklist state is untouched.
    pub fn force_all(&mut self, show: bool) {
        for s in &mut self.series {
            s.line_visible = show;
        }
    }

    /// Reset every checklist entry to `init_state`. Line visibility is untouched.
    pub fn rebuild_check_list(&mut self, init_state: bool) {
        for s in &mut self.series {
            s.checklist_included = init_state;
        }
    }

    pub fn set_included(&mut self, idx: usize, included: bool) {
        if let Some(s) = self.series.get_mut(idx) {
            s.checklist_included = included;
        }
    }

    /// Names of checklist-included series, in original order.
    pub fn visible_series_names(&self) -> Vec<String> {
        self.series
            .iter()
            .filter(|s| s.checklist_included)
            .map(|s| s.name.clone())
            .collect()
    }

    /// Re-plot the checklist-included series.
    ///
    /// All previous line and legend handles become invalid; new lines start
    /// visible.
    pub fn update_series(&mut self) {
        self.lines.clear();
        self.legend.clear();
        self.legend_lines.clear();

        let included: Vec<usize> = (0..self.series.len())
            .filter(|&i| self.series[i].checklist_included)
            .collect();
        for i in included {
            let line = LineId(self.alloc_handle());
            let proxy = LegendProxyId(self.alloc_handle());
            self.series[i].line_visible = true;
            self.lines.push(PlottedLine { id: line, series: i });
            self.legend.push(LegendEntry {
                proxy,
                label: self.series[i].name.clone(),
            });
            self.legend_lines.insert(proxy, line);
        }
        self.generation += 1;
        debug!(
            generation = self.generation,
            lines = self.lines.len(),
            "rebuilt chart series"
        );
    }

    /// Apply a show-all / hide-all / select-all / deselect-all gesture.
    ///
    /// Middle click shows (or checks) everything, secondary click hides (or
    /// unchecks) everything. Returns `true` when state changed and a redraw
    /// is needed.
    pub fn on_click(&mut self, click: ChartClick) -> bool {
        let show = match click.button {
            ClickButton::Middle => true,
            ClickButton::Secondary => false,
            ClickButton::Primary => return false,
        };
        match click.area {
            ClickArea::Plot => self.force_all(show),
            ClickArea::Checklist => self.rebuild_check_list(show),
            ClickArea::Outside => return false,
        }
        true
    }

    fn alloc_handle(&mut self) -> u64 {
        let h = self.next_handle;
        self.next_handle += 1;
        h
    }
}
