//! Base + comparison experiment selection backing the analyse window.

use crate::data::experiment::ExperimentCatalog;

/// One selectable experiment. `idx` is its catalog position.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEntry {
    pub label: String,
    pub idx: usize,
    pub is_selected: bool,
}

/// Which experiments are chosen for plotting.
///
/// The base experiment is excluded from the comparison list. Comparison
/// flags persist per entry, so an entry hidden while it is the base comes
/// back with its previous flag.
#[derive(Debug, Clone)]
pub struct ExperimentSelection {
    entries: Vec<SelectionEntry>,
    base: Option<usize>,
    min_selection: usize,
}

impl ExperimentSelection {
    pub fn new(catalog: &ExperimentCatalog, min_selection: usize) -> Self {
        Self {
            entries: catalog
                .identities()
                .iter()
                .enumerate()
                .map(|(idx, id)| SelectionEntry {
                    label: id.label(),
                    idx,
                    is_selected: false,
                })
                .collect(),
            base: None,
            min_selection,
        }
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn base(&self) -> Option<usize> {
        self.base
    }

    /// Out-of-range indices clear the base.
    pub fn set_base(&mut self, base: Option<usize>) {
        self.base = base.filter(|&b| b < self.entries.len());
    }

    /// Comparison candidates: every entry but the base.
    pub fn filtered_entries(&self) -> impl Iterator<Item = &SelectionEntry> {
        let base = self.base;
        self.entries.iter().filter(move |e| Some(e.idx) != base)
    }

    /// Replace the comparison selection with `selected` (catalog indices).
    pub fn set_comparison(&mut self, selected: &[usize]) {
        let base = self.base;
        for entry in self.entries.iter_mut().filter(|e| Some(e.idx) != base) {
            entry.is_selected = selected.contains(&entry.idx);
        }
    }

    /// Flip one comparison entry. The base cannot be toggled.
    pub fn toggle_comparison(&mut self, idx: usize) {
        if Some(idx) == self.base {
            return;
        }
        if let Some(entry) = self.entries.get_mut(idx) {
            entry.is_selected = !entry.is_selected;
        }
    }

    pub fn comparison(&self) -> Vec<usize> {
        self.filtered_entries()
            .filter(|e| e.is_selected)
            .map(|e| e.idx)
            .collect()
    }

    /// `[base, comparisons...]`, or empty when no base is chosen.
    pub fn plot_selection(&self) -> Vec<usize> {
        match self.base {
            Some(base) => std::iter::once(base).chain(self.comparison()).collect(),
            None => Vec::new(),
        }
    }

    /// Whether the Plot action is available.
    pub fn is_valid(&self) -> bool {
        self.plot_selection().len() >= self.min_selection
    }
}
