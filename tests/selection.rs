use benchplot::data::selection::ExperimentSelection;
use benchplot::data::table::RawTable;
use benchplot::panels::{Panel, SelectionPanel};
use benchplot::ExperimentCatalog;

fn selection() -> ExperimentSelection {
    let csv = "Group,Experiment\nA,x\nA,y\nB,z\n";
    let raw = RawTable::from_reader(csv.as_bytes(), b',').unwrap();
    let descriptors = ["Group".to_string(), "Experiment".to_string()];
    let catalog = ExperimentCatalog::from_table(&raw, &descriptors);
    ExperimentSelection::new(&catalog, 2)
}

#[test]
fn no_base_means_nothing_to_plot() {
    let mut s = selection();
    s.set_comparison(&[1, 2]);
    assert!(s.plot_selection().is_empty());
    assert!(!s.is_valid());
}

#[test]
fn base_alone_is_not_enough() {
    let mut s = selection();
    s.set_base(Some(0));
    assert_eq!(s.plot_selection(), vec![0]);
    assert!(!s.is_valid());
}

#[test]
fn base_plus_comparison_is_valid() {
    let mut s = selection();
    s.set_base(Some(1));
    s.set_comparison(&[2]);
    assert_eq!(s.plot_selection(), vec![1, 2]);
    assert!(s.is_valid());
}

#[test]
fn base_is_excluded_from_comparison_list() {
    let mut s = selection();
    s.set_base(Some(1));
    let labels: Vec<&str> = s.filtered_entries().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["A: x", "B: z"]);
    s.toggle_comparison(1);
    assert!(s.comparison().is_empty());
}

#[test]
fn comparison_flags_survive_base_changes() {
    let mut s = selection();
    s.set_base(Some(0));
    s.set_comparison(&[1, 2]);
    s.set_base(Some(1));
    // entry 1 is now the base; entry 0 was never selected
    assert_eq!(s.plot_selection(), vec![1, 2]);
    s.set_base(Some(0));
    assert_eq!(s.plot_selection(), vec![0, 1, 2]);
}

#[test]
fn out_of_range_base_is_cleared() {
    let mut s = selection();
    s.set_base(Some(7));
    assert_eq!(s.base(), None);
}

#[test]
fn panel_queues_only_valid_plot_requests() {
    let mut panel = SelectionPanel::new(selection());
    assert_eq!(panel.name(), "Experiments");
    assert!(panel.state().visible);

    panel.selection.set_base(Some(0));
    assert!(!panel.request_plot());
    assert_eq!(panel.take_plot_request(), None);

    panel.selection.set_comparison(&[2]);
    assert!(panel.request_plot());
    assert_eq!(panel.take_plot_request(), Some(vec![0, 2]));
    assert_eq!(panel.take_plot_request(), None);
}
