use std::path::Path;

use benchplot::data::table::RawTable;
use benchplot::{AnalyseApp, AnalysisConfig};

const BENCH: &str = "\
Group,Experiment,Problem Space,us/Iteration
A,x,1,10.0
A,x,2,20.0
A,y,1,5.0
A,y,2,8.0
";

fn app() -> AnalyseApp {
    let raw = RawTable::from_reader(BENCH.as_bytes(), b',').unwrap();
    AnalyseApp::new(Path::new("bench.csv"), raw, AnalysisConfig::default())
}

#[test]
fn single_experiment_does_not_open_a_figure() {
    let mut app = app();
    assert_eq!(app.plot(&[0]), None);
    assert_eq!(app.plot(&[]), None);
    assert!(app.session().is_empty());
}

#[test]
fn each_plot_opens_a_numbered_figure() {
    let mut app = app();
    assert_eq!(app.file_name, "bench.csv");
    assert_eq!(app.plot(&[0, 1]), Some(1));
    assert_eq!(app.plot(&[1, 0]), Some(2));
    assert_eq!(app.session().len(), 2);

    let figure = app.session().figure(1).unwrap();
    assert_eq!(figure.title, "A: x vs A: y");
    assert_eq!(figure.charts.len(), 1);
    assert_eq!(figure.charts[0].title, "us/Iteration");
    assert_eq!(figure.charts[0].data.column_names(), vec!["(A,x)", "(A,y)"]);
}
