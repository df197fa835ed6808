use benchplot::data::table::RawTable;
use benchplot::{AnalysisConfig, ChartDataBuilder, ExperimentIdentity, MetricSpec, SeriesTable};

const BENCH: &str = "\
Group,Experiment,Problem Space,us/Iteration
A,x,1,10.0
A,x,2,20.0
A,y,1,5.0
A,y,2,8.0
";

const BENCH_WITH_TASK_SUM: &str = "\
Group,Experiment,Problem Space,us/Iteration,Task sum[us] Mean
A,x,1,10.0,4.0
A,x,2,20.0,5.0
A,y,1,5.0,1.0
A,y,2,8.0,6.0
";

fn table(csv: &str) -> RawTable {
    RawTable::from_reader(csv.as_bytes(), b',').unwrap()
}

fn ids(pairs: &[(&str, &str)]) -> Vec<ExperimentIdentity> {
    pairs.iter().map(|(g, e)| ExperimentIdentity::new([*g, *e])).collect()
}

#[test]
fn empty_selection_yields_empty_mapping() {
    let cfg = AnalysisConfig::default();
    let data = ChartDataBuilder::from_config(&cfg).build(&table(BENCH), &[]);
    assert!(data.is_empty());
}

#[test]
fn direct_metric_is_aligned_per_experiment() {
    let cfg = AnalysisConfig::default();
    let data =
        ChartDataBuilder::from_config(&cfg).build(&table(BENCH), &ids(&[("A", "x"), ("A", "y")]));

    assert_eq!(data.metric_names(), vec!["us/Iteration"]);
    let t = data.get("us/Iteration").unwrap();
    assert_eq!(t.index_name(), "Problem Space");
    assert_eq!(t.index(), vec![1.0, 2.0]);
    assert_eq!(t.column_names(), vec!["(A,x)", "(A,y)"]);
    assert_eq!(t.row(0), vec![10.0, 5.0]);
    assert_eq!(t.row(1), vec![20.0, 8.0]);
}

#[test]
fn ratio_metric_is_elementwise_quotient() {
    let cfg = AnalysisConfig::default();
    let raw = table(BENCH_WITH_TASK_SUM);
    let data = ChartDataBuilder::from_config(&cfg).build(&raw, &ids(&[("A", "x"), ("A", "y")]));

    assert_eq!(
        data.metric_names(),
        vec!["us/Iteration", "Task sum[us] Mean", "Proc_time ratio"]
    );
    let ratio = data.get("Proc_time ratio").unwrap();
    assert_eq!(ratio.column("(A,x)").unwrap().values, vec![4.0 / 10.0, 5.0 / 20.0]);
    assert_eq!(ratio.column("(A,y)").unwrap().values, vec![1.0 / 5.0, 6.0 / 8.0]);
}

#[test]
fn derivation_is_idempotent() {
    let cfg = AnalysisConfig::default();
    let raw = table(BENCH_WITH_TASK_SUM);
    let builder = ChartDataBuilder::from_config(&cfg);
    let sel = ids(&[("A", "y"), ("A", "x")]);
    assert_eq!(builder.build(&raw, &sel), builder.build(&raw, &sel));
}

#[test]
fn index_comes_from_first_selected_experiment() {
    let csv = "\
Group,Experiment,Problem Space,us/Iteration
A,x,8,1.0
A,x,4,2.0
A,y,1,3.0
A,y,2,4.0
";
    let cfg = AnalysisConfig::default();
    let data =
        ChartDataBuilder::from_config(&cfg).build(&table(csv), &ids(&[("A", "x"), ("A", "y")]));
    let t = data.get("us/Iteration").unwrap();
    // row order, no sorting
    assert_eq!(t.index(), vec![8.0, 4.0]);
    assert_eq!(t.column("(A,y)").unwrap().values, vec![3.0, 4.0]);
}

#[test]
fn shorter_experiment_is_padded_with_nan() {
    let csv = "\
Group,Experiment,Problem Space,us/Iteration
A,x,1,1.0
A,x,2,2.0
A,x,4,3.0
A,y,1,5.0
";
    let cfg = AnalysisConfig::default();
    let data =
        ChartDataBuilder::from_config(&cfg).build(&table(csv), &ids(&[("A", "x"), ("A", "y")]));
    let y = &data.get("us/Iteration").unwrap().column("(A,y)").unwrap().values;
    assert_eq!(y.len(), 3);
    assert_eq!(y[0], 5.0);
    assert!(y[1].is_nan() && y[2].is_nan());
}

#[test]
fn metrics_without_columns_are_skipped_without_duplicates() {
    let mut cfg = AnalysisConfig::default();
    cfg.metrics = vec![
        MetricSpec::direct("missing"),
        MetricSpec::direct("us/Iteration"),
        MetricSpec::ratio("us/Iteration", "missing"),
        MetricSpec::direct("us/Iteration").named("again"),
        MetricSpec::direct("us/Iteration"),
    ];
    let data =
        ChartDataBuilder::from_config(&cfg).build(&table(BENCH), &ids(&[("A", "x"), ("A", "y")]));
    assert_eq!(data.metric_names(), vec!["us/Iteration", "again"]);
}

#[test]
fn division_by_zero_follows_float_rules() {
    let csv = "\
Group,Experiment,Problem Space,us/Iteration,Task sum[us] Mean
A,x,1,0.0,3.0
A,x,2,0.0,0.0
";
    let cfg = AnalysisConfig::default();
    let data = ChartDataBuilder::from_config(&cfg).build(&table(csv), &ids(&[("A", "x")]));
    let v = &data.get("Proc_time ratio").unwrap().columns()[0].values;
    assert!(v[0].is_infinite());
    assert!(v[1].is_nan());
}

#[test]
fn unknown_identity_contributes_nan_column() {
    let cfg = AnalysisConfig::default();
    let data =
        ChartDataBuilder::from_config(&cfg).build(&table(BENCH), &ids(&[("A", "x"), ("B", "z")]));
    let t = data.get("us/Iteration").unwrap();
    assert_eq!(t.column_names(), vec!["(A,x)", "(B,z)"]);
    assert!(t.column("(B,z)").unwrap().values.iter().all(|v| v.is_nan()));
}

#[test]
fn series_table_csv_reloads_with_same_shape() {
    let cfg = AnalysisConfig::default();
    let data =
        ChartDataBuilder::from_config(&cfg).build(&table(BENCH), &ids(&[("A", "x"), ("A", "y")]));
    let t = data.get("us/Iteration").unwrap();

    let mut buf = Vec::new();
    t.write_csv(&mut buf).unwrap();
    let text = String::from_utf8(buf.clone()).unwrap();
    assert_eq!(text.lines().next().unwrap(), "Problem Space,\"(A,x)\",\"(A,y)\"");

    let reloaded = SeriesTable::from_reader(buf.as_slice(), b',').unwrap();
    assert_eq!(&reloaded, t);
}

#[test]
fn project_keeps_requested_order_and_skips_unknown() {
    let mut t = SeriesTable::new("n", vec![1.0]);
    t.push_column("a", vec![1.0]);
    t.push_column("b", vec![2.0]);
    t.push_column("c", vec![3.0]);
    let p = t.project(&["c".to_string(), "zzz".to_string(), "a".to_string()]);
    assert_eq!(p.column_names(), vec!["c", "a"]);
}
