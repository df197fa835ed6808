use benchplot::data::visibility::*;

fn ctrl() -> SeriesVisibilityController {
    SeriesVisibilityController::new(["a", "b", "c"])
}

#[test]
fn first_render_shows_everything() {
    let c = ctrl();
    assert_eq!(c.generation(), 1);
    assert_eq!(c.lines().len(), 3);
    assert_eq!(c.legend().len(), 3);
    assert!(c.series().iter().all(|s| s.checklist_included && s.line_visible));
    assert_eq!(c.visible_series_names(), vec!["a", "b", "c"]);
}

#[test]
fn toggle_twice_restores_visibility() {
    let mut c = ctrl();
    let proxy = c.legend()[1].proxy;
    let line = c.line_for(proxy).unwrap();
    assert_eq!(c.toggle(proxy), Some(false));
    assert!(!c.is_line_visible(line));
    assert_eq!(c.legend_alpha(proxy), LEGEND_ALPHA_HIDDEN);
    assert_eq!(c.toggle(proxy), Some(true));
    assert!(c.is_line_visible(line));
    assert_eq!(c.legend_alpha(proxy), LEGEND_ALPHA_VISIBLE);
}

#[test]
fn force_all_hide_after_show_hides_everything() {
    let mut c = ctrl();
    c.toggle_series(0);
    c.force_all(true);
    c.force_all(false);
    assert!(c.series().iter().all(|s| !s.line_visible));
    // checklist untouched
    assert_eq!(c.visible_series_names().len(), 3);
}

#[test]
fn unchecking_everything_empties_visible_names() {
    let mut c = ctrl();
    c.rebuild_check_list(false);
    assert!(c.visible_series_names().is_empty());
    // lines stay as they were until the next rebuild
    assert_eq!(c.lines().len(), 3);
    assert!(c.series().iter().all(|s| s.line_visible));
}

#[test]
fn hidden_line_is_still_included() {
    let mut c = ctrl();
    let proxy = c.legend()[0].proxy;
    c.toggle(proxy);
    assert_eq!(c.visible_series_names(), vec!["a", "b", "c"]);
}

#[test]
fn update_series_plots_only_checked_and_invalidates_old_handles() {
    let mut c = ctrl();
    let old_proxy = c.legend()[0].proxy;
    c.set_included(1, false);
    c.update_series();

    assert_eq!(c.generation(), 2);
    let plotted: Vec<usize> = c.lines().iter().map(|l| l.series).collect();
    assert_eq!(plotted, vec![0, 2]);
    assert_eq!(c.legend().iter().map(|e| e.label.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
    assert_eq!(c.line_for(old_proxy), None);
    assert_eq!(c.toggle(old_proxy), None);

    for entry in c.legend() {
        assert!(c.line_for(entry.proxy).is_some());
    }
}

#[test]
fn rebuild_makes_hidden_lines_visible_again() {
    let mut c = ctrl();
    c.force_all(false);
    c.update_series();
    assert!(c.lines().iter().all(|l| c.is_line_visible(l.id)));
}

#[test]
fn empty_rebuild_has_no_legend_or_axes() {
    let mut c = ctrl();
    c.rebuild_check_list(false);
    c.update_series();
    assert!(c.lines().is_empty());
    assert!(!c.has_legend());
    assert!(!c.axes_configured());
}

#[test]
fn click_gestures_dispatch_by_area_and_button() {
    let mut c = ctrl();
    let click = |area, button| ChartClick { area, button };

    assert!(c.on_click(click(ClickArea::Plot, ClickButton::Secondary)));
    assert!(c.series().iter().all(|s| !s.line_visible));
    assert!(c.on_click(click(ClickArea::Plot, ClickButton::Middle)));
    assert!(c.series().iter().all(|s| s.line_visible));

    assert!(c.on_click(click(ClickArea::Checklist, ClickButton::Secondary)));
    assert!(c.visible_series_names().is_empty());
    assert!(c.on_click(click(ClickArea::Checklist, ClickButton::Middle)));
    assert_eq!(c.visible_series_names().len(), 3);

    c.force_all(false);
    assert!(!c.on_click(click(ClickArea::Outside, ClickButton::Middle)));
    assert!(!c.on_click(click(ClickArea::Plot, ClickButton::Primary)));
    assert!(c.series().iter().all(|s| !s.line_visible));
}

#[test]
fn legend_entries_resolve_to_their_own_series() {
    let mut c = ctrl();
    let stale = c.legend()[0].proxy;
    c.set_included(0, false);
    c.update_series();
    let resolved: Vec<Option<usize>> =
        c.legend().iter().map(|e| c.series_for(e.proxy)).collect();
    assert_eq!(resolved, vec![Some(1), Some(2)]);
    assert_eq!(c.series_for(stale), None);
}
