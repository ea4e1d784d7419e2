use ironchain::testing::*;
use ironchain::{Collection, Order, Value};

#[test]
fn explain_lists_stages_in_application_order() {
    let plan = Collection::from_vec(vec![1, 2, 3])
        .filter(|v, _| v.is_truthy())
        .map(|v, _| v.clone())
        .sort(Order::DescendingValue)
        .slice(0, 2)
        .explain();

    let names: Vec<&str> = plan.steps.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Filter", "Map", "Sort", "Slice"]);
    assert_eq!(plan.steps.iter().map(|s| s.step).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(plan.lazy_stages, 3);
    assert_eq!(plan.eager_stages, 1);
}

#[test]
fn explain_reports_the_source() {
    let buffered = Collection::from_vec(vec![1, 2, 3]).explain();
    assert_eq!(buffered.source_kind, "Buffered");
    assert_eq!(buffered.source_size, Some(3));
    assert!(buffered.repeatable);

    let once = Collection::from_once(vec![Value::from(1)]).explain();
    assert_eq!(once.source_kind, "Once");
    assert_eq!(once.source_size, None);
    assert!(!once.repeatable);
}

#[test]
fn explain_never_pulls() {
    let probe = PullProbe::new();
    let _ = probe
        .collection(0..10)
        .group_by(|v| v.as_i64().unwrap_or_default() % 2)
        .explain();
    assert_eq!(probe.opened(), 0);
}

#[test]
fn barrier_flags_follow_stage_behaviour() {
    let plan = Collection::from_vec(vec![1])
        .slice(0, -1)
        .slice(0, -2)
        .group_by(|_| "all")
        .flatten()
        .explain();
    let barriers: Vec<bool> = plan.steps.iter().map(|s| s.is_barrier).collect();
    assert_eq!(barriers, vec![false, true, true, false]);
}

#[test]
fn rendered_plan_marks_barriers() {
    let text = Collection::from_vec(vec![2, 1])
        .remove(2)
        .sort(Order::AscendingValue)
        .explain()
        .to_string();

    assert!(text.contains("PIPELINE EXPLANATION"));
    assert!(text.contains("Step 1: Remove\n"));
    assert!(text.contains("Step 2: Sort [BARRIER]"));
    assert!(text.contains("AscendingValue (natural order)"));
}

#[test]
fn empty_pipeline_renders() {
    let text = Collection::empty().explain().to_string();
    assert!(text.contains("(none)"));
}
