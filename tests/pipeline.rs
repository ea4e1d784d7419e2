use ironchain::stages::{Filter, Flatten, Slice};
use ironchain::{Collection, Stage, Value};

#[test]
fn append_returns_a_new_pipeline() {
    let c = Collection::from_vec(vec![1, 2, 3, 4]);
    let base = c.pipeline().clone();

    let sliced = base.append(Stage::Slice(Slice::new(1, 2)));
    let flat = sliced.append(Stage::Flatten(Flatten));

    assert_eq!(base.stage_count(), 0);
    assert_eq!(sliced.stage_count(), 1);
    assert_eq!(flat.stage_count(), 2);
    assert_eq!(
        flat.stages().iter().map(|s| s.name()).collect::<Vec<_>>(),
        vec!["Slice", "Flatten"]
    );
}

#[test]
fn evaluate_threads_every_stage() {
    let c = Collection::from_vec(vec![0, 1, 2, 3]);
    let p = c
        .pipeline()
        .append(Stage::Filter(Filter::new(Vec::new())))
        .append(Stage::Slice(Slice::new(1, -1)));

    let out: Vec<Value> = p.evaluate().map(|(_, v)| v).collect();
    assert_eq!(out, vec![Value::from(2), Value::from(3)]);
}

#[test]
fn sibling_pipelines_do_not_see_each_other() {
    let base = Collection::from_vec(vec![1, 2, 3]).filter_truthy();
    let a = base.slice(0, 1);
    let b = base.slice(2, 1);

    assert_eq!(a.to_vec(), vec![Value::from(1)]);
    assert_eq!(b.to_vec(), vec![Value::from(3)]);
    assert_eq!(base.pipeline().stage_count(), 1);
    assert_eq!(a.pipeline().stages()[0].name(), "Filter");
}

#[test]
fn sources_are_shared_not_copied() {
    let base = Collection::from_vec(vec![1, 2, 3]);
    let derived = base.add([4]);
    assert!(std::ptr::eq(base.pipeline().source(), derived.pipeline().source()));
}
