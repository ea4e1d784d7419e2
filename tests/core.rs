use anyhow::Result;
use ironchain::testing::*;
use ironchain::{Collection, Key, Order, Value};

#[test]
fn filter_chain_keeps_original_collection_intact() -> Result<()> {
    let numbers = Collection::from_vec(vec![1, 2, 3, 4, 5, 6]);

    let picked = numbers
        .filter(|v, _| v.as_i64().is_some_and(|n| n > 2))
        .filter(|v, _| v.as_i64().is_some_and(|n| n % 2 == 0));

    assert_elements(&picked, &values([4, 6]));
    assert_elements(&numbers, &values([1, 2, 3, 4, 5, 6]));
    Ok(())
}

#[test]
fn derived_collections_share_a_prefix_independently() {
    let base = Collection::from_vec(vec![1, 2, 3]).map(|v, _| Value::from(v.as_i64().unwrap_or(0) * 10));

    let plus = base.add([40]);
    let minus = base.remove(20);

    assert_elements(&base, &values([10, 20, 30]));
    assert_elements(&plus, &values([10, 20, 30, 40]));
    assert_elements(&minus, &values([10, 30]));
    assert_eq!(base.pipeline().stage_count(), 1);
    assert_eq!(plus.pipeline().stage_count(), 2);
    assert_eq!(minus.pipeline().stage_count(), 2);
}

#[test]
fn every_terminal_call_reevaluates() {
    let probe = PullProbe::new();
    let c = probe.collection(vec![1, 2, 3]);

    assert_eq!(c.count(), 3);
    assert_eq!(c.count(), 3);
    assert_eq!(probe.opened(), 2);
}

#[test]
fn sources_number_elements_from_zero() {
    let c = Collection::from_vec(vec!["a", "b", "c"]);
    let keys: Vec<Key> = c.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![Key::from(0), Key::from(1), Key::from(2)]);
}

#[test]
fn explicit_entries_keep_their_keys() {
    let c = Collection::from_entries([("x", 1), ("y", 2)]);
    assert_entries(
        &c,
        &[(Key::from("x"), Value::from(1)), (Key::from("y"), Value::from(2))],
    );
}

#[test]
fn empty_and_default_collections_yield_nothing() {
    assert!(Collection::empty().is_empty());
    assert!(Collection::default().is_empty());
    assert_eq!(Collection::empty().count(), 0);
    assert_eq!(Collection::empty().sort(Order::AscendingValue).count(), 0);
}

#[test]
fn records_enter_through_serde() -> Result<()> {
    let coins = Collection::from_serializable(&crypto_currencies())?;

    let symbols = coins
        .filter(|v, _| v.get("price").and_then(Value::as_f64).is_some_and(|p| p > 1000.0))
        .map(|v, _| v.get("symbol").cloned().unwrap_or_default());

    assert_elements(&symbols, &values(["BTC", "ETH", "BNB"]));
    Ok(())
}

#[test]
fn collect_from_iterator() {
    let c: Collection = (1..=4).collect();
    assert_eq!(c.count(), 4);
    assert_eq!(c.last(), Some(Value::from(4)));
}

#[test]
fn borrowed_collection_iterates_with_for() {
    let c = Collection::from_vec(vec![1, 2]);
    let mut sum = 0;
    for (_, v) in &c {
        sum += v.as_i64().unwrap_or(0);
    }
    assert_eq!(sum, 3);
}

#[test]
fn debug_lists_source_and_stages() {
    let c = Collection::from_vec(vec![1]).filter_truthy().flatten();
    let text = format!("{c:?}");
    assert!(text.contains("Buffered"));
    assert!(text.contains("Filter"));
    assert!(text.contains("Flatten"));
}
