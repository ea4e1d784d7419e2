use ironchain::testing::*;
use ironchain::{Collection, Key, Order, Value};

fn sample() -> Collection {
    Collection::from_entries([(3, 5), (1, 1), (4, 3), (5, 4), (2, 2)])
}

fn keys(c: &Collection) -> Vec<Key> {
    c.iter().map(|(k, _)| k).collect()
}

#[test]
fn ascending_value_keeps_original_keys() {
    let sorted = sample().sort(Order::AscendingValue);
    assert_entries(
        &sorted,
        &[
            (Key::from(1), Value::from(1)),
            (Key::from(2), Value::from(2)),
            (Key::from(4), Value::from(3)),
            (Key::from(5), Value::from(4)),
            (Key::from(3), Value::from(5)),
        ],
    );
}

#[test]
fn descending_value() {
    let sorted = sample().sort(Order::DescendingValue);
    assert_elements(&sorted, &values([5, 4, 3, 2, 1]));
}

#[test]
fn ascending_and_descending_key() {
    assert_eq!(
        keys(&sample().sort(Order::AscendingKey)),
        (1..=5).map(Key::from).collect::<Vec<_>>()
    );
    assert_eq!(
        keys(&sample().sort(Order::DescendingKey)),
        (1..=5).rev().map(Key::from).collect::<Vec<_>>()
    );
}

#[test]
fn default_order_is_ascending_key() {
    assert_eq!(Order::default(), Order::AscendingKey);
}

#[test]
fn custom_comparator_orders_records() -> anyhow::Result<()> {
    let by_price = Collection::from_serializable(&crypto_currencies())?.sort_with(Order::AscendingValue, |a, b| {
        let pa = a.get("price").and_then(Value::as_f64).unwrap_or_default();
        let pb = b.get("price").and_then(Value::as_f64).unwrap_or_default();
        pa.total_cmp(&pb)
    });

    let symbols = by_price.map(|v, _| v.get("symbol").cloned().unwrap_or_default());
    assert_elements(&symbols, &values(["ADA", "BNB", "ETH", "BTC"]));
    Ok(())
}

#[test]
fn descending_custom_comparator_swaps_operands() {
    let by_len = Collection::from_vec(vec!["ccc", "a", "bb"]).sort_with(Order::DescendingValue, |a, b| {
        let la = a.as_str().map_or(0, str::len);
        let lb = b.as_str().map_or(0, str::len);
        la.cmp(&lb)
    });
    assert_elements(&by_len, &values(["ccc", "bb", "a"]));
}

#[test]
fn equal_values_keep_upstream_order() {
    let c = Collection::from_entries([(0, "b"), (1, "a"), (2, "b"), (3, "a")]).sort(Order::AscendingValue);
    assert_eq!(keys(&c), vec![Key::from(1), Key::from(3), Key::from(0), Key::from(2)]);

    let d = Collection::from_entries([(0, "b"), (1, "a"), (2, "b"), (3, "a")]).sort(Order::DescendingValue);
    assert_eq!(keys(&d), vec![Key::from(0), Key::from(2), Key::from(1), Key::from(3)]);
}

#[test]
fn mixed_kinds_sort_by_rank() {
    let c = Collection::from_vec(vec![Value::from("x"), Value::from(2.5), Value::Null, Value::from(1), Value::from(true)])
        .sort(Order::AscendingValue);
    assert_elements(
        &c,
        &[Value::Null, Value::from(true), Value::from(1), Value::from(2.5), Value::from("x")],
    );
}

#[test]
fn sorting_twice_is_idempotent() {
    let data = pseudo_random_data(200, -50, 50);
    for order in [Order::AscendingKey, Order::DescendingKey, Order::AscendingValue, Order::DescendingValue] {
        let once = Collection::from_vec(data.clone()).sort(order);
        let twice = once.sort(order);
        assert_eq!(once.to_entries(), twice.to_entries(), "{order:?}");
    }
}

#[test]
fn sort_does_not_buffer_until_pulled() {
    let probe = PullProbe::new();
    let sorted = probe.collection(vec![3, 1, 2]).sort(Order::AscendingValue);
    let mut it = sorted.iter();
    assert_eq!(probe.pulled(), 0);
    assert_eq!(it.next().map(|(_, v)| v), Some(Value::from(1)));
    assert_eq!(probe.pulled(), 3);
}
