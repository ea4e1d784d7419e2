use ironchain::testing::*;
use ironchain::{Collection, Key, Value};

#[test]
fn group_by_parity_in_first_occurrence_order() {
    let grouped = Collection::from_vec(vec![1, 2, 3, 4, 5, 6])
        .group_by(|v| if v.as_i64().unwrap_or_default() % 2 == 0 { "even" } else { "odd" });

    assert_entries(
        &grouped,
        &[
            (Key::from("odd"), Value::from(vec![1, 3, 5])),
            (Key::from("even"), Value::from(vec![2, 4, 6])),
        ],
    );
}

#[test]
fn group_by_record_field() -> anyhow::Result<()> {
    let by_customer = Collection::from_serializable(&invoices())?.group_by(|v| {
        v.get("customer")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    });

    let sizes: Vec<(Key, usize)> = by_customer
        .iter()
        .map(|(k, v)| (k, v.as_list().map_or(0, <[Value]>::len)))
        .collect();
    assert_eq!(
        sizes,
        vec![
            (Key::from("Customer A"), 2),
            (Key::from("Customer B"), 2),
            (Key::from("Customer C"), 1),
        ]
    );
    Ok(())
}

#[test]
fn group_by_integer_keys() {
    let grouped = Collection::from_vec(vec![10, 21, 12, 33]).group_by(|v| v.as_i64().unwrap_or_default() / 10);
    assert_eq!(grouped.count(), 3);
    assert_eq!(grouped.first(), Some(Value::from(vec![10, 12])));
}

#[test]
fn group_by_empty_is_empty() {
    assert!(Collection::empty().group_by(|_| 0).is_empty());
}

#[test]
fn flatten_expands_one_level_and_renumbers() {
    let flat = Collection::from_vec(nested_lists()).flatten();
    assert_entries(
        &flat,
        &[
            (Key::from(0), Value::from(1)),
            (Key::from(1), Value::from(2)),
            (Key::from(2), Value::from(3)),
            (Key::from(3), Value::from(vec![4, 5])),
            (Key::from(4), Value::from(vec![6])),
        ],
    );
}

#[test]
fn flatten_yields_map_values() -> anyhow::Result<()> {
    let flat = Collection::from_serializable(&dragons())?.slice(0, 1).flatten();
    assert_elements_unordered(&flat, &values(["Smaug", "Fire-breathing"]));
    Ok(())
}

#[test]
fn flatten_of_scalars_is_identity() {
    let c = Collection::from_vec(vec![1, 2, 3]).flatten();
    assert_elements(&c, &values([1, 2, 3]));
}

#[test]
fn flatten_twice_on_one_level_input_is_idempotent() {
    let input = Collection::from_vec(vec![Value::from(vec![1, 2]), Value::from(3), Value::from(vec![4])]);
    let once = input.flatten();
    let twice = once.flatten();
    assert_eq!(once.to_entries(), twice.to_entries());
}

#[test]
fn group_then_flatten_restores_grouped_order() {
    let regrouped = Collection::from_vec(vec![1, 2, 3, 4])
        .group_by(|v| v.as_i64().unwrap_or_default() % 2)
        .flatten();
    assert_elements(&regrouped, &values([1, 3, 2, 4]));
}
