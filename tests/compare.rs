use ironchain::testing::*;
use ironchain::{Collection, Equality, Value};

#[test]
fn equals_is_order_sensitive() {
    let a = Collection::from_vec(vec![1, 2, 3]);
    assert!(!a.equals(&Collection::from_vec(vec![3, 2, 1])));
    assert!(a.equals(&Collection::from_vec(vec![1, 2, 3])));
}

#[test]
fn equals_ignores_keys() {
    let a = Collection::from_entries([("x", 1), ("y", 2)]);
    let b = Collection::from_vec(vec![1, 2]);
    assert!(a.equals(&b));
}

#[test]
fn equals_rejects_prefix() {
    let a = Collection::from_vec(vec![1, 2]);
    let b = Collection::from_vec(vec![1, 2, 3]);
    assert!(!a.equals(&b));
    assert!(!b.equals(&a));
    assert!(Collection::empty().equals(&Collection::empty()));
}

#[test]
fn equals_stops_at_first_difference() {
    let left = PullProbe::new();
    let right = PullProbe::new();
    let a = left.collection(0..1_000_000);
    let b = right.collection((0..1_000_000).map(|n| if n == 5 { -1 } else { n }));
    assert!(!a.equals(&b));
    assert_eq!(left.pulled(), 6);
    assert_eq!(right.pulled(), 6);
}

#[test]
fn contains_is_strict_for_primitives() {
    let c = Collection::from_vec(vec![Value::from(1), Value::from("2")]);
    assert!(c.contains(1));
    assert!(!c.contains(1.0));
    assert!(!c.contains(2));
    assert!(c.contains("2"));
}

#[test]
fn contains_compares_records_structurally() -> anyhow::Result<()> {
    let coins = Collection::from_serializable(&crypto_currencies())?;
    let cardano = Value::from_serializable(&CryptoCurrency::new("Cardano", 2.0, "ADA"))?;
    let fake = Value::from_serializable(&CryptoCurrency::new("Cardano", 3.0, "ADA"))?;
    assert!(coins.contains(cardano));
    assert!(!coins.contains(fake));
    Ok(())
}

#[test]
fn contains_stops_at_first_match() {
    let probe = PullProbe::new();
    let c = probe.collection(0..1_000_000);
    assert!(c.contains(3));
    assert_eq!(probe.pulled(), 4);
}

#[test]
fn nested_lists_compare_deeply() {
    let eq = Equality;
    assert!(eq.compare(&Value::from(vec![vec![1], vec![2]]), &Value::from(vec![vec![1], vec![2]])));
    assert!(!eq.compare(&Value::from(vec![vec![1], vec![2]]), &Value::from(vec![vec![1], vec![2, 3]])));
    assert!(!eq.compare(&Value::from(vec![1]), &Value::from(vec![1.0])));
}

#[test]
fn nan_equals_itself() {
    let c = Collection::from_vec(vec![Value::from(f64::NAN), Value::from(1)]);
    assert!(c.equals(&c));
    assert!(c.contains(f64::NAN));
    assert!(Equality.compare(&Value::from(f64::NAN), &Value::from(f64::NAN)));
}
