use anyhow::Result;
use ironchain::testing::*;
use ironchain::{Collection, JsonOptions, Order, PreserveKeys, Value};
use serde_json::json;
use std::fs;

#[test]
fn sequential_keys_serialize_as_an_array() -> Result<()> {
    let c = Collection::from_vec(vec![1, 2, 3]);
    assert_eq!(c.to_array(PreserveKeys::Preserve), json!([1, 2, 3]));
    assert_eq!(c.to_json(PreserveKeys::Preserve)?, "[1,2,3]");
    Ok(())
}

#[test]
fn gapped_keys_serialize_as_an_object_in_evaluation_order() -> Result<()> {
    let c = Collection::from_vec(vec!["a", "b", "c", "d"]).sort(Order::DescendingValue);
    assert_eq!(
        c.to_json(PreserveKeys::Preserve)?,
        r#"{"3":"d","2":"c","1":"b","0":"a"}"#
    );
    assert_eq!(c.to_json(PreserveKeys::Discard)?, r#"["d","c","b","a"]"#);
    Ok(())
}

#[test]
fn slice_keeps_original_keys_in_output() -> Result<()> {
    let coins = Collection::from_serializable(&crypto_currencies())?.slice(1, 2);
    let array = coins.to_array(PreserveKeys::Preserve);
    assert_eq!(array["1"]["symbol"], json!("ETH"));
    assert_eq!(array["2"]["symbol"], json!("BNB"));

    let discarded = coins.to_array(PreserveKeys::Discard);
    assert_eq!(discarded[0]["name"], json!("Ethereum"));
    Ok(())
}

#[test]
fn labelled_keys_become_members() -> Result<()> {
    let grouped = Collection::from_vec(vec![1, 2, 3])
        .group_by(|v| if v.as_i64().unwrap_or_default() % 2 == 0 { "even" } else { "odd" });
    assert_eq!(grouped.to_json(PreserveKeys::default())?, r#"{"odd":[1,3],"even":[2]}"#);
    Ok(())
}

#[test]
fn empty_collection_is_an_empty_array() -> Result<()> {
    assert_eq!(Collection::empty().to_json(PreserveKeys::Preserve)?, "[]");
    assert_eq!(Collection::empty().to_json(PreserveKeys::Discard)?, "[]");
    Ok(())
}

#[test]
fn non_finite_floats_become_null() -> Result<()> {
    let c = Collection::from_vec(vec![Value::from(f64::NAN), Value::from(1.5)]);
    assert_eq!(c.to_json(PreserveKeys::Discard)?, "[null,1.5]");
    Ok(())
}

#[test]
fn pretty_output_is_indented() -> Result<()> {
    let text = Collection::from_vec(vec![1]).to_json_pretty(PreserveKeys::Discard)?;
    assert_eq!(text, "[\n  1\n]");
    Ok(())
}

#[test]
fn write_json_round_trips_through_a_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("coins.json");

    let coins = Collection::from_serializable(&crypto_currencies())?
        .filter(|v, _| v.get("price").and_then(Value::as_f64).is_some_and(|p| p < 50000.0));
    let written = coins.write_json(
        &path,
        JsonOptions {
            preserve_keys: PreserveKeys::Discard,
            pretty: true,
        },
    )?;
    assert_eq!(written, 3);

    let parsed: Vec<CryptoCurrency> = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(parsed, crypto_currencies()[1..].to_vec());
    Ok(())
}

#[test]
fn write_json_reports_the_path_on_failure() {
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let path = dir.path().join("missing").join("out.json");
    let err = Collection::from_vec(vec![1])
        .write_json(&path, JsonOptions::default())
        .unwrap_err();
    assert!(format!("{err:#}").contains("out.json"));
}
