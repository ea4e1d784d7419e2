//! Pre-built records and datasets for common testing scenarios.

use serde::{Deserialize, Serialize};

/// A priced asset; the record type most collection tests run against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoCurrency {
    pub name: String,
    pub price: f64,
    pub symbol: String,
}

impl CryptoCurrency {
    #[must_use]
    pub fn new(name: &str, price: f64, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            symbol: symbol.to_string(),
        }
    }
}

/// Four well-known currencies, most expensive first.
///
/// ```
/// use ironchain::testing::crypto_currencies;
///
/// assert_eq!(crypto_currencies()[0].symbol, "BTC");
/// ```
#[must_use]
pub fn crypto_currencies() -> Vec<CryptoCurrency> {
    vec![
        CryptoCurrency::new("Bitcoin", 60000.0, "BTC"),
        CryptoCurrency::new("Ethereum", 40000.0, "ETH"),
        CryptoCurrency::new("Binance Coin", 1500.0, "BNB"),
        CryptoCurrency::new("Cardano", 2.0, "ADA"),
    ]
}

/// A billed amount, used for grouping and summing tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub amount: f64,
    pub customer: String,
}

/// Five invoices across three customers, in issue order.
#[must_use]
pub fn invoices() -> Vec<Invoice> {
    [
        ("INV001", 100.0, "Customer A"),
        ("INV002", 150.5, "Customer B"),
        ("INV003", 200.75, "Customer A"),
        ("INV004", 50.0, "Customer C"),
        ("INV005", 75.25, "Customer B"),
    ]
    .into_iter()
    .map(|(id, amount, customer)| Invoice {
        id: id.to_string(),
        amount,
        customer: customer.to_string(),
    })
    .collect()
}

/// A record with two text fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dragon {
    pub name: String,
    pub description: String,
}

#[must_use]
pub fn dragons() -> Vec<Dragon> {
    [
        ("Smaug", "Fire-breathing"),
        ("Shenron", "Wish-granting"),
        ("Toothless", "Night Fury"),
    ]
    .into_iter()
    .map(|(name, description)| Dragon {
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

#[must_use]
pub fn fruits() -> Vec<&'static str> {
    vec!["apple", "banana", "cherry"]
}

/// Mixed truthy and falsy elements.
///
/// ```
/// use ironchain::testing::mixed_truthiness;
/// use ironchain::Collection;
///
/// let kept = Collection::from_vec(mixed_truthiness()).filter_truthy();
/// assert_eq!(kept.count(), 4);
/// ```
#[must_use]
pub fn mixed_truthiness() -> Vec<crate::Value> {
    use crate::Value;
    vec![
        Value::Int(0),
        Value::Int(1),
        Value::Null,
        Value::from("a"),
        Value::from(""),
        Value::Bool(false),
        Value::Bool(true),
        Value::from(vec![1]),
        Value::List(Vec::new()),
    ]
}

/// One level of nesting mixed with scalars.
#[must_use]
pub fn nested_lists() -> Vec<crate::Value> {
    use crate::Value;
    vec![
        Value::from(vec![1, 2]),
        Value::from(3),
        Value::from(vec![vec![4, 5], vec![6]]),
        Value::List(Vec::new()),
    ]
}
