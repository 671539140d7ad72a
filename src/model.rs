//! Product entity and request bodies.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Monitor Curvo 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

/// Body of `POST /api/products`. Availability is not accepted here; new products are available.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewProduct {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
}

/// Body of `PUT /api/products/{id}`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ProductUpdate {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(deserialize_with = "lenient_bool")]
    pub availability: bool,
}

/// Numbers, or strings holding a decimal number ("12.5").
pub(crate) fn numeric_value(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Booleans, or the strings "true", "false", "1", "0".
pub(crate) fn boolean_value(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Scalars are accepted as text, so `{"name": 42}` stores "42".
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        v @ (Value::Number(_) | Value::Bool(_)) => Ok(v.to_string()),
        v => Err(de::Error::custom(format!("expected a string, got {}", v))),
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let v = Value::deserialize(deserializer)?;
    numeric_value(&v).ok_or_else(|| de::Error::custom(format!("expected a number, got {}", v)))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let v = Value::deserialize(deserializer)?;
    boolean_value(&v).ok_or_else(|| de::Error::custom(format!("expected a boolean, got {}", v)))
}
