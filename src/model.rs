//! Product records and the normalization step.
//!
//! The API hands us loosely typed JSON. [`normalize`] is the only way to
//! obtain a [`Product`]: it checks that every required field is present,
//! flattens the nested `category` object to its name, and decodes each
//! field into a concrete type.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::{CatalogError, CatalogResult};

/// A record exactly as decoded from the wire.
pub type RawRecord = Value;

/// Fields every record must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 5] = ["id", "title", "price", "category", "description"];

/// Product identifier, kept in whichever form the API sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProductId {
    Integer(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Integer(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// A validated product with `category` flattened to its display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Number,
    pub category: String,
    pub description: String,
}

impl Product {
    /// Price as a float, for display.
    pub fn price_f64(&self) -> f64 {
        self.price.as_f64().unwrap_or_default()
    }
}

/// Validate a raw record and reshape it into a [`Product`].
///
/// Errors with `MissingField` for the first absent field in
/// [`REQUIRED_FIELDS`] order, then `InvalidShape` if `category` is not an
/// object with a `name` or a field has the wrong JSON type.
pub fn normalize(raw: &RawRecord) -> CatalogResult<Product> {
    let empty = Map::new();
    let record = raw.as_object().unwrap_or(&empty);

    for field in REQUIRED_FIELDS {
        if !record.contains_key(field) {
            return Err(CatalogError::MissingField(field));
        }
    }

    let category = match &record["category"] {
        Value::Object(category) if category.contains_key("name") => category,
        _ => {
            return Err(CatalogError::InvalidShape(
                "category must be an object with a name".into(),
            ))
        }
    };

    let id = match &record["id"] {
        Value::Number(n) => n
            .as_i64()
            .map(ProductId::Integer)
            .ok_or_else(|| wrong_type("id", "an integer or a string"))?,
        Value::String(s) => ProductId::Text(s.clone()),
        _ => return Err(wrong_type("id", "an integer or a string")),
    };

    let price = match &record["price"] {
        Value::Number(n) => n.clone(),
        _ => return Err(wrong_type("price", "a number")),
    };

    Ok(Product {
        id,
        title: string_field(record, "title")?,
        price,
        category: string_field(category, "name").map_err(|_| wrong_type("category.name", "a string"))?,
        description: string_field(record, "description")?,
    })
}

fn string_field(record: &Map<String, Value>, field: &str) -> CatalogResult<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| wrong_type(field, "a string"))
}

fn wrong_type(field: &str, expected: &str) -> CatalogError {
    CatalogError::InvalidShape(format!("{field} must be {expected}"))
}
