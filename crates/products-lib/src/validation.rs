//! Payload validation for product create and replace.
//!
//! Required: `name` and `category` as non-empty strings, `price` as a finite
//! non-negative number. Optional: `description` (string, defaults to empty)
//! and `inStock` (boolean, defaults to `false`). Unknown keys, including any
//! client-supplied `id`, are ignored.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::product::ProductFields;

/// Check a raw JSON payload and extract the product fields from it.
///
/// The first failing rule determines the error message.
pub fn validate_product(payload: &Value) -> Result<ProductFields> {
    let Some(object) = payload.as_object() else {
        return Err(Error::validation("Request body must be a JSON object"));
    };

    let name = required_string(object, "name")?;

    let price = match object.get("price").and_then(Value::as_f64) {
        Some(price) if price.is_finite() && price >= 0.0 => price,
        _ => {
            return Err(Error::validation(
                "The 'price' field is required and must be a non-negative number",
            ))
        }
    };

    let category = required_string(object, "category")?;

    let description = match object.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(_) => {
            return Err(Error::validation(
                "The 'description' field must be a string",
            ))
        }
    };

    let in_stock = match object.get("inStock") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(Error::validation("The 'inStock' field must be a boolean")),
    };

    Ok(ProductFields {
        name,
        description,
        price,
        category,
        in_stock,
    })
}

fn required_string(object: &Map<String, Value>, field: &str) -> Result<String> {
    match object.get(field) {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(Error::validation(format!(
            "The '{field}' field is required and must be a non-empty string"
        ))),
    }
}
