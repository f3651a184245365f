use serde_json::Value;

use crate::models::LineInput;
use crate::OrderError;

/// True for values the payload contract treats as absent: null, false,
/// zero, empty string, empty array, empty object.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Structural validation for an order payload.
///
/// Checks run in order and the first failure wins: `lines` must be present
/// and non-empty, must be a list, every line must carry integer `partId`
/// and `quantity`, and every quantity must be positive. Whether the parts
/// actually exist is settled later, when lines are resolved against the
/// catalog.
pub fn validate_order_input(payload: &Value) -> Result<Vec<LineInput>, OrderError> {
    let lines = payload.get("lines").unwrap_or(&Value::Null);

    if is_blank(lines) {
        return Err(OrderError::Validation("lines required".to_string()));
    }

    let Some(items) = lines.as_array() else {
        return Err(OrderError::Validation("lines must be a list".to_string()));
    };

    let mut parsed = Vec::with_capacity(items.len());
    for item in items {
        let part_id = item.get("partId").and_then(Value::as_i64);
        let quantity = item.get("quantity").and_then(Value::as_i64);

        let (Some(part_id), Some(quantity)) = (part_id, quantity) else {
            return Err(OrderError::Validation(
                "each line needs partId and quantity".to_string(),
            ));
        };

        if quantity <= 0 {
            return Err(OrderError::Validation(
                "quantity must be greater than 0".to_string(),
            ));
        }

        parsed.push(LineInput { part_id, quantity });
    }

    Ok(parsed)
}
