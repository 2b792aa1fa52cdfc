//! Stringify: render one value for display.
//!
//! Host objects render themselves, a few script types get fixed text, and
//! everything else goes through `serde_json` as pretty-printed JSON.
//! Cycles and excessive nesting are detected up front instead of relying on
//! the encoder (or the stack) to fail.

use serde_json::{Map, Number, Value};

use crate::console::value::{ScriptValue, MAX_NESTING};
use crate::errors::StringifyError;

/// Render a value, degrading to a `[Circular: ...]` placeholder on failure.
pub fn stringify(value: &ScriptValue) -> String {
    match try_stringify(value) {
        Ok(text) => text,
        Err(e) => format!("[Circular: {}]", e),
    }
}

/// Render a value, reporting serialization failures to the caller.
pub fn try_stringify(value: &ScriptValue) -> Result<String, StringifyError> {
    match value {
        ScriptValue::Foreign(object) => Ok(object.to_display_string()),
        ScriptValue::Undefined => Ok("undefined".to_string()),
        ScriptValue::Function(_) => Ok("[Function]".to_string()),
        ScriptValue::RegExp { .. } => Ok(value.to_js_string()),
        _ => {
            let mut path = Vec::new();
            // Top-level undefined/function are handled above, so None cannot occur here.
            let json = to_json(value, &mut path)?.unwrap_or(Value::Null);
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

/// Convert to a JSON tree. `None` marks values JSON drops (undefined, functions).
fn to_json(
    value: &ScriptValue,
    path: &mut Vec<*const ()>,
) -> Result<Option<Value>, StringifyError> {
    let json = match value {
        ScriptValue::Undefined | ScriptValue::Function(_) => return Ok(None),
        ScriptValue::Null => Value::Null,
        ScriptValue::Bool(b) => Value::Bool(*b),
        ScriptValue::Number(n) => number_to_json(*n),
        ScriptValue::String(s) => Value::String(s.clone()),
        ScriptValue::RegExp { .. } => Value::Object(Map::new()),
        ScriptValue::Foreign(object) => Value::String(object.to_display_string()),
        ScriptValue::Array(items) => {
            let id = enter(value, path)?;
            let mut out = Vec::with_capacity(items.borrow().len());
            for item in items.borrow().iter() {
                out.push(to_json(item, path)?.unwrap_or(Value::Null));
            }
            leave(id, path);
            Value::Array(out)
        }
        ScriptValue::Object(entries) => {
            let id = enter(value, path)?;
            let mut out = Map::new();
            for (key, item) in entries.borrow().iter() {
                if let Some(json) = to_json(item, path)? {
                    out.insert(key.clone(), json);
                }
            }
            leave(id, path);
            Value::Object(out)
        }
    };
    Ok(Some(json))
}

fn enter(value: &ScriptValue, path: &mut Vec<*const ()>) -> Result<Option<*const ()>, StringifyError> {
    let id = value.container_id();
    if let Some(id) = id {
        if path.contains(&id) {
            return Err(StringifyError::Cycle);
        }
        if path.len() >= MAX_NESTING {
            return Err(StringifyError::TooDeep);
        }
        path.push(id);
    }
    Ok(id)
}

fn leave(id: Option<*const ()>, path: &mut Vec<*const ()>) {
    if id.is_some() {
        path.pop();
    }
}

fn number_to_json(n: f64) -> Value {
    if !n.is_finite() {
        return Value::Null;
    }
    // Keep integral values free of a trailing ".0"
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}
