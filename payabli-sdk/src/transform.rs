//! Key and parameter rewriting applied to outgoing requests.
//!
//! Callers write request bodies with snake_case keys; the API expects
//! camelCase. [`camelize`] rewrites every key of a JSON object, recursing
//! into nested objects only. Arrays and scalars are left untouched.

use serde_json::{Map, Value};

/// Rewrite one `snake_case` key as `camelCase`.
///
/// Every underscore followed by a character is dropped and that character
/// upper-cased. The first segment is kept as-is, so already-camelCase keys
/// come back unchanged. A trailing underscore is preserved.
pub fn camelize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars();
    while let Some(c) = chars.next() {
        if c != '_' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next) => out.extend(next.to_uppercase()),
            None => out.push('_'),
        }
    }
    out
}

/// `snake_case` to `PascalCase`, used when looking up response fields.
pub(crate) fn pascalize_key(key: &str) -> String {
    let camel = camelize_key(key);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

/// Recursively camelize the keys of a JSON object.
pub fn camelize(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Object(inner) => Value::Object(camelize(inner)),
                other => other.clone(),
            };
            (camelize_key(key), value)
        })
        .collect()
}

/// Camelize a request body. Absent or empty bodies produce no body at all.
pub fn camelize_body(body: Option<&Map<String, Value>>) -> Option<Map<String, Value>> {
    body.filter(|map| !map.is_empty()).map(camelize)
}

/// Build a `?a=1&b=2` query string from the listed keys of `params`.
///
/// Keys are emitted in list order and only when present with a truthy
/// value (neither `null` nor `false`). Values are percent-encoded. Returns
/// an empty string when nothing qualifies.
pub fn create_query_string(params: &Map<String, Value>, keys: &[&str]) -> String {
    let pairs: Vec<String> = keys
        .iter()
        .filter_map(|key| {
            let value = params.get(*key)?;
            if !is_truthy(value) {
                return None;
            }
            Some(format!("{key}={}", urlencoding::encode(&scalar_text(value))))
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// Replace a list-valued `key` with indexed entries.
///
/// String elements become `key[i]`. Object elements carrying a `role` are
/// stored under `key[<role>]` with the role removed; other elements use
/// `key[i]`. Missing or non-list keys are left alone.
pub fn index_list(map: &mut Map<String, Value>, key: &str) {
    if !matches!(map.get(key), Some(Value::Array(_))) {
        return;
    }
    let Some(Value::Array(items)) = map.remove(key) else {
        return;
    };

    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(mut inner) => match inner.remove("role") {
                Some(role) => {
                    map.insert(format!("{key}[{}]", scalar_text(&role)), Value::Object(inner));
                }
                None => {
                    map.insert(format!("{key}[{index}]"), Value::Object(inner));
                }
            },
            other => {
                map.insert(format!("{key}[{index}]"), other);
            }
        }
    }
}

/// Text of a JSON value as it appears in a form field or query string:
/// strings verbatim, everything else as JSON.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}
