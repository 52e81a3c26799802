//! Parsing of API-level property shapes shared by both dialects

use super::route::{Cors, ANY_METHODS};
use serde_json::Value;
use std::collections::BTreeMap;

/// Strips the single quotes templates put around header-style values (`"'*'"`)
pub fn unquote(value: &str) -> String {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(trimmed)
        .to_string()
}

/// Scalars rendered as strings; anything else is dropped
pub fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(scalar).collect())
        .unwrap_or_default()
}

/// Stage variable mapping; non-scalar values are dropped
pub fn string_map(value: Option<&Value>) -> Option<BTreeMap<String, String>> {
    let object = value?.as_object()?;
    Some(
        object
            .iter()
            .filter_map(|(key, value)| scalar(value).map(|v| (key.clone(), v)))
            .collect(),
    )
}

fn max_age(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => unquote(s).parse().ok(),
        _ => None,
    }
}

/// REST-style `Cors`: either an origin string or a mapping of quoted strings
pub fn rest_cors(value: Option<&Value>) -> Option<Cors> {
    match value? {
        Value::String(origin) => Some(Cors {
            allow_origin: unquote(origin),
            allow_methods: Some(ANY_METHODS.join(",")),
            allow_headers: None,
            max_age: None,
        }),
        Value::Object(config) => Some(Cors {
            allow_origin: config
                .get("AllowOrigin")
                .and_then(Value::as_str)
                .map(unquote)
                .unwrap_or_else(|| "*".to_string()),
            allow_methods: config
                .get("AllowMethods")
                .and_then(Value::as_str)
                .map(|m| Cors::normalize_allow_methods(&unquote(m))),
            allow_headers: config
                .get("AllowHeaders")
                .and_then(Value::as_str)
                .map(unquote),
            max_age: max_age(config.get("MaxAge")),
        }),
        _ => None,
    }
}

/// HTTP-style `CorsConfiguration`: `true` for allow-all, or a mapping of lists
pub fn http_cors(value: Option<&Value>) -> Option<Cors> {
    match value? {
        Value::Bool(true) => Some(Cors::allow_all()),
        Value::Object(config) => {
            let origins = string_list(config.get("AllowOrigins"));
            let methods = string_list(config.get("AllowMethods"));
            let headers = string_list(config.get("AllowHeaders"));

            Some(Cors {
                allow_origin: if origins.is_empty() {
                    "*".to_string()
                } else {
                    origins.join(",")
                },
                allow_methods: (!methods.is_empty())
                    .then(|| Cors::normalize_allow_methods(&methods.join(","))),
                allow_headers: (!headers.is_empty()).then(|| headers.join(",")),
                max_age: max_age(config.get("MaxAge")),
            })
        }
        _ => None,
    }
}
