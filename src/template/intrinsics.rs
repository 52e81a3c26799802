//! Read-only helpers for intrinsic-function references
//!
//! Templates reaching this crate are already normalized, but cross-resource
//! references are still written as `Ref` / `Fn::GetAtt` / `Fn::Sub` nodes.
//! These helpers only identify which logical resource a node points at; no
//! substitution or evaluation happens here.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// `{"Ref": "Name"}` -> `Name`
pub fn ref_target(value: &Value) -> Option<&str> {
    single_key(value, "Ref")?.as_str()
}

/// `{"Fn::GetAtt": ["Name", "Attr"]}` or `{"Fn::GetAtt": "Name.Attr"}` -> `(Name, Attr)`
pub fn get_att(value: &Value) -> Option<(&str, &str)> {
    match single_key(value, "Fn::GetAtt")? {
        Value::Array(parts) if parts.len() == 2 => {
            Some((parts[0].as_str()?, parts[1].as_str()?))
        }
        Value::String(dotted) => dotted.split_once('.'),
        _ => None,
    }
}

/// The template string of an `Fn::Sub`, in either the string or the
/// `[string, variables]` form
pub fn sub_template(value: &Value) -> Option<&str> {
    match single_key(value, "Fn::Sub")? {
        Value::String(template) => Some(template),
        Value::Array(parts) => parts.first()?.as_str(),
        _ => None,
    }
}

/// Variable bindings of an `Fn::Sub` in the `[string, variables]` form
pub fn sub_bindings(value: &Value) -> Option<&Map<String, Value>> {
    match single_key(value, "Fn::Sub")? {
        Value::Array(parts) => parts.get(1)?.as_object(),
        _ => None,
    }
}

/// `Fn::Join` delimiter and parts
pub fn join_parts(value: &Value) -> Option<(&str, &[Value])> {
    match single_key(value, "Fn::Join")? {
        Value::Array(args) if args.len() == 2 => {
            Some((args[0].as_str()?, args[1].as_array()?.as_slice()))
        }
        _ => None,
    }
}

/// Logical name referenced by either `Ref` or `Fn::GetAtt`
pub fn referenced_name(value: &Value) -> Option<&str> {
    ref_target(value).or_else(|| get_att(value).map(|(name, _)| name))
}

/// Variable references inside an `Fn::Sub` template, in order of appearance.
///
/// `${Name.Attr}` yields `Name.Attr`; literal escapes (`${!Name}`) are skipped.
pub fn sub_variables(template: &str) -> Vec<&str> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^!}][^}]*)\}").expect("valid Fn::Sub variable pattern")
    });

    pattern
        .captures_iter(template)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().trim()))
        .collect()
}

fn single_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let object = value.as_object()?;
    if object.len() != 1 {
        return None;
    }
    object.get(key)
}
