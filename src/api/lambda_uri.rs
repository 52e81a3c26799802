//! Integration URI -> target function
//!
//! Gateway integrations point at a function through an ARN-shaped URI. After
//! normalization that URI may still be an intrinsic (`Fn::GetAtt`, `Fn::Sub`,
//! `Fn::Join`, `Ref`) or a literal ARN. Intrinsic forms yield the function's
//! logical name; literal ARNs yield the function name embedded in the ARN.

use crate::template::intrinsics;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

const PSEUDO_PARAMETER_PREFIX: &str = "AWS::";
const FUNCTION_ATTRIBUTES: &[&str] = &["Arn", "Alias"];

/// Resolves the target function of an integration URI
pub fn function_name(uri: &Value) -> Option<String> {
    if let Some(name) = intrinsics::referenced_name(uri) {
        return (!is_pseudo_parameter(name)).then(|| name.to_string());
    }

    if let Some(template) = intrinsics::sub_template(uri) {
        return from_sub(template, intrinsics::sub_bindings(uri));
    }

    if let Some((_, parts)) = intrinsics::join_parts(uri) {
        return parts.iter().find_map(|part| match part {
            Value::String(s) => from_arn(s),
            other => function_name(other),
        });
    }

    uri.as_str().and_then(from_arn)
}

/// Picks the function variable of an `Fn::Sub` template.
///
/// Order: a `${Name.Arn}` / `${Name.Alias}` attribute, then any variable whose
/// binding resolves to a function, then the variable sitting in the function
/// slot of the ARN, then a literal ARN.
fn from_sub(template: &str, bindings: Option<&Map<String, Value>>) -> Option<String> {
    let variables: Vec<&str> = intrinsics::sub_variables(template)
        .into_iter()
        .filter(|var| !is_pseudo_parameter(var))
        .collect();

    if let Some(var) = variables.iter().find(|var| is_function_attribute(var)) {
        return resolve_variable(var, bindings);
    }

    if let Some(bindings) = bindings {
        let bound = variables
            .iter()
            .filter_map(|var| bindings.get(*var))
            .find_map(function_name);
        if bound.is_some() {
            return bound;
        }
    }

    match function_slot_variable(template) {
        Some(var) if !is_pseudo_parameter(var) => resolve_variable(var, bindings),
        _ => from_arn(template),
    }
}

fn resolve_variable(var: &str, bindings: Option<&Map<String, Value>>) -> Option<String> {
    match bindings.and_then(|bindings| bindings.get(var)) {
        Some(bound) => function_name(bound),
        None => Some(var.split('.').next().unwrap_or(var).to_string()),
    }
}

fn is_function_attribute(var: &str) -> bool {
    var.rsplit_once('.')
        .is_some_and(|(_, attribute)| FUNCTION_ATTRIBUTES.contains(&attribute))
}

// `...:function:${X}` or `.../functions/${X}/invocations`
fn function_slot_variable(template: &str) -> Option<&str> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"(?::function:|/functions/)\$\{([^!}][^}]*)\}")
            .expect("valid function slot pattern")
    });

    pattern
        .captures(template)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
}

fn is_pseudo_parameter(name: &str) -> bool {
    name.starts_with(PSEUDO_PARAMETER_PREFIX)
}

// `...:function:NAME[:qualifier][/invocations]`
fn from_arn(uri: &str) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r":function:([A-Za-z0-9_-]+)").expect("valid function ARN pattern")
    });

    pattern
        .captures(uri)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
