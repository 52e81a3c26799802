//! Template and document loading
//!
//! Templates and route-definition documents are YAML or JSON. Both are read
//! into `serde_json::Value` so the rest of the crate deals with a single value
//! shape. CloudFormation short-form tags (`!Ref`, `!GetAtt`, `!Sub`, ...) are
//! rewritten into their long form on the way in.

use super::resource::{Resource, Resources};
use crate::fs::FileSystem;
use serde_json::{Map, Number, Value};
use serde_yaml::value::TaggedValue;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unsupported mapping key in document: {0}")]
    UnsupportedKey(String),

    #[error("Template root must be a mapping")]
    NotAMapping,

    #[error("Template Resources section must be a mapping")]
    InvalidResources,

    #[error("Failed to read template {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

/// A loaded deployment template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    pub resources: Resources,
}

impl Template {
    pub fn new(resources: Resources) -> Self {
        Self { resources }
    }

    /// Parses YAML or JSON template text
    pub fn from_yaml_str(text: &str) -> Result<Self, TemplateError> {
        Self::from_value(&parse_document(text)?)
    }

    pub fn from_path<F: FileSystem>(fs: &F, path: &Path) -> Result<Self, TemplateError> {
        let text = fs.read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Builds a template from an already-parsed document. A missing
    /// `Resources` section yields an empty template.
    pub fn from_value(value: &Value) -> Result<Self, TemplateError> {
        let root = match value {
            Value::Object(root) => root,
            Value::Null => return Ok(Self::default()),
            _ => return Err(TemplateError::NotAMapping),
        };

        let resources = match root.get("Resources") {
            None | Some(Value::Null) => Resources::new(),
            Some(Value::Object(entries)) => entries
                .iter()
                .map(|(name, entry)| (name.clone(), Resource::from_value(entry)))
                .collect(),
            Some(_) => return Err(TemplateError::InvalidResources),
        };

        debug!(count = resources.len(), "Loaded template resources");
        Ok(Self { resources })
    }
}

/// Parses YAML or JSON text into a JSON value, expanding short-form intrinsic tags
pub fn parse_document(text: &str) -> Result<Value, TemplateError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
    yaml_to_json(yaml)
}

fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, TemplateError> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => number_to_json(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(mapping_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => expand_tag(*tagged)?,
    })
}

fn number_to_json(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

// Swagger response codes (`200:`) and similar scalars are legal mapping keys
fn mapping_key(key: serde_yaml::Value) -> Result<String, TemplateError> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        other => Err(TemplateError::UnsupportedKey(format!("{:?}", other))),
    }
}

fn expand_tag(tagged: TaggedValue) -> Result<Value, TemplateError> {
    let tag = tagged.tag.to_string();
    let name = tag.trim_start_matches('!').to_string();
    let inner = yaml_to_json(tagged.value)?;

    let (key, value) = match name.as_str() {
        "Ref" | "Condition" => (name.clone(), inner),
        "GetAtt" => {
            let value = match inner {
                Value::String(dotted) => match dotted.split_once('.') {
                    Some((resource, attribute)) => Value::Array(vec![
                        Value::String(resource.to_string()),
                        Value::String(attribute.to_string()),
                    ]),
                    None => Value::String(dotted),
                },
                other => other,
            };
            ("Fn::GetAtt".to_string(), value)
        }
        _ => (format!("Fn::{}", name), inner),
    };

    let mut object = Map::new();
    object.insert(key, value);
    Ok(Value::Object(object))
}
