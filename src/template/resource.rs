//! Resource model for normalized deployment templates
//!
//! A template's `Resources` section is a mapping of logical resource names to
//! typed declarations. The mapping keeps insertion order because dialect
//! selection and route discovery order both follow the template's own order.

use crate::define_type_enum;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

define_type_enum! {
    /// The `Type` discriminator of a template resource
    ResourceType {
        ServerlessFunction => "AWS::Serverless::Function",
        ServerlessApi => "AWS::Serverless::Api",
        ServerlessHttpApi => "AWS::Serverless::HttpApi",
        RestApi => "AWS::ApiGateway::RestApi",
        RestApiStage => "AWS::ApiGateway::Stage",
        RestApiResource => "AWS::ApiGateway::Resource",
        RestApiMethod => "AWS::ApiGateway::Method",
        HttpApi => "AWS::ApiGatewayV2::Api",
        HttpApiStage => "AWS::ApiGatewayV2::Stage",
        HttpApiRoute => "AWS::ApiGatewayV2::Route",
        HttpApiIntegration => "AWS::ApiGatewayV2::Integration",
    }
}

/// A single template resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "Type")]
    pub resource_type: ResourceType,

    #[serde(rename = "Properties")]
    pub properties: Map<String, Value>,
}

impl Resource {
    pub fn new(resource_type: ResourceType, properties: Map<String, Value>) -> Self {
        Self {
            resource_type,
            properties,
        }
    }

    /// Builds a resource from a raw template entry.
    ///
    /// A missing `Type` becomes an empty custom type and a missing or
    /// non-mapping `Properties` becomes an empty mapping; neither is an error
    /// at this layer.
    pub fn from_value(value: &Value) -> Self {
        let resource_type = value
            .get("Type")
            .and_then(Value::as_str)
            .map(ResourceType::parse)
            .unwrap_or_else(|| ResourceType::Custom(String::new()));

        let properties = value
            .get("Properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        Self {
            resource_type,
            properties,
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn str_property(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(Value::as_str)
    }

    pub fn object_property(&self, key: &str) -> Option<&Map<String, Value>> {
        self.property(key).and_then(Value::as_object)
    }
}

/// Insertion-ordered mapping of logical resource name to [`Resource`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resources {
    entries: Vec<(String, Resource)>,
    index: HashMap<String, usize>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a resource. Re-inserting an existing name replaces the
    /// resource but keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, resource: Resource) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => self.entries[position].1 = resource,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, resource));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Resource> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.entries
            .iter()
            .map(|(name, resource)| (name.as_str(), resource))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Resource)> for Resources {
    fn from_iter<I: IntoIterator<Item = (N, Resource)>>(iter: I) -> Self {
        let mut resources = Resources::new();
        for (name, resource) in iter {
            resources.insert(name, resource);
        }
        resources
    }
}
