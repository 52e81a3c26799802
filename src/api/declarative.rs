//! Declarative (serverless shorthand) dialect
//!
//! Routes come from HTTP events attached to function resources. Standalone
//! API resources contribute stage, CORS and binary media properties, and
//! their embedded or referenced route definitions.

use super::collector::{ApiProperties, RouteCollector};
use super::definition::{DefinitionResolver, DefinitionSource};
use super::error::ExtractError;
use super::properties;
use super::route::{EventType, Route, RouteSource};
use crate::fs::FileSystem;
use crate::template::{Resource, ResourceType, Resources};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Path and method of an HTTP event that declares neither
const DEFAULT_ROUTE_PATH: &str = "$default";
const DEFAULT_ROUTE_METHOD: &str = "ANY";

pub struct DeclarativeStrategy;

impl DeclarativeStrategy {
    pub const TYPES: &'static [ResourceType] = &[
        ResourceType::ServerlessFunction,
        ResourceType::ServerlessApi,
        ResourceType::ServerlessHttpApi,
    ];

    /// Walks every declarative resource in template order
    pub fn extract<F: FileSystem>(
        &self,
        resources: &Resources,
        collector: &mut RouteCollector,
        definitions: &DefinitionResolver<'_, F>,
    ) -> Result<(), ExtractError> {
        for (name, resource) in resources.iter() {
            match resource.resource_type {
                ResourceType::ServerlessFunction => {
                    self.extract_function_events(name, resource, collector)
                }
                ResourceType::ServerlessApi => {
                    self.extract_rest_api(name, resource, collector, definitions)?
                }
                ResourceType::ServerlessHttpApi => {
                    self.extract_http_api(name, resource, collector, definitions)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn extract_function_events(
        &self,
        function_name: &str,
        resource: &Resource,
        collector: &mut RouteCollector,
    ) {
        let Some(events) = resource.object_property("Events") else {
            return;
        };

        for (event_name, event) in events {
            let event_type = match event.get("Type").and_then(Value::as_str) {
                Some("Api") => EventType::Api,
                Some("HttpApi") => EventType::HttpApi,
                _ => continue,
            };

            let empty = Map::new();
            let props = event
                .get("Properties")
                .and_then(Value::as_object)
                .unwrap_or(&empty);

            match event_route(function_name, event_type, props) {
                Some(route) => {
                    debug!(
                        function = function_name,
                        event = %event_name,
                        path = %route.path,
                        "Found function event route"
                    );
                    collector.add_route(route);
                }
                None => warn!(
                    function = function_name,
                    event = %event_name,
                    "HTTP event is missing Path or Method; skipping"
                ),
            }
        }
    }

    fn extract_rest_api<F: FileSystem>(
        &self,
        name: &str,
        resource: &Resource,
        collector: &mut RouteCollector,
        definitions: &DefinitionResolver<'_, F>,
    ) -> Result<(), ExtractError> {
        let mut props = ApiProperties::new();
        props.stage_name = resource.str_property("StageName").map(str::to_string);
        props.stage_variables = properties::string_map(resource.property("Variables"));
        props.cors = properties::rest_cors(resource.property("Cors"));
        report_properties(name, props, collector);

        collector.add_binary_media_types(properties::string_list(
            resource.property("BinaryMediaTypes"),
        ));

        self.extract_definition(name, resource, EventType::Api, collector, definitions)
    }

    fn extract_http_api<F: FileSystem>(
        &self,
        name: &str,
        resource: &Resource,
        collector: &mut RouteCollector,
        definitions: &DefinitionResolver<'_, F>,
    ) -> Result<(), ExtractError> {
        let mut props = ApiProperties::new();
        props.stage_name = resource.str_property("StageName").map(str::to_string);
        props.stage_variables = properties::string_map(resource.property("StageVariables"));
        props.cors = properties::http_cors(resource.property("CorsConfiguration"));
        report_properties(name, props, collector);

        self.extract_definition(name, resource, EventType::HttpApi, collector, definitions)
    }

    fn extract_definition<F: FileSystem>(
        &self,
        name: &str,
        resource: &Resource,
        event_type: EventType,
        collector: &mut RouteCollector,
        definitions: &DefinitionResolver<'_, F>,
    ) -> Result<(), ExtractError> {
        match DefinitionSource::from_properties(
            resource.property("DefinitionBody"),
            resource.property("DefinitionUri"),
        ) {
            Some(source) => definitions.collect(name, &source, event_type, collector),
            None => Ok(()),
        }
    }
}

fn event_route(
    function_name: &str,
    event_type: EventType,
    props: &Map<String, Value>,
) -> Option<Route> {
    let path = props.get("Path").and_then(Value::as_str);
    let method = props.get("Method").and_then(Value::as_str);

    let (path, method) = match (path, method, event_type) {
        (Some(path), Some(method), _) => (path, method),
        (None, None, EventType::HttpApi) => (DEFAULT_ROUTE_PATH, DEFAULT_ROUTE_METHOD),
        _ => return None,
    };

    let auth = props.get("Auth");
    let authorizer = auth
        .and_then(|a| a.get("Authorizer"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let scopes = properties::string_list(auth.and_then(|a| a.get("AuthorizationScopes")));

    let payload_format_version = match event_type {
        EventType::HttpApi => props
            .get("PayloadFormatVersion")
            .and_then(properties::scalar),
        EventType::Api => None,
    };

    Some(
        Route::new(path, [method], function_name, RouteSource::FunctionEvent)
            .with_event_type(event_type)
            .with_payload_format_version(payload_format_version)
            .with_authorizer(authorizer)
            .with_authorization_scopes(scopes),
    )
}

fn report_properties(name: &str, props: ApiProperties, collector: &mut RouteCollector) {
    if props.is_empty() {
        return;
    }
    debug!(resource = name, stage = ?props.stage_name, "Found API properties");
    collector.set_properties(props);
}
