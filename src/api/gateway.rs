//! Explicit-gateway dialect
//!
//! Routes are declared as standalone gateway resources: REST APIs as a tree
//! of path-part resources with methods hanging off them, HTTP APIs as route
//! resources pointing at integration resources. Both may also embed or
//! reference a route-definition document.

use super::collector::{ApiProperties, RouteCollector};
use super::definition::{DefinitionResolver, DefinitionSource};
use super::error::ExtractError;
use super::lambda_uri;
use super::properties;
use super::route::{EventType, Route, RouteSource};
use crate::fs::FileSystem;
use crate::template::intrinsics;
use crate::template::{Resource, ResourceType, Resources};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

const ROOT_RESOURCE_ATTRIBUTE: &str = "RootResourceId";
const PROXY_INTEGRATION_TYPE: &str = "AWS_PROXY";
const INTEGRATION_TARGET_PREFIX: &str = "integrations/";
const DEFAULT_ROUTE_KEY: &str = "$default";
const DEFAULT_ROUTE_METHOD: &str = "ANY";

pub struct GatewayStrategy;

impl GatewayStrategy {
    pub const TYPES: &'static [ResourceType] = &[
        ResourceType::RestApi,
        ResourceType::RestApiStage,
        ResourceType::RestApiResource,
        ResourceType::RestApiMethod,
        ResourceType::HttpApi,
        ResourceType::HttpApiStage,
        ResourceType::HttpApiRoute,
        ResourceType::HttpApiIntegration,
    ];

    /// Walks every gateway resource in template order
    pub fn extract<F: FileSystem>(
        &self,
        resources: &Resources,
        collector: &mut RouteCollector,
        definitions: &DefinitionResolver<'_, F>,
    ) -> Result<(), ExtractError> {
        for (name, resource) in resources.iter() {
            match resource.resource_type {
                ResourceType::RestApi => {
                    self.extract_rest_api(name, resource, collector, definitions)?
                }
                ResourceType::HttpApi => {
                    self.extract_http_api(name, resource, collector, definitions)?
                }
                ResourceType::RestApiStage => {
                    self.extract_stage(name, resource, "Variables", collector)
                }
                ResourceType::HttpApiStage => {
                    self.extract_stage(name, resource, "StageVariables", collector)
                }
                ResourceType::RestApiMethod => match method_route(name, resource, resources) {
                    Ok(route) => collector.add_route(route),
                    Err(Skipped::NonProxy) => {}
                    Err(Skipped::Malformed) => {
                        warn!(resource = name, "Skipping malformed gateway method")
                    }
                },
                ResourceType::HttpApiRoute => match route_route(name, resource, resources) {
                    Ok(route) => collector.add_route(route),
                    Err(Skipped::NonProxy) => {}
                    Err(Skipped::Malformed) => {
                        warn!(resource = name, "Skipping malformed gateway route")
                    }
                },
                // Path parts and integrations are read through the methods and routes using them
                _ => {}
            }
        }
        Ok(())
    }

    fn extract_rest_api<F: FileSystem>(
        &self,
        name: &str,
        resource: &Resource,
        collector: &mut RouteCollector,
        definitions: &DefinitionResolver<'_, F>,
    ) -> Result<(), ExtractError> {
        collector.add_binary_media_types(properties::string_list(
            resource.property("BinaryMediaTypes"),
        ));

        match DefinitionSource::from_properties(
            resource.property("Body"),
            resource.property("BodyS3Location"),
        ) {
            Some(source) => definitions.collect(name, &source, EventType::Api, collector),
            None => Ok(()),
        }
    }

    fn extract_http_api<F: FileSystem>(
        &self,
        name: &str,
        resource: &Resource,
        collector: &mut RouteCollector,
        definitions: &DefinitionResolver<'_, F>,
    ) -> Result<(), ExtractError> {
        if let Some(cors) = properties::http_cors(resource.property("CorsConfiguration")) {
            collector.set_properties(ApiProperties::new().with_cors(cors));
        }

        // Quick-create APIs route everything to a single target
        if let Some(target) = resource.property("Target") {
            match lambda_uri::function_name(target) {
                Some(function_name) => collector.add_route(
                    Route::new(
                        DEFAULT_ROUTE_KEY,
                        [DEFAULT_ROUTE_METHOD],
                        function_name,
                        RouteSource::GatewayResource,
                    )
                    .with_event_type(EventType::HttpApi),
                ),
                None => warn!(resource = name, "Cannot resolve quick-create target function"),
            }
        }

        match DefinitionSource::from_properties(
            resource.property("Body"),
            resource.property("BodyS3Location"),
        ) {
            Some(source) => definitions.collect(name, &source, EventType::HttpApi, collector),
            None => Ok(()),
        }
    }

    fn extract_stage(
        &self,
        name: &str,
        resource: &Resource,
        variables_key: &str,
        collector: &mut RouteCollector,
    ) {
        let mut props = ApiProperties::new();
        props.stage_name = resource.str_property("StageName").map(str::to_string);
        props.stage_variables = properties::string_map(resource.property(variables_key));

        if props.is_empty() {
            return;
        }
        debug!(resource = name, stage = ?props.stage_name, "Found stage properties");
        collector.set_properties(props);
    }
}

/// Why a method or route resource produced no route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skipped {
    /// Valid, but its integration does not proxy to a function
    NonProxy,
    Malformed,
}

/// Route for a REST method resource
fn method_route(
    name: &str,
    resource: &Resource,
    resources: &Resources,
) -> Result<Route, Skipped> {
    let http_method = resource
        .str_property("HttpMethod")
        .ok_or(Skipped::Malformed)?;
    let path = resource
        .property("ResourceId")
        .and_then(|id| resolve_path(resources, id))
        .ok_or(Skipped::Malformed)?;

    let integration = resource.property("Integration").ok_or(Skipped::Malformed)?;
    let integration_type = integration.get("Type").and_then(Value::as_str).unwrap_or("");
    if !integration_type.eq_ignore_ascii_case(PROXY_INTEGRATION_TYPE) {
        debug!(resource = name, integration_type, "Skipping non-proxy gateway method");
        return Err(Skipped::NonProxy);
    }
    let function_name = integration
        .get("Uri")
        .and_then(lambda_uri::function_name)
        .ok_or(Skipped::Malformed)?;

    debug!(resource = name, path = %path, method = http_method, "Found gateway method");
    Ok(
        Route::new(path, [http_method], function_name, RouteSource::GatewayResource)
            .with_event_type(EventType::Api)
            .with_authorizer(authorizer(resource))
            .with_authorization_scopes(properties::string_list(
                resource.property("AuthorizationScopes"),
            )),
    )
}

/// Full path of a REST path-part resource, following `ParentId` up to the root
fn resolve_path(resources: &Resources, resource_id: &Value) -> Option<String> {
    let mut parts = Vec::new();
    let mut visited = HashSet::new();
    let mut current = resource_id;

    loop {
        if let Some((_, attribute)) = intrinsics::get_att(current) {
            if attribute == ROOT_RESOURCE_ATTRIBUTE {
                break;
            }
            return None;
        }

        let name = intrinsics::ref_target(current)?;
        if !visited.insert(name) {
            warn!(resource = name, "Cycle in gateway resource parents");
            return None;
        }

        let resource = resources.get(name)?;
        if resource.resource_type != ResourceType::RestApiResource {
            return None;
        }
        parts.push(resource.str_property("PathPart")?);
        current = resource.property("ParentId")?;
    }

    parts.reverse();
    Some(format!("/{}", parts.join("/")))
}

/// Route for an HTTP API route resource
fn route_route(
    name: &str,
    resource: &Resource,
    resources: &Resources,
) -> Result<Route, Skipped> {
    let (method, path) = resource
        .str_property("RouteKey")
        .and_then(parse_route_key)
        .ok_or(Skipped::Malformed)?;

    let integration = resource
        .property("Target")
        .and_then(integration_name)
        .and_then(|logical_name| resources.get(&logical_name))
        .filter(|integration| integration.resource_type == ResourceType::HttpApiIntegration)
        .ok_or(Skipped::Malformed)?;

    if let Some(integration_type) = integration.str_property("IntegrationType") {
        if !integration_type.eq_ignore_ascii_case(PROXY_INTEGRATION_TYPE) {
            debug!(resource = name, integration_type, "Skipping non-proxy gateway route");
            return Err(Skipped::NonProxy);
        }
    }
    let function_name = integration
        .property("IntegrationUri")
        .and_then(lambda_uri::function_name)
        .ok_or(Skipped::Malformed)?;
    let payload_format_version = integration
        .property("PayloadFormatVersion")
        .and_then(properties::scalar);

    debug!(resource = name, path, method, "Found gateway route");
    Ok(
        Route::new(path, [method], function_name, RouteSource::GatewayResource)
            .with_event_type(EventType::HttpApi)
            .with_payload_format_version(payload_format_version)
            .with_authorizer(authorizer(resource))
            .with_authorization_scopes(properties::string_list(
                resource.property("AuthorizationScopes"),
            )),
    )
}

/// `"GET /items/{id}"` -> `("GET", "/items/{id}")`; `$default` -> `("ANY", "$default")`
fn parse_route_key(route_key: &str) -> Option<(&str, &str)> {
    let route_key = route_key.trim();
    if route_key == DEFAULT_ROUTE_KEY {
        return Some((DEFAULT_ROUTE_METHOD, DEFAULT_ROUTE_KEY));
    }

    let (method, path) = route_key.split_once(char::is_whitespace)?;
    let path = path.trim();
    if method.is_empty() || path.is_empty() {
        return None;
    }
    Some((method, path))
}

/// Logical name of the integration a route targets (`integrations/<name>`)
fn integration_name(target: &Value) -> Option<String> {
    if let Some(target) = target.as_str() {
        return target
            .strip_prefix(INTEGRATION_TARGET_PREFIX)
            .map(str::to_string);
    }

    if let Some((_, parts)) = intrinsics::join_parts(target) {
        return parts.iter().find_map(|part| intrinsics::ref_target(part).map(str::to_string));
    }

    intrinsics::sub_template(target).and_then(|template| {
        intrinsics::sub_variables(template)
            .into_iter()
            .next()
            .map(str::to_string)
    })
}

fn authorizer(resource: &Resource) -> Option<String> {
    resource
        .property("AuthorizerId")
        .and_then(intrinsics::ref_target)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::route::ANY_METHODS;
    use crate::fs::MockFileSystem;
    use crate::template::Template;
    use serde_json::json;
    use std::path::Path;

    fn run(template: Value, fs: &MockFileSystem) -> Result<RouteCollector, ExtractError> {
        let template = Template::from_value(&template).unwrap();
        let resolver = DefinitionResolver::new(fs, Some(Path::new("/mock")));
        let mut collector = RouteCollector::new();
        GatewayStrategy.extract(&template.resources, &mut collector, &resolver)?;
        Ok(collector)
    }

    fn rest_tree() -> Value {
        json!({"Resources": {
            "Api": {"Type": "AWS::ApiGateway::RestApi", "Properties": {"Name": "items"}},
            "Items": {"Type": "AWS::ApiGateway::Resource", "Properties": {
                "ParentId": {"Fn::GetAtt": ["Api", "RootResourceId"]},
                "PathPart": "items",
                "RestApiId": {"Ref": "Api"}
            }},
            "Item": {"Type": "AWS::ApiGateway::Resource", "Properties": {
                "ParentId": {"Ref": "Items"},
                "PathPart": "{id}",
                "RestApiId": {"Ref": "Api"}
            }},
            "DeleteItem": {"Type": "AWS::ApiGateway::Method", "Properties": {
                "HttpMethod": "DELETE",
                "ResourceId": {"Ref": "Item"},
                "RestApiId": {"Ref": "Api"},
                "AuthorizerId": {"Ref": "TokenAuthorizer"},
                "Integration": {
                    "Type": "AWS_PROXY",
                    "IntegrationHttpMethod": "POST",
                    "Uri": {"Fn::Sub": "arn:aws:apigateway:${AWS::Region}:lambda:path/2015-03-31/functions/${F.Arn}/invocations"}
                }
            }},
            "Stage": {"Type": "AWS::ApiGateway::Stage", "Properties": {
                "StageName": "v1",
                "Variables": {"Table": "items"},
                "RestApiId": {"Ref": "Api"}
            }}
        }})
    }

    #[test]
    fn test_rest_method_on_nested_resource() {
        let fs = MockFileSystem::new();
        let api = run(rest_tree(), &fs).unwrap().finalize();

        assert_eq!(api.routes.len(), 1);
        let route = &api.routes[0];
        assert_eq!(route.path, "/items/{id}");
        assert_eq!(route.methods, vec!["DELETE"]);
        assert_eq!(route.function_name, "F");
        assert_eq!(route.source, RouteSource::GatewayResource);
        assert_eq!(route.authorizer.as_deref(), Some("TokenAuthorizer"));

        assert_eq!(api.stage_name.as_deref(), Some("v1"));
        assert_eq!(api.stage_variables["Table"], "items");
    }

    #[test]
    fn test_method_on_root_resource() {
        let fs = MockFileSystem::new();
        let api = run(
            json!({"Resources": {
                "RootAny": {"Type": "AWS::ApiGateway::Method", "Properties": {
                    "HttpMethod": "ANY",
                    "ResourceId": {"Fn::GetAtt": ["Api", "RootResourceId"]},
                    "Integration": {"Type": "AWS_PROXY", "Uri": {"Fn::GetAtt": ["Root", "Arn"]}}
                }}
            }}),
            &fs,
        )
        .unwrap()
        .finalize();

        assert_eq!(api.routes[0].path, "/");
        assert_eq!(api.routes[0].methods, ANY_METHODS.to_vec());
    }

    #[test]
    fn test_malformed_methods_skipped() {
        let fs = MockFileSystem::new();
        let api = run(
            json!({"Resources": {
                "NoMethod": {"Type": "AWS::ApiGateway::Method", "Properties": {
                    "ResourceId": {"Fn::GetAtt": ["Api", "RootResourceId"]},
                    "Integration": {"Type": "AWS_PROXY", "Uri": {"Fn::GetAtt": ["F", "Arn"]}}
                }},
                "DanglingParent": {"Type": "AWS::ApiGateway::Method", "Properties": {
                    "HttpMethod": "GET",
                    "ResourceId": {"Ref": "Nowhere"},
                    "Integration": {"Type": "AWS_PROXY", "Uri": {"Fn::GetAtt": ["F", "Arn"]}}
                }},
                "Mock": {"Type": "AWS::ApiGateway::Method", "Properties": {
                    "HttpMethod": "GET",
                    "ResourceId": {"Fn::GetAtt": ["Api", "RootResourceId"]},
                    "Integration": {"Type": "MOCK"}
                }}
            }}),
            &fs,
        )
        .unwrap()
        .finalize();

        assert!(api.routes.is_empty());
    }

    #[test]
    fn test_non_proxy_method_is_not_malformed() {
        let template = Template::from_value(&json!({"Resources": {
            "Mock": {"Type": "AWS::ApiGateway::Method", "Properties": {
                "HttpMethod": "GET",
                "ResourceId": {"Fn::GetAtt": ["Api", "RootResourceId"]},
                "Integration": {"Type": "MOCK"}
            }},
            "Backend": {"Type": "AWS::ApiGateway::Method", "Properties": {
                "HttpMethod": "POST",
                "ResourceId": {"Fn::GetAtt": ["Api", "RootResourceId"]},
                "Integration": {"Type": "HTTP", "Uri": "https://example.com/backend"}
            }},
            "NoIntegration": {"Type": "AWS::ApiGateway::Method", "Properties": {
                "HttpMethod": "GET",
                "ResourceId": {"Fn::GetAtt": ["Api", "RootResourceId"]}
            }},
            "UnresolvedUri": {"Type": "AWS::ApiGateway::Method", "Properties": {
                "HttpMethod": "GET",
                "ResourceId": {"Fn::GetAtt": ["Api", "RootResourceId"]},
                "Integration": {"Type": "AWS_PROXY", "Uri": "https://example.com/backend"}
            }}
        }}))
        .unwrap();
        let resources = &template.resources;
        let outcome = |name: &str| method_route(name, resources.get(name).unwrap(), resources);

        assert_eq!(outcome("Mock").unwrap_err(), Skipped::NonProxy);
        assert_eq!(outcome("Backend").unwrap_err(), Skipped::NonProxy);
        assert_eq!(outcome("NoIntegration").unwrap_err(), Skipped::Malformed);
        assert_eq!(outcome("UnresolvedUri").unwrap_err(), Skipped::Malformed);
    }

    #[test]
    fn test_non_proxy_route_is_not_malformed() {
        let template = Template::from_value(&json!({"Resources": {
            "HttpBackend": {"Type": "AWS::ApiGatewayV2::Integration", "Properties": {
                "IntegrationType": "HTTP_PROXY",
                "IntegrationUri": "https://example.com/orders"
            }},
            "Proxied": {"Type": "AWS::ApiGatewayV2::Route", "Properties": {
                "RouteKey": "GET /orders",
                "Target": "integrations/HttpBackend"
            }},
            "NotAnIntegration": {"Type": "AWS::ApiGatewayV2::Route", "Properties": {
                "RouteKey": "GET /other",
                "Target": "integrations/Proxied"
            }},
            "BadKey": {"Type": "AWS::ApiGatewayV2::Route", "Properties": {
                "RouteKey": "GET",
                "Target": "integrations/HttpBackend"
            }}
        }}))
        .unwrap();
        let resources = &template.resources;
        let outcome = |name: &str| route_route(name, resources.get(name).unwrap(), resources);

        assert_eq!(outcome("Proxied").unwrap_err(), Skipped::NonProxy);
        assert_eq!(outcome("NotAnIntegration").unwrap_err(), Skipped::Malformed);
        assert_eq!(outcome("BadKey").unwrap_err(), Skipped::Malformed);
    }

    #[test]
    fn test_parent_cycle_is_malformed() {
        let fs = MockFileSystem::new();
        let api = run(
            json!({"Resources": {
                "A": {"Type": "AWS::ApiGateway::Resource", "Properties": {"ParentId": {"Ref": "B"}, "PathPart": "a"}},
                "B": {"Type": "AWS::ApiGateway::Resource", "Properties": {"ParentId": {"Ref": "A"}, "PathPart": "b"}},
                "M": {"Type": "AWS::ApiGateway::Method", "Properties": {
                    "HttpMethod": "GET",
                    "ResourceId": {"Ref": "A"},
                    "Integration": {"Type": "AWS_PROXY", "Uri": {"Fn::GetAtt": ["F", "Arn"]}}
                }}
            }}),
            &fs,
        )
        .unwrap()
        .finalize();

        assert!(api.routes.is_empty());
    }

    #[test]
    fn test_http_api_route_and_integration() {
        let fs = MockFileSystem::new();
        let api = run(
            json!({"Resources": {
                "HttpApi": {"Type": "AWS::ApiGatewayV2::Api", "Properties": {
                    "ProtocolType": "HTTP",
                    "CorsConfiguration": {"AllowOrigins": ["*"]}
                }},
                "Integration": {"Type": "AWS::ApiGatewayV2::Integration", "Properties": {
                    "IntegrationType": "AWS_PROXY",
                    "IntegrationUri": {"Fn::GetAtt": ["Orders", "Arn"]},
                    "PayloadFormatVersion": "2.0"
                }},
                "CreateOrder": {"Type": "AWS::ApiGatewayV2::Route", "Properties": {
                    "RouteKey": "POST /orders",
                    "Target": {"Fn::Join": ["/", ["integrations", {"Ref": "Integration"}]]},
                    "AuthorizerId": {"Ref": "JwtAuthorizer"},
                    "AuthorizationScopes": ["orders.write"]
                }},
                "GetOrder": {"Type": "AWS::ApiGatewayV2::Route", "Properties": {
                    "RouteKey": "GET /orders/{id}",
                    "Target": {"Fn::Sub": "integrations/${Integration}"}
                }},
                "Fallback": {"Type": "AWS::ApiGatewayV2::Route", "Properties": {
                    "RouteKey": "$default",
                    "Target": "integrations/Integration"
                }},
                "Stage": {"Type": "AWS::ApiGatewayV2::Stage", "Properties": {
                    "StageName": "$default",
                    "StageVariables": {"Env": "prod"}
                }}
            }}),
            &fs,
        )
        .unwrap()
        .finalize();

        assert_eq!(api.routes.len(), 3);

        let create = api.find_route("/orders", "POST").unwrap();
        assert_eq!(create.function_name, "Orders");
        assert_eq!(create.event_type, EventType::HttpApi);
        assert_eq!(create.payload_format_version.as_deref(), Some("2.0"));
        assert_eq!(create.authorizer.as_deref(), Some("JwtAuthorizer"));
        assert!(create.authorization_scopes.contains("orders.write"));

        assert!(api.find_route("/orders/{id}", "GET").is_some());
        assert_eq!(
            api.find_route("$default", "OPTIONS").unwrap().methods,
            ANY_METHODS.to_vec()
        );

        assert_eq!(api.stage_name.as_deref(), Some("$default"));
        assert_eq!(api.stage_variables["Env"], "prod");
        assert_eq!(api.cors.unwrap().allow_origin, "*");
    }

    #[test]
    fn test_route_with_missing_integration_skipped() {
        let fs = MockFileSystem::new();
        let api = run(
            json!({"Resources": {
                "Orphan": {"Type": "AWS::ApiGatewayV2::Route", "Properties": {
                    "RouteKey": "GET /orphan",
                    "Target": "integrations/Missing"
                }},
                "NoKey": {"Type": "AWS::ApiGatewayV2::Route", "Properties": {
                    "Target": "integrations/Missing"
                }}
            }}),
            &fs,
        )
        .unwrap()
        .finalize();

        assert!(api.routes.is_empty());
    }

    #[test]
    fn test_quick_create_http_api() {
        let fs = MockFileSystem::new();
        let api = run(
            json!({"Resources": {"QuickApi": {"Type": "AWS::ApiGatewayV2::Api", "Properties": {
                "ProtocolType": "HTTP",
                "Target": {"Fn::GetAtt": ["Handler", "Arn"]}
            }}}}),
            &fs,
        )
        .unwrap()
        .finalize();

        assert_eq!(api.routes.len(), 1);
        assert_eq!(api.routes[0].path, "$default");
        assert_eq!(api.routes[0].function_name, "Handler");
    }

    #[test]
    fn test_rest_api_body_and_binary_types() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "swagger.json",
            r#"{"swagger": "2.0",
                "x-amazon-apigateway-binary-media-types": ["application~1pdf"],
                "paths": {"/report": {"get": {"x-amazon-apigateway-integration": {
                    "type": "aws_proxy",
                    "uri": "arn:aws:apigateway:us-east-1:lambda:path/2015-03-31/functions/arn:aws:lambda:us-east-1:123456789012:function:Reports/invocations"
                }}}}}"#,
        );

        let api = run(
            json!({"Resources": {"Api": {"Type": "AWS::ApiGateway::RestApi", "Properties": {
                "BinaryMediaTypes": ["image~1png"],
                "BodyS3Location": "swagger.json"
            }}}}),
            &fs,
        )
        .unwrap()
        .finalize();

        assert_eq!(api.routes[0].function_name, "Reports");
        assert_eq!(api.routes[0].event_type, EventType::Api);
        assert_eq!(api.binary_media_types, vec!["image/png", "application/pdf"]);
    }

    #[test]
    fn test_declarative_resources_not_visited() {
        let fs = MockFileSystem::new();
        let api = run(
            json!({"Resources": {"Fn": {"Type": "AWS::Serverless::Function", "Properties": {
                "Events": {"E": {"Type": "Api", "Properties": {"Path": "/x", "Method": "POST"}}}
            }}}}),
            &fs,
        )
        .unwrap()
        .finalize();

        assert!(api.routes.is_empty());
    }

    #[test]
    fn test_parse_route_key() {
        assert_eq!(parse_route_key("GET /a"), Some(("GET", "/a")));
        assert_eq!(parse_route_key("ANY  /{proxy+}"), Some(("ANY", "/{proxy+}")));
        assert_eq!(parse_route_key("$default"), Some(("ANY", "$default")));
        assert_eq!(parse_route_key("GET"), None);
    }

    #[test]
    fn test_integration_name_forms() {
        assert_eq!(integration_name(&json!("integrations/abc")).as_deref(), Some("abc"));
        assert_eq!(integration_name(&json!("arn:something")), None);
        assert_eq!(
            integration_name(&json!({"Fn::Join": ["/", ["integrations", {"Ref": "I"}]]})).as_deref(),
            Some("I")
        );
        assert_eq!(
            integration_name(&json!({"Fn::Sub": "integrations/${I}"})).as_deref(),
            Some("I")
        );
    }
}
