//! Route-definition documents
//!
//! API resources in either dialect may carry a Swagger 2 / OpenAPI 3 document,
//! inline or as a reference to a local file. Operations bound to a function
//! through an `aws_proxy` integration become routes; the document may also
//! declare binary media types.

use super::collector::RouteCollector;
use super::error::ExtractError;
use super::lambda_uri;
use super::properties;
use super::route::{EventType, Route, RouteSource, DOCUMENT_ANY_METHOD};
use crate::fs::FileSystem;
use crate::template::parse_document;
use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, warn};

const INTEGRATION_KEY: &str = "x-amazon-apigateway-integration";
const BINARY_MEDIA_TYPES_KEY: &str = "x-amazon-apigateway-binary-media-types";
const PROXY_INTEGRATION_TYPE: &str = "aws_proxy";
const INCLUDE_TRANSFORM: &str = "AWS::Include";
const REMOTE_SCHEME: &str = "s3://";

const OPERATION_KEYS: [&str; 9] = [
    "get",
    "put",
    "post",
    "delete",
    "options",
    "head",
    "patch",
    "trace",
    DOCUMENT_ANY_METHOD,
];

/// Where a resource's route definition lives
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionSource<'a> {
    Inline(&'a Value),
    File(&'a str),
    Remote,
}

impl<'a> DefinitionSource<'a> {
    /// Picks the definition source from a resource's inline body and URI
    /// properties. The body wins when both are present.
    pub fn from_properties(body: Option<&'a Value>, uri: Option<&'a Value>) -> Option<Self> {
        if let Some(body) = body.filter(|b| !b.is_null()) {
            if let Some(location) = include_location(body) {
                return Some(Self::from_location(location));
            }
            return Some(Self::Inline(body));
        }

        match uri? {
            Value::String(location) => Some(Self::from_location(location)),
            Value::Object(_) => Some(Self::Remote),
            _ => None,
        }
    }

    fn from_location(location: &'a str) -> Self {
        if location.starts_with(REMOTE_SCHEME) {
            Self::Remote
        } else {
            Self::File(location)
        }
    }
}

// `Fn::Transform: { Name: AWS::Include, Parameters: { Location: ... } }`
fn include_location(body: &Value) -> Option<&str> {
    let transform = body.get("Fn::Transform")?;
    if transform.get("Name")?.as_str()? != INCLUDE_TRANSFORM {
        return None;
    }
    transform.get("Parameters")?.get("Location")?.as_str()
}

/// Loads definition documents, reading files relative to a working directory
pub struct DefinitionResolver<'a, F: FileSystem> {
    fs: &'a F,
    working_dir: Option<&'a Path>,
}

impl<'a, F: FileSystem> DefinitionResolver<'a, F> {
    pub fn new(fs: &'a F, working_dir: Option<&'a Path>) -> Self {
        Self { fs, working_dir }
    }

    /// Returns the document, or `None` when it cannot be resolved locally.
    ///
    /// A local file that cannot be read or parsed is an error: the template
    /// author referenced it explicitly, so silently serving no routes would
    /// hide the problem.
    pub fn resolve<'v>(
        &self,
        resource_name: &str,
        source: &DefinitionSource<'v>,
    ) -> Result<Option<Cow<'v, Value>>, ExtractError> {
        match source {
            DefinitionSource::Inline(document) => Ok(Some(Cow::Borrowed(*document))),
            DefinitionSource::Remote => {
                warn!(
                    resource = resource_name,
                    "Route definition is stored remotely and cannot be read locally; skipping"
                );
                Ok(None)
            }
            DefinitionSource::File(location) => {
                let path = self.fs.resolve(self.working_dir, location);
                debug!(resource = resource_name, path = ?path, "Reading route definition");

                let text = self.fs.read_to_string(&path).map_err(|source| {
                    ExtractError::DefinitionRead {
                        resource: resource_name.to_string(),
                        path: path.clone(),
                        source,
                    }
                })?;

                let document =
                    parse_document(&text).map_err(|source| ExtractError::DefinitionParse {
                        resource: resource_name.to_string(),
                        path,
                        source,
                    })?;

                Ok(Some(Cow::Owned(document)))
            }
        }
    }

    /// Resolves a definition and reports its routes and binary media types
    pub fn collect(
        &self,
        resource_name: &str,
        source: &DefinitionSource<'_>,
        event_type: EventType,
        collector: &mut RouteCollector,
    ) -> Result<(), ExtractError> {
        let Some(document) = self.resolve(resource_name, source)? else {
            return Ok(());
        };

        let definition = RouteDefinition::new(&document, event_type);
        let routes = definition.routes();
        debug!(
            resource = resource_name,
            count = routes.len(),
            "Routes found in route definition"
        );

        collector.add_routes(routes);
        collector.add_binary_media_types(definition.binary_media_types());
        Ok(())
    }
}

/// Read-only view over a parsed definition document
pub struct RouteDefinition<'a> {
    document: &'a Value,
    event_type: EventType,
}

impl<'a> RouteDefinition<'a> {
    pub fn new(document: &'a Value, event_type: EventType) -> Self {
        Self {
            document,
            event_type,
        }
    }

    /// Routes for every operation backed by a proxy integration, in document order
    pub fn routes(&self) -> Vec<Route> {
        let Some(paths) = self.document.get("paths").and_then(Value::as_object) else {
            return Vec::new();
        };

        let mut routes = Vec::new();
        for (path, item) in paths {
            let Some(item) = item.as_object() else {
                continue;
            };

            for (method, operation) in item {
                if !OPERATION_KEYS.contains(&method.to_ascii_lowercase().as_str()) {
                    continue;
                }
                if let Some(route) = self.operation_route(path, method, operation) {
                    routes.push(route);
                }
            }
        }
        routes
    }

    pub fn binary_media_types(&self) -> Vec<String> {
        self.document
            .get(BINARY_MEDIA_TYPES_KEY)
            .and_then(Value::as_array)
            .map(|types| {
                types
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn operation_route(&self, path: &str, method: &str, operation: &Value) -> Option<Route> {
        let Some(integration) = operation.get(INTEGRATION_KEY) else {
            debug!(path, method, "Operation has no gateway integration; skipping");
            return None;
        };

        let integration_type = integration.get("type").and_then(Value::as_str).unwrap_or("");
        if !integration_type.eq_ignore_ascii_case(PROXY_INTEGRATION_TYPE) {
            debug!(path, method, integration_type, "Non-proxy integration; skipping");
            return None;
        }

        let Some(function_name) = integration.get("uri").and_then(lambda_uri::function_name)
        else {
            warn!(path, method, "Cannot resolve integration target function; skipping operation");
            return None;
        };

        let (authorizer, scopes) = self.security(operation);
        let payload_format_version = integration
            .get("payloadFormatVersion")
            .and_then(properties::scalar);
        let operation_name = operation
            .get("operationId")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(
            Route::new(path, [method], function_name, RouteSource::GatewayResource)
                .with_event_type(self.event_type)
                .with_payload_format_version(payload_format_version)
                .with_authorizer(authorizer)
                .with_authorization_scopes(scopes)
                .with_operation_name(operation_name),
        )
    }

    // First security requirement of the operation, else of the document
    fn security(&self, operation: &Value) -> (Option<String>, Vec<String>) {
        let requirement = operation
            .get("security")
            .or_else(|| self.document.get("security"))
            .and_then(Value::as_array)
            .and_then(|requirements| requirements.first())
            .and_then(Value::as_object)
            .and_then(|requirement| requirement.iter().next());

        match requirement {
            Some((name, scopes)) => (
                Some(name.clone()),
                scopes
                    .as_array()
                    .map(|s| s.iter().filter_map(Value::as_str).map(str::to_string).collect())
                    .unwrap_or_default(),
            ),
            None => (None, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::route::ANY_METHODS;
    use crate::fs::MockFileSystem;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "openapi": "3.0.1",
            "x-amazon-apigateway-binary-media-types": ["image~1png"],
            "paths": {
                "/items/{id}": {
                    "parameters": [],
                    "get": {
                        "operationId": "getItem",
                        "security": [{"JwtAuth": ["items/read"]}],
                        "x-amazon-apigateway-integration": {
                            "type": "aws_proxy",
                            "httpMethod": "POST",
                            "payloadFormatVersion": "2.0",
                            "uri": {"Fn::Sub": "arn:aws:apigateway:${AWS::Region}:lambda:path/2015-03-31/functions/${ItemsFunction.Arn}/invocations"}
                        }
                    },
                    "delete": {
                        "x-amazon-apigateway-integration": {
                            "type": "http",
                            "uri": "https://backend.example.com"
                        }
                    }
                },
                "/proxy": {
                    "x-amazon-apigateway-any-method": {
                        "x-amazon-apigateway-integration": {
                            "type": "AWS_PROXY",
                            "uri": {"Fn::GetAtt": ["ProxyFunction", "Arn"]}
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_routes_from_document() {
        let doc = document();
        let definition = RouteDefinition::new(&doc, EventType::HttpApi);
        let routes = definition.routes();

        assert_eq!(routes.len(), 2);

        let get = &routes[0];
        assert_eq!(get.path, "/items/{id}");
        assert_eq!(get.methods, vec!["GET"]);
        assert_eq!(get.function_name, "ItemsFunction");
        assert_eq!(get.source, RouteSource::GatewayResource);
        assert_eq!(get.event_type, EventType::HttpApi);
        assert_eq!(get.payload_format_version.as_deref(), Some("2.0"));
        assert_eq!(get.authorizer.as_deref(), Some("JwtAuth"));
        assert!(get.authorization_scopes.contains("items/read"));
        assert_eq!(get.operation_name.as_deref(), Some("getItem"));

        let proxy = &routes[1];
        assert_eq!(proxy.path, "/proxy");
        assert_eq!(proxy.methods, ANY_METHODS.to_vec());
        assert_eq!(proxy.function_name, "ProxyFunction");
    }

    #[test]
    fn test_binary_media_types_from_document() {
        let doc = document();
        let definition = RouteDefinition::new(&doc, EventType::Api);
        assert_eq!(definition.binary_media_types(), vec!["image~1png"]);
    }

    #[test]
    fn test_document_without_paths() {
        let doc = json!({"swagger": "2.0"});
        assert!(RouteDefinition::new(&doc, EventType::Api).routes().is_empty());
    }

    #[test]
    fn test_unresolvable_integration_skipped() {
        let doc = json!({
            "paths": {"/x": {"get": {"x-amazon-apigateway-integration": {
                "type": "aws_proxy",
                "uri": "https://example.com"
            }}}}
        });
        assert!(RouteDefinition::new(&doc, EventType::Api).routes().is_empty());
    }

    #[test]
    fn test_document_level_security_applies() {
        let doc = json!({
            "security": [{"ApiKeyAuth": []}],
            "paths": {"/x": {"post": {"x-amazon-apigateway-integration": {
                "type": "aws_proxy",
                "uri": {"Fn::GetAtt": ["Fn", "Arn"]}
            }}}}
        });
        let routes = RouteDefinition::new(&doc, EventType::Api).routes();
        assert_eq!(routes[0].authorizer.as_deref(), Some("ApiKeyAuth"));
        assert!(routes[0].authorization_scopes.is_empty());
    }

    #[test]
    fn test_source_body_wins_over_uri() {
        let body = json!({"paths": {}});
        let uri = json!("swagger.yaml");
        assert_eq!(
            DefinitionSource::from_properties(Some(&body), Some(&uri)),
            Some(DefinitionSource::Inline(&body))
        );
    }

    #[test]
    fn test_source_variants() {
        let uri = json!("api/swagger.yaml");
        assert_eq!(
            DefinitionSource::from_properties(None, Some(&uri)),
            Some(DefinitionSource::File("api/swagger.yaml"))
        );

        let remote = json!({"Bucket": "b", "Key": "k"});
        assert_eq!(
            DefinitionSource::from_properties(None, Some(&remote)),
            Some(DefinitionSource::Remote)
        );

        let s3 = json!("s3://bucket/swagger.yaml");
        assert_eq!(
            DefinitionSource::from_properties(None, Some(&s3)),
            Some(DefinitionSource::Remote)
        );

        assert_eq!(DefinitionSource::from_properties(None, None), None);
    }

    #[test]
    fn test_source_include_transform() {
        let body = json!({"Fn::Transform": {
            "Name": "AWS::Include",
            "Parameters": {"Location": "openapi.yaml"}
        }});
        assert_eq!(
            DefinitionSource::from_properties(Some(&body), None),
            Some(DefinitionSource::File("openapi.yaml"))
        );
    }

    #[test]
    fn test_resolve_file_relative_to_working_dir() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "project/swagger.yaml",
            r#"
paths:
  /hello:
    get:
      x-amazon-apigateway-integration:
        type: aws_proxy
        uri: !Sub arn:aws:apigateway:${AWS::Region}:lambda:path/2015-03-31/functions/${HelloFunction.Arn}/invocations
"#,
        );

        let working_dir = Path::new("/mock/project");
        let resolver = DefinitionResolver::new(&fs, Some(working_dir));
        let mut collector = RouteCollector::new();
        resolver
            .collect(
                "MyApi",
                &DefinitionSource::File("swagger.yaml"),
                EventType::Api,
                &mut collector,
            )
            .unwrap();

        let api = collector.finalize();
        assert_eq!(api.routes.len(), 1);
        assert_eq!(api.routes[0].function_name, "HelloFunction");
    }

    #[test]
    fn test_resolve_missing_file_is_error() {
        let fs = MockFileSystem::new();
        let resolver = DefinitionResolver::new(&fs, Some(Path::new("/mock")));

        let err = resolver
            .resolve("MyApi", &DefinitionSource::File("missing.yaml"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::DefinitionRead { .. }));
        assert_eq!(err.resource(), "MyApi");
    }

    #[test]
    fn test_resolve_unparseable_file_is_error() {
        let fs = MockFileSystem::new();
        fs.add_file("bad.yaml", "paths: [unclosed");
        let resolver = DefinitionResolver::new(&fs, Some(Path::new("/mock")));

        let err = resolver
            .resolve("MyApi", &DefinitionSource::File("bad.yaml"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::DefinitionParse { .. }));
    }

    #[test]
    fn test_resolve_remote_is_skipped() {
        let fs = MockFileSystem::new();
        let resolver = DefinitionResolver::new(&fs, None);
        assert!(resolver
            .resolve("MyApi", &DefinitionSource::Remote)
            .unwrap()
            .is_none());
    }
}
