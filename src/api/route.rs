//! Route model
//!
//! Passive value types produced by an extraction pass: [`Route`] for a single
//! path bound to a function, and [`Api`] for the finalized set of routes plus
//! the API-level properties (stage, CORS, binary media types).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Methods that `ANY` stands for
pub const ANY_METHODS: [&str; 7] = ["DELETE", "GET", "HEAD", "OPTIONS", "PATCH", "POST", "PUT"];

/// Method key used by route-definition documents for `ANY`
pub const DOCUMENT_ANY_METHOD: &str = "x-amazon-apigateway-any-method";

/// Where a route was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    /// An HTTP event attached to a function resource
    FunctionEvent,
    /// A gateway resource tree or a route-definition document
    GatewayResource,
}

/// Flavour of the API serving a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EventType {
    #[default]
    Api,
    HttpApi,
}

/// A path bound to a target function for one or more HTTP methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub methods: Vec<String>,
    pub function_name: String,
    pub source: RouteSource,
    pub event_type: EventType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_format_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub authorization_scopes: BTreeSet<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl Route {
    /// Creates a route. Methods are normalized: upper-cased, `ANY` expanded,
    /// duplicates removed with first-seen order kept.
    pub fn new<M, S>(
        path: impl Into<String>,
        methods: M,
        function_name: impl Into<String>,
        source: RouteSource,
    ) -> Self
    where
        M: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            path: path.into(),
            methods: normalize_methods(methods),
            function_name: function_name.into(),
            source,
            event_type: EventType::Api,
            payload_format_version: None,
            authorizer: None,
            authorization_scopes: BTreeSet::new(),
            operation_name: None,
        }
    }

    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn with_payload_format_version(mut self, version: Option<String>) -> Self {
        self.payload_format_version = version;
        self
    }

    pub fn with_authorizer(mut self, authorizer: Option<String>) -> Self {
        self.authorizer = authorizer;
        self
    }

    pub fn with_authorization_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorization_scopes
            .extend(scopes.into_iter().map(Into::into));
        self
    }

    pub fn with_operation_name(mut self, name: Option<String>) -> Self {
        self.operation_name = name;
        self
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }
}

/// Upper-cases, expands `ANY` and drops duplicates
pub fn normalize_methods<M, S>(methods: M) -> Vec<String>
where
    M: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    let mut push = |method: &str| {
        if !normalized.iter().any(|m| m == method) {
            normalized.push(method.to_string());
        }
    };

    for method in methods {
        let method = method.as_ref().trim();
        if method.eq_ignore_ascii_case("ANY") || method.eq_ignore_ascii_case(DOCUMENT_ANY_METHOD)
        {
            for any in ANY_METHODS {
                push(any);
            }
        } else if !method.is_empty() {
            push(&method.to_ascii_uppercase());
        }
    }

    normalized
}

/// Cross-origin settings of an API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Cors {
    pub allow_origin: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_methods: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_headers: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
}

impl Cors {
    /// CORS that allows every origin, header and method
    pub fn allow_all() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: Some(ANY_METHODS.join(",")),
            allow_headers: Some("*".to_string()),
            max_age: None,
        }
    }

    /// Normalizes a comma-separated method list: upper-case, `*` expands to
    /// every method, `OPTIONS` is always present.
    pub fn normalize_allow_methods(methods: &str) -> String {
        let requested: Vec<&str> = methods
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .collect();

        if requested.iter().any(|m| *m == "*") {
            return ANY_METHODS.join(",");
        }

        let mut normalized = normalize_methods(requested);
        if !normalized.iter().any(|m| m == "OPTIONS") {
            normalized.push("OPTIONS".to_string());
        }
        normalized.join(",")
    }
}

/// The finalized result of one extraction pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Api {
    pub routes: Vec<Route>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_name: Option<String>,

    #[serde(default)]
    pub stage_variables: BTreeMap<String, String>,

    #[serde(default)]
    pub binary_media_types: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<Cors>,
}

impl Api {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Stage name, or `default` when the template declared none
    pub fn stage_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.stage_name.as_deref().unwrap_or(default)
    }

    /// The route answering `method` on `path`, if any
    pub fn find_route(&self, path: &str, method: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.path == path && route.has_method(method))
    }

    /// Number of distinct (path, method) bindings
    pub fn binding_count(&self) -> usize {
        self.routes.iter().map(|route| route.methods.len()).sum()
    }
}
