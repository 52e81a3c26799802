//! Route collector
//!
//! Accumulates what one extraction pass discovers and turns it into a single
//! [`Api`]. Routes are keyed by `(path, METHOD)`: the first declaration of a
//! key owns it, and later declarations of the same key only contribute
//! metadata the owner is still missing.

use super::route::{normalize_methods, Api, Cors, Route};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// API-level properties reported by a strategy.
///
/// Every field is optional; `None` means "leave the collected value alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiProperties {
    pub stage_name: Option<String>,
    pub stage_variables: Option<BTreeMap<String, String>>,
    pub binary_media_types: Option<Vec<String>>,
    pub cors: Option<Cors>,
}

impl ApiProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stage_name(mut self, stage_name: impl Into<String>) -> Self {
        self.stage_name = Some(stage_name.into());
        self
    }

    pub fn with_binary_media_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.binary_media_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_cors(mut self, cors: Cors) -> Self {
        self.cors = Some(cors);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stage_name.is_none()
            && self.stage_variables.is_none()
            && self.binary_media_types.is_none()
            && self.cors.is_none()
    }
}

type RouteKey = (String, String);

/// Single-pass accumulator of routes and API properties
#[derive(Debug, Default)]
pub struct RouteCollector {
    routes: Vec<Route>,
    owners: HashMap<RouteKey, usize>,
    stage_name: Option<String>,
    stage_variables: BTreeMap<String, String>,
    binary_media_types: Vec<String>,
    cors: Option<Cors>,
}

impl RouteCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a route.
    ///
    /// Methods whose `(path, method)` key is new are kept on a fresh route in
    /// discovery order. Methods already owned by an earlier route are dropped
    /// from this one, and the owner absorbs this route's metadata: scalar
    /// fields only fill gaps, scope sets are unioned.
    pub fn add_route(&mut self, route: Route) {
        let methods = normalize_methods(&route.methods);
        if methods.is_empty() {
            warn!(path = %route.path, function = %route.function_name, "Ignoring route without methods");
            return;
        }

        let mut fresh = Vec::with_capacity(methods.len());
        for method in methods {
            let key = (route.path.clone(), method);
            match self.owners.get(&key) {
                Some(&owner) => {
                    debug!(
                        path = %key.0,
                        method = %key.1,
                        kept = %self.routes[owner].function_name,
                        dropped = %route.function_name,
                        "Duplicate route; keeping first declaration"
                    );
                    merge_metadata(&mut self.routes[owner], &route);
                }
                None => fresh.push(key.1),
            }
        }

        if fresh.is_empty() {
            return;
        }

        let position = self.routes.len();
        for method in &fresh {
            self.owners
                .insert((route.path.clone(), method.clone()), position);
        }
        self.routes.push(Route {
            methods: fresh,
            ..route
        });
    }

    pub fn add_routes<I: IntoIterator<Item = Route>>(&mut self, routes: I) {
        for route in routes {
            self.add_route(route);
        }
    }

    /// Applies a partial property update: provided fields overwrite, omitted
    /// fields keep their previous value.
    pub fn set_properties(&mut self, properties: ApiProperties) {
        if let Some(stage_name) = properties.stage_name {
            self.stage_name = Some(stage_name);
        }
        if let Some(variables) = properties.stage_variables {
            self.stage_variables = variables;
        }
        if let Some(types) = properties.binary_media_types {
            self.binary_media_types.clear();
            self.add_binary_media_types(types);
        }
        if let Some(cors) = properties.cors {
            self.cors = Some(cors);
        }
    }

    /// Adds binary media types to the collected set
    pub fn add_binary_media_types<I, S>(&mut self, types: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for media_type in types {
            let media_type = normalize_binary_media_type(media_type.as_ref());
            if !media_type.is_empty() && !self.binary_media_types.contains(&media_type) {
                self.binary_media_types.push(media_type);
            }
        }
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Produces the API collected so far. Repeated calls return equal values.
    pub fn finalize(&self) -> Api {
        Api {
            routes: self.routes.clone(),
            stage_name: self.stage_name.clone(),
            stage_variables: self.stage_variables.clone(),
            binary_media_types: self.binary_media_types.clone(),
            cors: self.cors.clone(),
        }
    }
}

fn merge_metadata(owner: &mut Route, incoming: &Route) {
    if owner.payload_format_version.is_none() {
        owner.payload_format_version = incoming.payload_format_version.clone();
    }
    if owner.authorizer.is_none() {
        owner.authorizer = incoming.authorizer.clone();
    }
    if owner.operation_name.is_none() {
        owner.operation_name = incoming.operation_name.clone();
    }
    owner
        .authorization_scopes
        .extend(incoming.authorization_scopes.iter().cloned());
}

// Definition documents escape `/` as `~1`
fn normalize_binary_media_type(media_type: &str) -> String {
    media_type.trim().replace("~1", "/")
}
