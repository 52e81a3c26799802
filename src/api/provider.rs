//! Extraction orchestrator
//!
//! Selects the dialect for a template, runs its strategy against a fresh
//! collector and holds the finalized [`Api`].

use super::collector::RouteCollector;
use super::declarative::DeclarativeStrategy;
use super::definition::DefinitionResolver;
use super::error::ExtractError;
use super::gateway::GatewayStrategy;
use super::route::{Api, Route};
use super::selector::{self, Dialect};
use crate::fs::{FileSystem, RealFileSystem};
use crate::template::{Resources, Template};
use std::path::Path;
use tracing::{debug, info, warn};

impl Dialect {
    /// Runs this dialect's strategy, writing into `collector`
    pub fn extract<F: FileSystem>(
        &self,
        resources: &Resources,
        collector: &mut RouteCollector,
        definitions: &DefinitionResolver<'_, F>,
    ) -> Result<(), ExtractError> {
        match self {
            Dialect::Declarative => DeclarativeStrategy.extract(resources, collector, definitions),
            Dialect::ExplicitGateway => GatewayStrategy.extract(resources, collector, definitions),
        }
    }
}

/// Result of one extraction pass over a template
#[derive(Debug, Clone)]
pub struct ApiProvider {
    dialect: Dialect,
    api: Api,
}

impl ApiProvider {
    /// Extracts the API from `resources`, reading external route definitions
    /// from the local disk
    pub fn new(resources: &Resources, working_dir: Option<&Path>) -> Result<Self, ExtractError> {
        Self::with_fs(resources, working_dir, &RealFileSystem)
    }

    /// [`ApiProvider::new`] over a loaded template's resources
    pub fn from_template(
        template: &Template,
        working_dir: Option<&Path>,
    ) -> Result<Self, ExtractError> {
        Self::new(&template.resources, working_dir)
    }

    /// Extracts the API, reading external route definitions through `fs`
    pub fn with_fs<F: FileSystem>(
        resources: &Resources,
        working_dir: Option<&Path>,
        fs: &F,
    ) -> Result<Self, ExtractError> {
        debug!(count = resources.len(), "Inspecting template resources");

        let selection = selector::select_with_reason(resources);
        match &selection.decided_by {
            Some((name, resource_type)) => info!(
                dialect = %selection.dialect,
                resource = name.as_str(),
                resource_type = %resource_type,
                "Selected extraction dialect"
            ),
            None => info!(
                dialect = %selection.dialect,
                "No API resources recognized; using default dialect"
            ),
        }
        warn_ignored(resources, selection.dialect);

        let definitions = DefinitionResolver::new(fs, working_dir);
        let mut collector = RouteCollector::new();
        selection
            .dialect
            .extract(resources, &mut collector, &definitions)?;

        let api = collector.finalize();
        info!(
            routes = api.routes.len(),
            bindings = api.binding_count(),
            "Extracted API routes"
        );

        Ok(Self {
            dialect: selection.dialect,
            api,
        })
    }

    /// All APIs in the template. There is always exactly one.
    pub fn get_all(&self) -> impl Iterator<Item = &Api> {
        std::iter::once(&self.api)
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn into_api(self) -> Api {
        self.api
    }

    pub fn routes(&self) -> &[Route] {
        &self.api.routes
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

/// One-shot extraction from a resource mapping
pub fn extract_api(resources: &Resources, working_dir: Option<&Path>) -> Result<Api, ExtractError> {
    ApiProvider::new(resources, working_dir).map(ApiProvider::into_api)
}

// Resources of the other dialect contribute nothing once a dialect is chosen
fn warn_ignored(resources: &Resources, dialect: Dialect) {
    let other = dialect.other();
    let ignored: Vec<&str> = resources
        .iter()
        .filter(|(_, resource)| other.recognizes(&resource.resource_type))
        .map(|(name, _)| name)
        .collect();

    if !ignored.is_empty() {
        warn!(
            dialect = %dialect,
            ignored_dialect = %other,
            resources = ?ignored,
            "Template mixes dialects; resources of the other dialect are ignored"
        );
    }
}
