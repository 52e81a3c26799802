//! Dialect selection
//!
//! A template is extracted under exactly one dialect. The first resource, in
//! template order, whose type belongs to either dialect decides; the
//! declarative set is checked before the gateway set for each resource.
//! Templates with no recognized resource default to the declarative dialect.

use super::declarative::DeclarativeStrategy;
use super::gateway::GatewayStrategy;
use crate::template::{ResourceType, Resources};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The route-declaration convention governing a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Routes declared as HTTP events on function resources
    #[default]
    Declarative,
    /// Routes declared as standalone gateway resource trees
    ExplicitGateway,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Declarative => "declarative",
            Dialect::ExplicitGateway => "explicit-gateway",
        }
    }

    /// Resource types this dialect recognizes
    pub fn resource_types(&self) -> &'static [ResourceType] {
        match self {
            Dialect::Declarative => DeclarativeStrategy::TYPES,
            Dialect::ExplicitGateway => GatewayStrategy::TYPES,
        }
    }

    pub fn recognizes(&self, resource_type: &ResourceType) -> bool {
        self.resource_types().contains(resource_type)
    }

    /// The dialect that was not chosen
    pub fn other(&self) -> Dialect {
        match self {
            Dialect::Declarative => Dialect::ExplicitGateway,
            Dialect::ExplicitGateway => Dialect::Declarative,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of selection, with the resource that decided it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub dialect: Dialect,
    pub decided_by: Option<(String, ResourceType)>,
}

/// Selects the dialect for a resource mapping
pub fn select(resources: &Resources) -> Dialect {
    select_with_reason(resources).dialect
}

/// Like [`select`], also reporting which resource decided
pub fn select_with_reason(resources: &Resources) -> Selection {
    for (name, resource) in resources.iter() {
        let resource_type = &resource.resource_type;

        let dialect = if Dialect::Declarative.recognizes(resource_type) {
            Dialect::Declarative
        } else if Dialect::ExplicitGateway.recognizes(resource_type) {
            Dialect::ExplicitGateway
        } else {
            continue;
        };

        debug!(
            dialect = %dialect,
            resource = name,
            resource_type = %resource_type,
            "Dialect selected by first recognized resource"
        );
        return Selection {
            dialect,
            decided_by: Some((name.to_string(), resource_type.clone())),
        };
    }

    debug!("No recognized resource types; defaulting to declarative dialect");
    Selection {
        dialect: Dialect::default(),
        decided_by: None,
    }
}
