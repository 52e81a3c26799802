//! API route extraction
//!
//! A template declares its HTTP routes in one of two dialects. The
//! [`selector`] picks the dialect, its strategy ([`declarative`] or
//! [`gateway`]) walks the resources into a [`RouteCollector`], and the
//! [`ApiProvider`] exposes the finalized [`Api`].

pub mod collector;
pub mod declarative;
pub mod definition;
pub mod error;
pub mod gateway;
pub mod lambda_uri;
pub mod properties;
pub mod provider;
pub mod route;
pub mod selector;

pub use collector::{ApiProperties, RouteCollector};
pub use declarative::DeclarativeStrategy;
pub use definition::{DefinitionResolver, DefinitionSource, RouteDefinition};
pub use error::ExtractError;
pub use gateway::GatewayStrategy;
pub use provider::{extract_api, ApiProvider};
pub use route::{Api, Cors, EventType, Route, RouteSource, ANY_METHODS};
pub use selector::{select, select_with_reason, Dialect, Selection};
