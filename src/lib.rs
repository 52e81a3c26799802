//! apiscan - HTTP route extraction for serverless deployment templates
//!
//! A deployment template declares its HTTP API in one of two dialects:
//! as HTTP events attached to function resources (declarative), or as
//! standalone gateway resources describing paths, methods and integrations
//! (explicit gateway). This crate picks the dialect, walks the matching
//! resources and produces a single [`Api`] with deduplicated routes and the
//! API-level stage, binary media type and CORS settings.
//!
//! # Example
//!
//! ```no_run
//! use apiscan::{ApiProvider, Template};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let template = Template::from_yaml_str(
//!     r#"
//! Resources:
//!   HelloFunction:
//!     Type: AWS::Serverless::Function
//!     Properties:
//!       Events:
//!         Hello:
//!           Type: Api
//!           Properties: { Path: /hello, Method: get }
//! "#,
//! )?;
//!
//! let provider = ApiProvider::from_template(&template, Some(Path::new(".")))?;
//! for api in provider.get_all() {
//!     for route in &api.routes {
//!         println!("{} {:?} -> {}", route.path, route.methods, route.function_name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`template`]: resource model and template loading
//! - [`api`]: dialect selection, extraction strategies, route collection
//! - [`fs`]: file-system abstraction used to read route-definition documents
//! - [`config`], [`util`], [`cli`]: the command-line tool around the library

pub mod api;
pub mod cli;
pub mod config;
pub mod fs;
pub mod template;
pub mod util;

pub use api::{
    extract_api, select, Api, ApiProvider, Cors, Dialect, EventType, ExtractError, Route,
    RouteCollector, RouteSource,
};
pub use config::{ApiscanConfig, ConfigError};
pub use template::{Resource, ResourceType, Resources, Template, TemplateError};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_apiscan() {
        assert_eq!(NAME, "apiscan");
    }
}
