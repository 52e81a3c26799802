//! Deployment template model
//!
//! - [`resource`]: typed resources and the ordered resource mapping
//! - [`intrinsics`]: reference helpers for `Ref`, `Fn::GetAtt`, `Fn::Sub`, `Fn::Join`
//! - [`loader`]: YAML/JSON loading with short-form tag expansion

pub mod intrinsics;
pub mod loader;
pub mod resource;
mod type_enum_macro;

pub use loader::{parse_document, Template, TemplateError};
pub use resource::{Resource, ResourceType, Resources};
