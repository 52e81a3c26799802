//! Output formatting for extracted APIs
//!
//! JSON and YAML are straight serializations of [`Api`]; the human format is
//! a route listing followed by the API-level properties.

use anyhow::{Context, Result};
use serde_json::json;

use crate::api::{Api, Route, Selection};

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_api(&self, api: &Api) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(api).context("Failed to serialize API to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(api).context("Failed to serialize API to YAML")
            }
            OutputFormat::Human => Ok(self.format_api_human(api)),
        }
    }

    pub fn format_selection(&self, selection: &Selection) -> Result<String> {
        let (resource, resource_type) = match &selection.decided_by {
            Some((name, ty)) => (Some(name.as_str()), Some(ty.to_string())),
            None => (None, None),
        };
        let value = json!({
            "dialect": selection.dialect,
            "resource": resource,
            "resource_type": resource_type,
        });

        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&value)
                .context("Failed to serialize dialect selection to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(&value)
                .context("Failed to serialize dialect selection to YAML"),
            OutputFormat::Human => Ok(match (resource, resource_type) {
                (Some(name), Some(ty)) => format!(
                    "Dialect: {}\nDecided by: {} ({})\n",
                    selection.dialect, name, ty
                ),
                _ => format!(
                    "Dialect: {}\nDecided by: (no recognized resources, default)\n",
                    selection.dialect
                ),
            }),
        }
    }

    fn format_api_human(&self, api: &Api) -> String {
        let mut output = String::new();

        output.push_str(&format!("API Routes ({})\n", api.routes.len()));
        output.push_str(RULE);
        output.push_str("\n\n");

        if api.routes.is_empty() {
            output.push_str("(no routes declared)\n");
        }
        for route in &api.routes {
            output.push_str(&format_route_line(route));
        }

        output.push_str("\nStage:\n");
        output.push_str(&format!(
            "\u{251C}\u{2500} Name:      {}\n",
            api.stage_name.as_deref().unwrap_or("(not specified)")
        ));
        if api.stage_variables.is_empty() {
            output.push_str("\u{2514}\u{2500} Variables: (none)\n");
        } else {
            output.push_str("\u{2514}\u{2500} Variables:\n");
            for (key, value) in &api.stage_variables {
                output.push_str(&format!("     {} = {}\n", key, value));
            }
        }

        if !api.binary_media_types.is_empty() {
            output.push_str(&format!(
                "\nBinary Media Types: {}\n",
                api.binary_media_types.join(", ")
            ));
        }

        if let Some(cors) = &api.cors {
            output.push_str("\nCORS:\n");
            output.push_str(&format!("\u{251C}\u{2500} Origin:  {}\n", cors.allow_origin));
            output.push_str(&format!(
                "\u{251C}\u{2500} Methods: {}\n",
                cors.allow_methods.as_deref().unwrap_or("(default)")
            ));
            output.push_str(&format!(
                "\u{251C}\u{2500} Headers: {}\n",
                cors.allow_headers.as_deref().unwrap_or("(default)")
            ));
            match cors.max_age {
                Some(age) => output.push_str(&format!("\u{2514}\u{2500} Max Age: {}s\n", age)),
                None => output.push_str("\u{2514}\u{2500} Max Age: (default)\n"),
            }
        }

        output
    }
}

fn format_route_line(route: &Route) -> String {
    let mut line = format!(
        "{:<28} {:<40} -> {}",
        route.methods.join(","),
        route.path,
        route.function_name
    );
    if let Some(authorizer) = &route.authorizer {
        line.push_str(&format!(" [auth: {}]", authorizer));
    }
    line.push('\n');
    line
}
