//! Command handlers
//!
//! Each handler runs one subcommand and returns the process exit code.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use super::commands::{DialectArgs, RoutesArgs};
use super::output::OutputFormatter;
use crate::api::{select_with_reason, ApiProvider};
use crate::config::ApiscanConfig;
use crate::fs::RealFileSystem;
use crate::template::Template;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_EXTRACTION_FAILURE: i32 = 1;
pub const EXIT_CONFIG_FAILURE: i32 = 2;

pub fn handle_routes(args: &RoutesArgs, config: &ApiscanConfig) -> i32 {
    if let Err(e) = config.validate() {
        error!("{}", e);
        eprintln!("Error: {}", e);
        return EXIT_CONFIG_FAILURE;
    }

    match run_routes(args, config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("Route extraction failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_EXTRACTION_FAILURE
        }
    }
}

pub fn handle_dialect(args: &DialectArgs) -> i32 {
    match run_dialect(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("Dialect selection failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_EXTRACTION_FAILURE
        }
    }
}

fn run_routes(args: &RoutesArgs, config: &ApiscanConfig) -> Result<()> {
    let template = load_template(&args.template)?;
    let working_dir = working_dir(args, config);
    debug!(working_dir = ?working_dir, "Resolving route definitions");

    let provider = ApiProvider::from_template(&template, working_dir.as_deref())
        .with_context(|| format!("Failed to extract routes from {}", args.template.display()))?;

    let mut api = provider.into_api();
    if api.stage_name.is_none() {
        api.stage_name = Some(config.default_stage.clone());
    }

    let output = OutputFormatter::new(args.format.into()).format_api(&api)?;
    write_output(&output, args.output.as_deref())
}

fn run_dialect(args: &DialectArgs) -> Result<()> {
    let template = load_template(&args.template)?;
    let selection = select_with_reason(&template.resources);

    let output = OutputFormatter::new(args.format.into()).format_selection(&selection)?;
    write_output(&output, None)
}

fn load_template(path: &Path) -> Result<Template> {
    info!(template = %path.display(), "Loading template");
    Template::from_path(&RealFileSystem, path)
        .with_context(|| format!("Failed to load template {}", path.display()))
}

/// `--working-dir`, then `APISCAN_WORKING_DIR`, then the template's directory
fn working_dir(args: &RoutesArgs, config: &ApiscanConfig) -> Option<PathBuf> {
    args.working_dir
        .clone()
        .or_else(|| config.working_dir.clone())
        .or_else(|| {
            args.template
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
        })
}

fn write_output(output: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!(path = %path.display(), "Output written");
        }
        None => print!("{}", output),
    }
    Ok(())
}
