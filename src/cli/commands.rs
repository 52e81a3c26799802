use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Lists the HTTP routes a serverless deployment template declares
#[derive(Parser, Debug)]
#[command(
    name = "apiscan",
    about = "Lists the HTTP routes a serverless deployment template declares",
    version,
    long_about = "apiscan reads a deployment template, works out whether its routes are \
                  declared as function events or as explicit gateway resources, and prints \
                  the resulting API: routes, stage, stage variables, binary media types \
                  and CORS settings."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Extract the API routes declared by a template",
        long_about = "Extracts the API declared by a template and prints it.\n\n\
                      Examples:\n  \
                      apiscan routes template.yaml\n  \
                      apiscan routes template.yaml --format json\n  \
                      apiscan routes build/template.yaml --working-dir . --output api.yaml --format yaml"
    )]
    Routes(RoutesArgs),

    #[command(
        about = "Show which dialect a template is extracted with",
        long_about = "Prints the dialect (declarative or explicit-gateway) selected for a \
                      template and the resource that decided it.\n\n\
                      Examples:\n  \
                      apiscan dialect template.yaml"
    )]
    Dialect(DialectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct RoutesArgs {
    #[arg(value_name = "TEMPLATE", help = "Path to the template (YAML or JSON)")]
    pub template: PathBuf,

    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        help = "Base directory for relative route-definition files (defaults to the template's directory)"
    )]
    pub working_dir: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct DialectArgs {
    #[arg(value_name = "TEMPLATE", help = "Path to the template (YAML or JSON)")]
    pub template: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
