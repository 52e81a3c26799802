pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, DialectArgs, OutputFormatArg, RoutesArgs};
pub use handlers::{handle_dialect, handle_routes};
pub use output::{OutputFormat, OutputFormatter};
