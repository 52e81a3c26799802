use apiscan::cli::commands::{CliArgs, Commands};
use apiscan::cli::handlers::{handle_dialect, handle_routes};
use apiscan::util::logging::{self, LoggingConfig};
use apiscan::{ApiscanConfig, VERSION};

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    let config = ApiscanConfig::default();
    init_logging_from_args(&args, &config);

    debug!("apiscan v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Routes(routes_args) => {
            let config = match &args.log_level {
                Some(level) => config.with_log_level(level.clone()),
                None => config,
            };
            handle_routes(routes_args, &config)
        }
        Commands::Dialect(dialect_args) => handle_dialect(dialect_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs, config: &ApiscanConfig) {
    let level = if let Some(level_str) = &args.log_level {
        logging::parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        logging::parse_level(&config.log_level)
    };

    logging::init_logging(LoggingConfig {
        level,
        use_json: config.log_json,
        ..Default::default()
    });
}
