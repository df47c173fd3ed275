use clap::Parser;
use listing_matcher::cli::{Cli, LogFormatArg};
use listing_matcher::config::{AppConfig, load_config};
use listing_matcher::logging::{LogConfig, LogFormat, init_logging};
use listing_matcher::pipeline;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.quiet).with_format(format));

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {panic_info}");
    }));

    // Load configuration from file, then let flags override it
    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };
    let config = cli.apply(config);

    match pipeline::run(&config).await {
        Ok(_) => {
            info!("Results written to {}", config.output_file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
