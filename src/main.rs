use std::sync::Arc;

use clap::Parser;
use userdir::utils::{logger, validation::Validate};
use userdir::{App, CliConfig, PlaceholderClient, WorldTimeClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_file.as_deref())?;

    tracing::info!("Starting userdir");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // The UI loop owns the main thread; fetches run on the tokio runtime and
    // report back over the app's event channel.
    let runtime = tokio::runtime::Runtime::new()?;
    let user_api = Arc::new(PlaceholderClient::from_config(&config));
    let time_api = Arc::new(WorldTimeClient::from_config(&config));
    let app = App::new(user_api, time_api, runtime.handle().clone());

    if let Err(e) = userdir::ui::run(app) {
        tracing::error!("❌ UI loop failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ Shutdown complete");
    Ok(())
}
