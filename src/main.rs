//! linscale - apply configured scaling transformations and print the results

use std::process::ExitCode;

use linscale::config::{AppConfig, DebugConfig};
use linscale::job::ScaleJob;

fn main() -> ExitCode {
    // Load configuration before logging so the configured level applies
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| DebugConfig::default().log_level);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting linscale");

    let report = ScaleJob::from_config(&config.job).and_then(|job| {
        log::info!("Running {}D scaling job", job.dimension());
        job.run()
    });

    match report {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Scaling job failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
