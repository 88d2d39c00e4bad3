//! Legacy variant of the order service.
//!
//! `/orders` only, fixed port 8080, no config file and no `PORT` lookup.

use anyhow::Context;

use order_service::config::AppConfig;
use order_service::gateway;

const SERVICE_NAME: &str = "order-legacy";

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    rt.block_on(gateway::run_server(
        SERVICE_NAME,
        &config.gateway,
        gateway::router(config.profile),
    ))?;
    Ok(())
}

fn main() {
    let app_config = AppConfig::legacy();
    let _log_guard = match order_service::logging::init_logging(&app_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("❌ FATAL: {:#}", anyhow::Error::new(e));
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&app_config) {
        tracing::error!("FATAL: {:#}", e);
        std::process::exit(1);
    }
}
