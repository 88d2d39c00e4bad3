//! Order Service
//!
//! Full variant: `/orders` + `/health`, request logging, port from
//! `config/<env>.yaml` overridden by `PORT`.
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│  Router  │───▶│ Listener │
//! │(YAML+env)│    │ (routes) │    │  (axum)  │
//! └──────────┘    └──────────┘    └──────────┘
//! ```

use anyhow::Context;

use order_service::config::AppConfig;
use order_service::gateway;

const SERVICE_NAME: &str = "order-service";

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    rt.block_on(async {
        let app = gateway::router(config.profile);
        gateway::run_server(SERVICE_NAME, &config.gateway, app).await
    })?;
    Ok(())
}

fn main() {
    let env = get_env();
    let app_config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            // Logging is configured from this file, so report on stderr
            eprintln!("❌ FATAL: {:#}", anyhow::Error::new(e));
            std::process::exit(1);
        }
    };
    let log_guard = match order_service::logging::init_logging(&app_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("❌ FATAL: {:#}", anyhow::Error::new(e));
            std::process::exit(1);
        }
    };

    tracing::info!(
        profile = ?app_config.profile,
        "Starting {} in {} mode",
        SERVICE_NAME,
        env
    );

    if let Err(e) = run(&app_config) {
        tracing::error!("FATAL: {:#}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}
