//! Order Service
//!
//! A deliberately small HTTP service: `/orders` acknowledges every request
//! with a constant body and, in the full profile, `/health` answers
//! liveness probes.
//!
//! # Modules
//!
//! - [`config`] - YAML + environment configuration, service profiles
//! - [`logging`] - tracing subscriber setup
//! - [`gateway`] - router, handlers and listener

pub mod config;
pub mod gateway;
pub mod logging;

pub use config::{AppConfig, ConfigError, GatewayConfig, ServiceProfile};
pub use gateway::GatewayError;
pub use logging::LoggingError;
