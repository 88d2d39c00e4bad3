use thiserror::Error;

/// Startup failures of the listener. Both are fatal to the process.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Failed to bind to {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error")]
    Serve(#[source] std::io::Error),
}
