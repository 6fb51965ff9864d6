//! Tracing setup for hosts without their own subscriber

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to `level`
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .ok(); // Ignore error if already initialized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing("debug");
        init_tracing("not a valid filter [");
        tracing::debug!("subscriber installed");
    }
}
