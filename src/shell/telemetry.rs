use tracing_subscriber::{EnvFilter, fmt};

/// Install the global fmt subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to init tracing subscriber: {e}"))
}
