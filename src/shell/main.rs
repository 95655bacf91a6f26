use walk_service::shell::config::AppConfig;
use walk_service::shell::{build_state, http, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing()?;

    let config = AppConfig::from_env()?;
    let state = build_state(&config)?;
    let app = http::router(state);

    let listener = config.bind().await?;
    tracing::info!(addr = %listener.local_addr()?, "walk service listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
