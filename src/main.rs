use std::{env, net::SocketAddr};

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use covid_sweden::{ingest, series, router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let source = ingest::resolve_source();
    info!("loading weekly data from {source}");
    let records = match ingest::load_records(&source).await {
        Ok(records) => records,
        Err(err) => {
            error!("{err}");
            return Err(err.into());
        }
    };

    let data = series::build_dashboard(&records);
    let meta = series::selector_meta(&data.icu).ok_or("weekly data contained no rows")?;
    info!(
        "serving {} weekly records for {} regions, {} to {}",
        records.len(),
        meta.regions.len(),
        meta.min_date,
        meta.max_date
    );

    let app = router(AppState::new(data, meta));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
    }
}
