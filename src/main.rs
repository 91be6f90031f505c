use tower_http::trace::TraceLayer;
use tracing::info;

use chart_embed::config::ServerConfig;
use chart_embed::{ChartResult, telemetry, web};

#[tokio::main]
async fn main() -> ChartResult<()> {
    telemetry::init_tracing();

    let config = ServerConfig::from_env()?;
    let app = web::router().layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "chart page listening");

    axum::serve(listener, app).await?;

    Ok(())
}
