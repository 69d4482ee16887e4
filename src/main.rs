use std::net::SocketAddr;

use feed_server::config::AppConfig;
use feed_server::database::client::{Database, DbConfig};
use feed_server::init;
use feed_server::middleware::error::AppResult;
use feed_server::middleware::mw_ctx;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("feed_server=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();

    let db = Database::connect(DbConfig {
        seed_fixtures: config.seed_fixtures,
    });

    let ctx_state = mw_ctx::create_ctx_state(db, &config);
    let routes_all = init::main_router(&ctx_state);

    let addr = SocketAddr::from((config.host, config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("->> LISTENING on {addr}, procedures under {}", config.rpc_prefix);

    axum::serve(listener, routes_all.into_make_service()).await?;

    Ok(())
}
