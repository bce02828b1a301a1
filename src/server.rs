use std::net::SocketAddr;
use std::sync::Arc;

use log::{info, warn};

use crate::app_state::AppState;
use crate::clients::comic_client::ComicClient;
use crate::clients::http_client;
use crate::clients::manhwa_client::ManhwaClient;
use crate::clients::proxy_client::ProxyClient;
use crate::config::app_config::AppConfig;
use crate::routes::router;

pub fn build_state(config: Arc<AppConfig>) -> Result<AppState, reqwest::Error> {
    let client = http_client(config.request_timeout(), &config.user_agent)?;
    let comic_base = config.comic_base_url();

    Ok(AppState::new(
        config.clone(),
        Arc::new(ComicClient::new(client.clone(), comic_base.clone())),
        Arc::new(ManhwaClient::new(client.clone(), config.manhwa_api_url.clone())),
        Arc::new(ProxyClient::new(client, comic_base)),
    ))
}

pub async fn start(config: Arc<AppConfig>) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(config.clone())?;
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{}", addr);
    info!("comic api: {}, manhwa api: {}", config.comic_base_url(), config.manhwa_api_url);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("could not listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
