use std::process;
use std::sync::Arc;

use log::{error, LevelFilter};

use animaqu::config::app_config::AppConfig;
use animaqu::server;

#[tokio::main]
async fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match AppConfig::new() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!("invalid configuration: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = server::start(config).await {
        error!("server error: {}", err);
        process::exit(1);
    }
}
