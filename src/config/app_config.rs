use std::env;
use std::path::PathBuf;
use std::time::Duration;

use ::config::{Config, ConfigError, Environment, File};
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub site_name: String,
    pub comic_api_url: String,
    pub comic_source: String,
    pub manhwa_api_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = AppConfig::get_config_directory();

        let mut config = Config::builder();
        if config_dir.join("config.yml").exists() {
            config = config.add_source(File::from(config_dir.join("config.yml")))
        }

        config = config.add_source(Environment::with_prefix("animaqu"))
            .set_default("port", "3000")?
            .set_default("site_name", "ANIMAQU")?
            .set_default("comic_api_url", "https://www.sankavollerei.com/comic")?
            .set_default("comic_source", "kiryuu")?
            .set_default("manhwa_api_url", "https://mnhwa-api.vercel.app/api")?
            .set_default("request_timeout_secs", "15")?
            .set_default("user_agent", "ANIMAQU/1.0")?;

        config.build()?.try_deserialize()
    }

    /// Base for every comic endpoint, e.g. `https://host/comic/kiryuu`.
    pub fn comic_base_url(&self) -> String {
        format!("{}/{}", self.comic_api_url.trim_end_matches('/'), self.comic_source.trim_matches('/'))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn get_config_directory() -> PathBuf {
        match env::var("ANIMAQU_CONF_DIR") {
            Ok(path) => PathBuf::from(path),
            Err(_) => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            site_name: "ANIMAQU".to_string(),
            comic_api_url: "https://www.sankavollerei.com/comic".to_string(),
            comic_source: "kiryuu".to_string(),
            manhwa_api_url: "https://mnhwa-api.vercel.app/api".to_string(),
            request_timeout_secs: 15,
            user_agent: "ANIMAQU/1.0".to_string(),
        }
    }
}
