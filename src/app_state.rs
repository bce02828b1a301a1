use std::sync::Arc;

use axum::response::Html;

use crate::clients::comic_client::ComicApi;
use crate::clients::manhwa_client::ManhwaApi;
use crate::clients::proxy_client::ProxyClient;
use crate::comic::controller::ComicController;
use crate::config::app_config::AppConfig;
use crate::handlers::errors::ErrorPage;
use crate::models::errors::PageError;
use crate::views::Page;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub comic: Arc<ComicController>,
    pub manhwa: Arc<dyn ManhwaApi>,
    pub proxy_client: Arc<ProxyClient>,
}

impl AppState {
    pub fn new(
        config: Arc<AppConfig>,
        comic_api: Arc<dyn ComicApi>,
        manhwa: Arc<dyn ManhwaApi>,
        proxy_client: Arc<ProxyClient>,
    ) -> Self {
        Self {
            config,
            comic: Arc::new(ComicController::new(comic_api)),
            manhwa,
            proxy_client,
        }
    }

    pub fn render(&self, page: Page) -> Html<String> {
        Html(page.render(&self.config.site_name))
    }

    pub fn error_page(&self, error: PageError) -> ErrorPage {
        ErrorPage { error, site_name: self.config.site_name.clone() }
    }
}
