use axum::extract::State;
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};
use log::{error, warn};

use crate::app_state::AppState;
use crate::models::errors::PageError;
use crate::views::error::{error_state, ERROR_TITLE};
use crate::views::Page;

/// Error page response; carries the site name so the layout can render.
#[derive(Debug)]
pub struct ErrorPage {
    pub error: PageError,
    pub site_name: String,
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        if self.error.code.is_server_error() {
            error!("Page Error: {}", self.error);
        }
        let page = Page::new(ERROR_TITLE, self.error.message.clone(), "", error_state(&self.error.message));
        (self.error.code, Html(page.render(&self.site_name))).into_response()
    }
}

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> ErrorPage {
    warn!("No route for {}", uri);
    state.error_page(PageError::not_found())
}
