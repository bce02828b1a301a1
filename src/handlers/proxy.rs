use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use hyper::Body;
use log::error;

use crate::app_state::AppState;
use crate::clients::proxy_client::upstream_path;

pub const API_PREFIX: &str = "/api/comic/";

/// Raw comic JSON for browser-side consumers, fetched on their behalf.
pub async fn comic_api_proxy(
    State(state): State<AppState>,
    req: Request<Body>,
) -> Response {
    let endpoint = req.uri().path()
        .strip_prefix(API_PREFIX)
        .unwrap_or_default()
        .to_string();
    if upstream_path(&endpoint).is_none() {
        return StatusCode::NOT_FOUND.into_response();
    }

    match state.proxy_client.proxy_request(&endpoint, req).await {
        Ok(resp) => resp.into_response(),
        Err(err) => {
            error!("{}", err);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
