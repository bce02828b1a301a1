use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;
use crate::comic::route::{ComicQuery, ComicRoute};
use crate::views;

pub async fn comic_index(
    State(state): State<AppState>,
    Query(query): Query<ComicQuery>,
) -> Response {
    render_comic(state, None, query).await
}

pub async fn comic_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(query): Query<ComicQuery>,
) -> Response {
    render_comic(state, Some(page), query).await
}

async fn render_comic(state: AppState, page: Option<String>, query: ComicQuery) -> Response {
    let route = ComicRoute::resolve(page.as_deref(), &query);
    let view = state.comic.load(&route, query.slide_index()).await;
    let status = if view.is_error() { StatusCode::BAD_GATEWAY } else { StatusCode::OK };

    (status, state.render(views::comic::page(&view))).into_response()
}

