use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;
use crate::handlers;
use crate::handlers::comic::{comic_index, comic_page};
use crate::handlers::manhwa::{manhwa_chapter, manhwa_detail, manhwa_genre, manhwa_genres, manhwa_home, manhwa_ongoing, manhwa_search};
use crate::handlers::proxy::comic_api_proxy;

pub fn comic_routes() -> Router<AppState> {
    Router::new()
        .route("/comic", get(comic_index))
        .route("/api/comic/*endpoint", get(comic_api_proxy))
        .route("/comic/:page", get(comic_page))
}

pub fn manhwa_routes() -> Router<AppState> {
    Router::new()
        .route("/manhwa", get(manhwa_home))
        .route("/manhwa/ongoing", get(manhwa_ongoing))
        .route("/manhwa/detail/:manhwa_id", get(manhwa_detail))
        .route("/manhwa/chapter/:chapter_id", get(manhwa_chapter))
        .route("/manhwa/search", get(manhwa_search))
        .route("/manhwa/genres", get(manhwa_genres))
        .route("/manhwa/genre/:genre_id", get(manhwa_genre))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/comic") }))
        .route("/health", get(handlers::health))
        .merge(comic_routes())
        .merge(manhwa_routes())
        .fallback(handlers::errors::not_found)
        .with_state(state)
}
