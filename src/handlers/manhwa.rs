use axum::extract::{Path, Query, State};
use axum::response::Html;
use log::error;
use serde_derive::Deserialize;

use crate::app_state::AppState;
use crate::handlers::errors::ErrorPage;
use crate::models::errors::{ClientError, PageError};
use crate::views::manhwa::{self, ManhwaHome};

#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// A list that failed to load is shown empty rather than failing the page.
fn or_empty<T>(what: &str, result: Result<Vec<T>, ClientError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        error!("Manhwa {} request failed: {}", what, err);
        Vec::new()
    })
}

pub async fn manhwa_home(State(state): State<AppState>) -> Html<String> {
    let api = &state.manhwa;
    let (recommendations, new_manhwa, popular, top) = tokio::join!(
        api.recommendations(),
        api.new_manhwa(),
        api.popular(),
        api.top()
    );

    let lists = ManhwaHome {
        recommendations: or_empty("recommendation", recommendations),
        new_manhwa: or_empty("new", new_manhwa),
        popular: or_empty("popular", popular),
        top: or_empty("top", top),
    };
    state.render(manhwa::home(&lists))
}

pub async fn manhwa_ongoing(State(state): State<AppState>) -> Html<String> {
    let items = or_empty("ongoing", state.manhwa.ongoing().await);
    state.render(manhwa::ongoing(&items))
}

pub async fn manhwa_detail(
    State(state): State<AppState>,
    Path(manhwa_id): Path<String>,
) -> Result<Html<String>, ErrorPage> {
    match state.manhwa.detail(&manhwa_id).await {
        Ok(detail) => Ok(state.render(manhwa::detail(&manhwa_id, &detail))),
        Err(err) => {
            error!("Manhwa detail page error: {}", err);
            Err(state.error_page(PageError::internal("Tidak dapat memuat detail manhwa")))
        }
    }
}

pub async fn manhwa_chapter(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
) -> Result<Html<String>, ErrorPage> {
    match state.manhwa.chapter(&chapter_id).await {
        Ok(chapter) => Ok(state.render(manhwa::reader(&chapter))),
        Err(err) => {
            error!("Manhwa reader page error: {}", err);
            Err(state.error_page(PageError::internal("Tidak dapat memuat chapter")))
        }
    }
}

pub async fn manhwa_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let query = query.q.trim().to_string();
    let results = if query.is_empty() {
        Vec::new()
    } else {
        or_empty("search", state.manhwa.search(&query).await)
    };
    state.render(manhwa::search(&query, &results))
}

pub async fn manhwa_genres(State(state): State<AppState>) -> Html<String> {
    let genres = or_empty("genres", state.manhwa.genres().await);
    state.render(manhwa::genres(&genres))
}

pub async fn manhwa_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<String>,
) -> Result<Html<String>, ErrorPage> {
    match state.manhwa.genre(&genre_id).await {
        Ok(genre) => Ok(state.render(manhwa::genre_detail(&genre_id, &genre))),
        Err(err) => {
            error!("Manhwa genre detail page error: {}", err);
            Err(state.error_page(PageError::internal("Tidak dapat memuat data genre")))
        }
    }
}
