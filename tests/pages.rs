//! Integration tests for the HTTP surface: rendered pages, status codes,
//! redirects and the JSON pass-through.

mod common;

use axum::http::StatusCode;
use animaqu::models::comic::HomeResponse;
use animaqu::models::manhwa::Genre;
use common::{body_text, build_test_app, get, network_error, unsuccessful, MockComicApi, MockManhwaApi};

// ---------------------------------------------------------------------------
// General
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn root_redirects_to_comic() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let response = get(app, "/").await;

    assert!(response.status().is_redirection());
    assert_eq!(response.headers().get("location").unwrap(), "/comic");
}

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("Halaman tidak ditemukan"));
    assert!(html.contains("Coba Lagi"));
}

// ---------------------------------------------------------------------------
// Comic section
// ---------------------------------------------------------------------------

#[tokio::test]
async fn comic_home_renders_slider_and_grids() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let response = get(app, "/comic").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"id="sliderContainer""#));
    assert!(html.contains("translateX(-0%)"));
    assert!(html.contains(r#"data-interval="5000""#));
    assert!(html.contains(r#"id="latestGrid""#));
    assert!(html.contains(r#"id="popularGrid""#));
    assert!(html.contains(r#"id="topRatedGrid""#));
    assert!(html.contains("trend 0"));
}

#[tokio::test]
async fn comic_home_slider_advances_on_its_own() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let html = body_text(get(app, "/comic").await).await;

    assert!(html.contains("<script>"));
    assert!(html.contains("setInterval(function () { navigate(1); }, interval)"));
    assert!(html.contains("clearInterval(timer)"));
}

#[tokio::test]
async fn comic_home_without_trending_has_no_slider_script() {
    let comic = MockComicApi {
        home: Ok(HomeResponse { success: true, trending: Vec::new(), popular_manhwa: common::items("pop", 2) }),
        ..MockComicApi::default()
    };
    let app = build_test_app(comic, MockManhwaApi::default());
    let html = body_text(get(app, "/comic").await).await;

    assert!(!html.contains("<script>"));
    assert!(!html.contains("sliderNext"));
}

#[tokio::test]
async fn comic_cards_without_slug_are_not_links() {
    let mut trending = common::items("trend", 2);
    trending[0].slug = String::new();
    let comic = MockComicApi {
        home: Ok(HomeResponse { success: true, trending, popular_manhwa: Vec::new() }),
        ..MockComicApi::default()
    };
    let app = build_test_app(comic, MockManhwaApi::default());
    let html = body_text(get(app, "/comic").await).await;

    assert!(html.contains(r#"<div class="slide">"#));
    assert!(html.contains(r#"<div class="card">"#));
    assert!(html.contains(r#"<a class="slide" href="#));
}

#[tokio::test]
async fn comic_slide_parameter_moves_slider() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let html = body_text(get(app, "/comic?slide=3").await).await;

    assert!(html.contains("translateX(-300%)"));
    assert!(html.contains(r#"href="/comic?slide=4""#));
    assert!(html.contains(r#"href="/comic?slide=2""#));
}

#[tokio::test]
async fn comic_home_failure_renders_error_state() {
    let comic = MockComicApi { home: Err(unsuccessful("home")), ..MockComicApi::default() };
    let app = build_test_app(comic, MockManhwaApi::default());
    let response = get(app, "/comic").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains("Terjadi Kesalahan"));
    assert!(html.contains("Gagal memuat data home."));
    assert!(html.contains("location.reload()"));
}

#[tokio::test]
async fn comic_search_page_shows_results() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let response = get(app, "/comic?search=solo").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Menampilkan 2 hasil untuk"));
    assert!(html.contains("found 1"));
}

#[tokio::test]
async fn comic_named_pages_route_to_listings() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let html = body_text(get(app.clone(), "/comic/popular").await).await;
    assert!(html.contains("Manhwa Populer"));
    assert!(html.contains("Menampilkan 4 manhwa populer"));

    let html = body_text(get(app, "/comic/top-weekly.html").await).await;
    assert!(html.contains("Top Mingguan"));
}

#[tokio::test]
async fn comic_detail_page_lists_chapters() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let html = body_text(get(app, "/comic?detail=solo-leveling").await).await;

    assert!(html.contains("Solo Leveling"));
    assert!(html.contains("Daftar Chapter"));
    assert!(html.contains("Baca Chapter Pertama"));
    assert!(html.contains("chapter 3"));
    assert!(html.contains("Diikuti 12k orang"));
}

#[tokio::test]
async fn comic_reader_disables_missing_neighbour() {
    let comic = MockComicApi {
        chapter: Ok(common::chapter("Chapter 1", None, Some("chapter-2"))),
        ..MockComicApi::default()
    };
    let app = build_test_app(comic, MockManhwaApi::default());
    let html = body_text(get(app, "/comic?chapter=chapter-1").await).await;

    assert!(html.contains(r#"<button class="btn btn-secondary" id="prevChapter" disabled>"#));
    assert!(html.contains(r#"id="nextChapter" href="#));
    assert!(html.contains("reader-image"));
}

#[tokio::test]
async fn comic_reader_failure_renders_error_state() {
    let comic = MockComicApi { chapter: Err(network_error()), ..MockComicApi::default() };
    let app = build_test_app(comic, MockManhwaApi::default());
    let response = get(app, "/comic?chapter=chapter-1").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_text(response).await.contains("Gagal memuat chapter."));
}

#[tokio::test]
async fn comic_api_rejects_unknown_endpoints() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let response = get(app, "/api/comic/admin").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comic_api_rejects_encoded_dot_segments() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let response = get(app, "/api/comic/search/%2E%2E").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn comic_api_reports_unreachable_upstream() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let response = get(app, "/api/comic/home").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// ---------------------------------------------------------------------------
// Manhwa section
// ---------------------------------------------------------------------------

#[tokio::test]
async fn manhwa_home_renders_all_lists() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let response = get(app, "/manhwa").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<title>Manhwa - ANIMAQU</title>"));
    for id in ["recommendationGrid", "newGrid", "popularGrid", "topGrid"] {
        assert!(html.contains(id), "missing grid {}", id);
    }
    assert!(html.contains("Tower of God"));
}

#[tokio::test]
async fn manhwa_home_survives_failed_lists() {
    let manhwa = MockManhwaApi { lists: Err(network_error()), ..MockManhwaApi::default() };
    let app = build_test_app(MockComicApi::default(), manhwa);
    let response = get(app, "/manhwa").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_text(response).await.contains("Tower of God"));
}

#[tokio::test]
async fn manhwa_detail_renders_title_and_genres() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let html = body_text(get(app, "/manhwa/detail/tower-of-god").await).await;

    assert!(html.contains("<title>Tower of God - ANIMAQU</title>"));
    assert!(html.contains("Adventure"));
    assert!(html.contains("Bam climbs the tower."));
}

#[tokio::test]
async fn manhwa_detail_failure_is_500() {
    let manhwa = MockManhwaApi { detail: Err(unsuccessful("detail")), ..MockManhwaApi::default() };
    let app = build_test_app(MockComicApi::default(), manhwa);
    let response = get(app, "/manhwa/detail/tower-of-god").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Tidak dapat memuat detail manhwa"));
}

#[tokio::test]
async fn manhwa_chapter_failure_is_500() {
    let manhwa = MockManhwaApi { chapter: Err(network_error()), ..MockManhwaApi::default() };
    let app = build_test_app(MockComicApi::default(), manhwa);
    let response = get(app, "/manhwa/chapter/tog-1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Tidak dapat memuat chapter"));
}

#[tokio::test]
async fn manhwa_reader_links_next_chapter() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let html = body_text(get(app, "/manhwa/chapter/tower-of-god-chapter-1").await).await;

    assert!(html.contains("Tower of God Chapter 1"));
    assert!(html.contains(r#"id="prevChapter" disabled"#));
    assert!(html.contains(r#"id="nextChapter" href="#));
}

#[tokio::test]
async fn manhwa_search_shows_query_heading() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let html = body_text(get(app, "/manhwa/search?q=solo").await).await;

    assert!(html.contains("Hasil Pencarian"));
    assert!(html.contains("Solo Leveling"));
    assert!(html.contains("Menampilkan 1 hasil untuk"));
}

#[tokio::test]
async fn manhwa_search_failure_renders_empty_results() {
    let manhwa = MockManhwaApi { search: Err(network_error()), ..MockManhwaApi::default() };
    let app = build_test_app(MockComicApi::default(), manhwa);
    let response = get(app, "/manhwa/search?q=solo").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Tidak ada hasil untuk"));
}

#[tokio::test]
async fn manhwa_genres_and_genre_detail() {
    let app = build_test_app(MockComicApi::default(), MockManhwaApi::default());
    let html = body_text(get(app.clone(), "/manhwa/genres").await).await;
    assert!(html.contains("Genre Manhwa"));
    assert!(html.contains("Romance"));

    let html = body_text(get(app, "/manhwa/genre/romance").await).await;
    assert!(html.contains("<title>Genre: Romance - ANIMAQU</title>"));
    assert!(html.contains("True Beauty"));
}

#[tokio::test]
async fn manhwa_genres_without_key_render_as_plain_tags() {
    let manhwa = MockManhwaApi {
        genres: Ok(vec![Genre { name: "Slice of Life".to_string(), slug: None }]),
        ..MockManhwaApi::default()
    };
    let app = build_test_app(MockComicApi::default(), manhwa);
    let html = body_text(get(app, "/manhwa/genres").await).await;

    assert!(html.contains(r#"<span class="genre-tag">Slice of Life</span>"#));
    assert!(!html.contains(r#"<a class="genre-tag""#));
}

#[tokio::test]
async fn manhwa_genre_failure_is_500() {
    let manhwa = MockManhwaApi { genre: Err(network_error()), ..MockManhwaApi::default() };
    let app = build_test_app(MockComicApi::default(), manhwa);
    let response = get(app, "/manhwa/genre/romance").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("Tidak dapat memuat data genre"));
}
