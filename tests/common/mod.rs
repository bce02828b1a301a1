//! Shared helpers: in-memory upstream APIs and request plumbing.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tower::ServiceExt;

use animaqu::app_state::AppState;
use animaqu::clients::comic_client::ComicApi;
use animaqu::clients::manhwa_client::ManhwaApi;
use animaqu::clients::proxy_client::ProxyClient;
use animaqu::config::app_config::AppConfig;
use animaqu::models::comic::{CatalogItem, ChapterRef, ChapterResponse, GenreTag, HomeResponse, ListResponse, MangaDetail, SearchResponse, TopWeeklyResponse};
use animaqu::models::errors::ClientError;
use animaqu::models::manhwa::{Genre, GenreDetail, ManhwaChapter, ManhwaDetail, ManhwaItem};
use animaqu::routes::router;

pub fn network_error() -> ClientError {
    ClientError::Request("connection refused".to_string())
}

pub fn unsuccessful(endpoint: &str) -> ClientError {
    ClientError::Unsuccessful(endpoint.to_string())
}

pub fn item(slug: &str, title: &str) -> CatalogItem {
    CatalogItem {
        title: Some(title.to_string()),
        image_src: Some(format!("https://img.example/{}.jpg", slug)),
        rating: Some("8.1".to_string()),
        latest_chapter: Some("Chapter 10".to_string()),
        chapter: Some("Ch. 10".to_string()),
        slug: slug.to_string(),
        ..CatalogItem::default()
    }
}

pub fn items(prefix: &str, n: usize) -> Vec<CatalogItem> {
    (0..n).map(|i| item(&format!("{}-{}", prefix, i), &format!("{} {}", prefix, i))).collect()
}

pub fn chapter_ref(slug: &str) -> ChapterRef {
    ChapterRef { slug: slug.to_string(), title: slug.replace('-', " "), date: "1 hari lalu".to_string() }
}

pub fn manga(chapters: &[&str]) -> MangaDetail {
    MangaDetail {
        success: true,
        title: "Solo Leveling".to_string(),
        image_src: Some("https://img.example/solo.jpg".to_string()),
        rating: Some("9.2".to_string()),
        status: Some("Completed".to_string()),
        kind: Some("Manhwa".to_string()),
        released: Some("2018".to_string()),
        genres: vec![GenreTag { name: "Action".to_string() }, GenreTag { name: "Fantasy".to_string() }],
        synopsis: "The weakest hunter of all mankind.".to_string(),
        followed_by: Some("Diikuti 12k orang".to_string()),
        chapters: chapters.iter().map(|s| chapter_ref(s)).collect(),
    }
}

pub fn chapter(title: &str, prev: Option<&str>, next: Option<&str>) -> ChapterResponse {
    ChapterResponse {
        success: true,
        title: title.to_string(),
        images: vec!["https://img.example/p1.jpg".to_string(), "https://img.example/p2.jpg".to_string()],
        prev_slug: prev.map(String::from),
        next_slug: next.map(String::from),
    }
}

/// Comic API answering from canned results.
pub struct MockComicApi {
    pub home: Result<HomeResponse, ClientError>,
    pub latest: Result<ListResponse, ClientError>,
    pub search: Result<SearchResponse, ClientError>,
    pub manga: Result<MangaDetail, ClientError>,
    pub chapter: Result<ChapterResponse, ClientError>,
    pub popular: Result<ListResponse, ClientError>,
    pub recommendations: Result<ListResponse, ClientError>,
    pub top_weekly: Result<TopWeeklyResponse, ClientError>,
    pub search_calls: AtomicUsize,
    pub manga_calls: AtomicUsize,
}

impl Default for MockComicApi {
    fn default() -> Self {
        Self {
            home: Ok(HomeResponse { success: true, trending: items("trend", 10), popular_manhwa: items("pop", 10) }),
            latest: Ok(ListResponse { success: true, results: items("new", 20) }),
            search: Ok(SearchResponse { success: true, series_list: items("found", 2) }),
            manga: Ok(manga(&["chapter-3", "chapter-2", "chapter-1"])),
            chapter: Ok(chapter("Chapter 2", Some("chapter-1"), Some("chapter-3"))),
            popular: Ok(ListResponse { success: true, results: items("pop", 4) }),
            recommendations: Ok(ListResponse { success: true, results: items("rec", 3) }),
            top_weekly: Ok(TopWeeklyResponse { success: true, recommendations: items("top", 7) }),
            search_calls: AtomicUsize::new(0),
            manga_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ComicApi for MockComicApi {
    async fn home(&self) -> Result<HomeResponse, ClientError> {
        self.home.clone()
    }

    async fn latest(&self) -> Result<ListResponse, ClientError> {
        self.latest.clone()
    }

    async fn search(&self, _query: &str) -> Result<SearchResponse, ClientError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search.clone()
    }

    async fn manga(&self, _slug: &str) -> Result<MangaDetail, ClientError> {
        self.manga_calls.fetch_add(1, Ordering::SeqCst);
        self.manga.clone()
    }

    async fn chapter(&self, _slug: &str) -> Result<ChapterResponse, ClientError> {
        self.chapter.clone()
    }

    async fn popular(&self) -> Result<ListResponse, ClientError> {
        self.popular.clone()
    }

    async fn recommendations(&self) -> Result<ListResponse, ClientError> {
        self.recommendations.clone()
    }

    async fn top_weekly(&self) -> Result<TopWeeklyResponse, ClientError> {
        self.top_weekly.clone()
    }
}

pub fn manhwa_item(slug: &str, title: &str) -> ManhwaItem {
    ManhwaItem {
        title: Some(title.to_string()),
        slug: Some(slug.to_string()),
        image: Some(format!("https://img.example/{}.jpg", slug)),
        latest_chapter: Some("Chapter 5".to_string()),
        ..ManhwaItem::default()
    }
}

/// Manhwa API answering from canned results.
pub struct MockManhwaApi {
    pub lists: Result<Vec<ManhwaItem>, ClientError>,
    pub detail: Result<ManhwaDetail, ClientError>,
    pub chapter: Result<ManhwaChapter, ClientError>,
    pub genres: Result<Vec<Genre>, ClientError>,
    pub genre: Result<GenreDetail, ClientError>,
    pub search: Result<Vec<ManhwaItem>, ClientError>,
}

impl Default for MockManhwaApi {
    fn default() -> Self {
        Self {
            lists: Ok(vec![manhwa_item("tower-of-god", "Tower of God"), manhwa_item("the-breaker", "The Breaker")]),
            detail: Ok(ManhwaDetail {
                title: Some("Tower of God".to_string()),
                synopsis: Some("Bam climbs the tower.".to_string()),
                genres: vec![Genre { name: "Adventure".to_string(), slug: Some("adventure".to_string()) }],
                ..ManhwaDetail::default()
            }),
            chapter: Ok(ManhwaChapter {
                title: Some("Tower of God Chapter 1".to_string()),
                images: vec!["https://img.example/tog-1.jpg".to_string()],
                prev_slug: None,
                next_slug: Some("tower-of-god-chapter-2".to_string()),
            }),
            genres: Ok(vec![Genre { name: "Romance".to_string(), slug: Some("romance".to_string()) }]),
            genre: Ok(GenreDetail { name: Some("Romance".to_string()), list: vec![manhwa_item("true-beauty", "True Beauty")] }),
            search: Ok(vec![manhwa_item("solo-leveling", "Solo Leveling")]),
        }
    }
}

#[async_trait]
impl ManhwaApi for MockManhwaApi {
    async fn new_manhwa(&self) -> Result<Vec<ManhwaItem>, ClientError> {
        self.lists.clone()
    }

    async fn popular(&self) -> Result<Vec<ManhwaItem>, ClientError> {
        self.lists.clone()
    }

    async fn top(&self) -> Result<Vec<ManhwaItem>, ClientError> {
        self.lists.clone()
    }

    async fn ongoing(&self) -> Result<Vec<ManhwaItem>, ClientError> {
        self.lists.clone()
    }

    async fn recommendations(&self) -> Result<Vec<ManhwaItem>, ClientError> {
        self.lists.clone()
    }

    async fn detail(&self, _manhwa_id: &str) -> Result<ManhwaDetail, ClientError> {
        self.detail.clone()
    }

    async fn chapter(&self, _chapter_id: &str) -> Result<ManhwaChapter, ClientError> {
        self.chapter.clone()
    }

    async fn genres(&self) -> Result<Vec<Genre>, ClientError> {
        self.genres.clone()
    }

    async fn genre(&self, _genre_id: &str) -> Result<GenreDetail, ClientError> {
        self.genre.clone()
    }

    async fn search(&self, _query: &str) -> Result<Vec<ManhwaItem>, ClientError> {
        self.search.clone()
    }
}

pub fn build_state(comic: Arc<MockComicApi>, manhwa: Arc<MockManhwaApi>) -> AppState {
    let config = Arc::new(AppConfig::default());
    // Nothing listens on the discard port, so proxied calls fail fast.
    let proxy = ProxyClient::new(reqwest::Client::new(), "http://127.0.0.1:9/comic/kiryuu".to_string());
    AppState::new(config, comic, manhwa, Arc::new(proxy))
}

pub fn build_test_app(comic: MockComicApi, manhwa: MockManhwaApi) -> Router {
    router(build_state(Arc::new(comic), Arc::new(manhwa)))
}

/// Serves `app` on an ephemeral local port and returns its base url.
pub fn spawn_upstream(app: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener).unwrap().serve(app.into_make_service());
    tokio::spawn(server);
    format!("http://{}", addr)
}

pub async fn get(app: Router, uri: &str) -> Response<axum::body::BoxBody> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response<axum::body::BoxBody>) -> String {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
