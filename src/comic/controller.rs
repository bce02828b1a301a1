use std::sync::Arc;

use log::{error, warn};

use crate::clients::comic_client::ComicApi;
use crate::comic::grid::{cards, Card, LATEST_LIMIT, POPULAR_LIMIT, TOP_RATED_LIMIT};
use crate::comic::reader::ChapterNavigator;
use crate::comic::route::{ComicRoute, Listing};
use crate::comic::slider::{Slider, MAX_SLIDES};
use crate::models::comic::{CatalogItem, ChapterRef, GenreTag};
use crate::models::errors::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub slides: Vec<Card>,
    pub slider: Slider,
    pub latest: Vec<Card>,
    pub popular: Vec<Card>,
    pub top_rated: Vec<Card>,
}

/// Search results and the four catalog listings share one grid page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub heading: String,
    pub info: String,
    pub cards: Vec<Card>,
    pub query: Option<String>,
    pub listing: Option<Listing>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub slug: String,
    pub title: String,
    pub image: Option<String>,
    pub rating: String,
    pub meta: Vec<String>,
    pub genres: Vec<String>,
    pub synopsis: String,
    pub followed_by: Option<String>,
    pub chapters: Vec<ChapterRef>,
}

impl DetailView {
    pub fn first_chapter(&self) -> Option<&ChapterRef> {
        self.chapters.first()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReaderView {
    pub slug: String,
    pub title: String,
    pub images: Vec<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub manga: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComicView {
    Home(HomeView),
    Listing(ListingView),
    Detail(DetailView),
    Reader(ReaderView),
    Error(String),
}

impl ComicView {
    pub fn is_error(&self) -> bool {
        matches!(self, ComicView::Error(_))
    }
}

struct ListingMessages {
    loaded: &'static str,
    failed: &'static str,
    errored: &'static str,
}

fn listing_messages(listing: Listing) -> ListingMessages {
    match listing {
        Listing::Popular => ListingMessages {
            loaded: "manhwa populer",
            failed: "Gagal memuat manhwa populer",
            errored: "Terjadi kesalahan saat memuat manhwa populer",
        },
        Listing::Latest => ListingMessages {
            loaded: "manhwa terbaru",
            failed: "Gagal memuat manhwa terbaru",
            errored: "Terjadi kesalahan saat memuat manhwa terbaru",
        },
        Listing::Recommendations => ListingMessages {
            loaded: "rekomendasi",
            failed: "Gagal memuat rekomendasi",
            errored: "Terjadi kesalahan saat memuat rekomendasi",
        },
        Listing::TopWeekly => ListingMessages {
            loaded: "top mingguan",
            failed: "Gagal memuat top mingguan",
            errored: "Terjadi kesalahan saat memuat top mingguan",
        },
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Turns a comic route into a fully loaded view.
pub struct ComicController {
    api: Arc<dyn ComicApi>,
}

impl ComicController {
    pub fn new(api: Arc<dyn ComicApi>) -> Self {
        Self { api }
    }

    pub async fn load(&self, route: &ComicRoute, slide: usize) -> ComicView {
        match route {
            ComicRoute::Home => self.load_home(slide).await,
            ComicRoute::Search { query } => ComicView::Listing(self.search(query).await),
            ComicRoute::Listing(listing) => ComicView::Listing(self.load_listing(*listing).await),
            ComicRoute::Detail { slug } => self.load_detail(slug).await,
            ComicRoute::Reader { chapter, manga } => self.load_chapter(chapter, manga.as_deref()).await,
        }
    }

    async fn load_home(&self, slide: usize) -> ComicView {
        let home = match self.api.home().await {
            Ok(home) => home,
            Err(err) => {
                error!("Error loading home page: {}", err);
                return ComicView::Error(match err {
                    ClientError::Unsuccessful(_) => "Gagal memuat data home.",
                    _ => "Gagal memuat data. Silakan coba lagi.",
                }.to_string());
            }
        };

        let latest = match self.api.latest().await {
            Ok(latest) => latest,
            Err(err) => {
                error!("Error loading latest for home page: {}", err);
                return ComicView::Error(match err {
                    ClientError::Unsuccessful(_) => "Gagal memuat data terbaru.",
                    _ => "Gagal memuat data. Silakan coba lagi.",
                }.to_string());
            }
        };

        let slides = cards(&home.trending, MAX_SLIDES);
        let slider = Slider::at(slides.len(), slide);
        ComicView::Home(HomeView {
            slider,
            slides,
            latest: latest.results.iter().take(LATEST_LIMIT).map(Card::from_latest).collect(),
            popular: cards(&home.popular_manhwa, POPULAR_LIMIT),
            top_rated: cards(&home.trending, TOP_RATED_LIMIT),
        })
    }

    async fn search(&self, query: &str) -> ListingView {
        let mut view = ListingView {
            heading: "Hasil Pencarian".to_string(),
            info: String::new(),
            cards: Vec::new(),
            query: Some(query.to_string()),
            listing: None,
        };
        if query.is_empty() {
            return view;
        }

        match self.api.search(query).await {
            Ok(data) => {
                view.info = format!("Menampilkan {} hasil untuk \"{}\"", data.series_list.len(), query);
                view.cards = all_cards(&data.series_list);
            }
            Err(ClientError::Unsuccessful(_)) => {
                view.info = format!("Tidak ada hasil untuk \"{}\"", query);
            }
            Err(err) => {
                error!("Error performing search: {}", err);
                view.info = format!("Terjadi kesalahan saat mencari \"{}\"", query);
            }
        }
        view
    }

    async fn load_listing(&self, listing: Listing) -> ListingView {
        let messages = listing_messages(listing);
        let result = match listing {
            Listing::Popular => self.api.popular().await.map(|data| data.results),
            Listing::Latest => self.api.latest().await.map(|data| data.results),
            Listing::Recommendations => self.api.recommendations().await.map(|data| data.results),
            Listing::TopWeekly => self.api.top_weekly().await.map(|data| data.recommendations),
        };

        let (info, cards) = match result {
            Ok(items) => (format!("Menampilkan {} {}", items.len(), messages.loaded), all_cards(&items)),
            Err(ClientError::Unsuccessful(_)) => (messages.failed.to_string(), Vec::new()),
            Err(err) => {
                error!("Error loading {} page: {}", listing.page_name(), err);
                (messages.errored.to_string(), Vec::new())
            }
        };

        ListingView {
            heading: listing.heading().to_string(),
            info,
            cards,
            query: None,
            listing: Some(listing),
        }
    }

    async fn load_detail(&self, slug: &str) -> ComicView {
        let data = match self.api.manga(slug).await {
            Ok(data) => data,
            Err(err) => {
                error!("Error loading manhwa detail '{}': {}", slug, err);
                return ComicView::Error("Gagal memuat detail manhwa.".to_string());
            }
        };

        let meta = [data.status, data.kind, data.released]
            .into_iter()
            .filter_map(non_empty)
            .collect();

        ComicView::Detail(DetailView {
            slug: slug.to_string(),
            title: data.title,
            image: non_empty(data.image_src),
            rating: non_empty(data.rating).unwrap_or_else(|| "-".to_string()),
            meta,
            genres: data.genres.into_iter().map(|GenreTag { name }| name).collect(),
            synopsis: data.synopsis,
            followed_by: non_empty(data.followed_by),
            chapters: data.chapters,
        })
    }

    async fn load_chapter(&self, slug: &str, manga: Option<&str>) -> ComicView {
        let data = match self.api.chapter(slug).await {
            Ok(data) => data,
            Err(err) => {
                error!("Error loading chapter '{}': {}", slug, err);
                return ComicView::Error("Gagal memuat chapter.".to_string());
            }
        };

        let mut previous = non_empty(data.prev_slug);
        let mut next = non_empty(data.next_slug);

        if let Some(manga) = manga {
            if previous.is_none() || next.is_none() {
                match self.api.manga(manga).await {
                    Ok(detail) => {
                        let navigator = ChapterNavigator::new(detail.chapters, slug);
                        previous = previous.or_else(|| navigator.previous().map(|c| c.slug.clone()));
                        next = next.or_else(|| navigator.next().map(|c| c.slug.clone()));
                    }
                    Err(err) => warn!("Chapter list for '{}' unavailable: {}", manga, err),
                }
            }
        }

        ComicView::Reader(ReaderView {
            slug: slug.to_string(),
            title: data.title,
            images: data.images,
            previous,
            next,
            manga: manga.map(str::to_string),
        })
    }
}

fn all_cards(items: &[CatalogItem]) -> Vec<Card> {
    items.iter().map(Card::from_item).collect()
}
