use serde_derive::Deserialize;

/// Query parameters understood by the comic section.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ComicQuery {
    pub search: Option<String>,
    pub detail: Option<String>,
    pub chapter: Option<String>,
    pub manga: Option<String>,
    pub slide: Option<String>,
}

impl ComicQuery {
    pub fn slide_index(&self) -> usize {
        self.slide.as_deref()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Popular,
    Latest,
    Recommendations,
    TopWeekly,
}

impl Listing {
    pub fn page_name(&self) -> &'static str {
        match self {
            Listing::Popular => "popular",
            Listing::Latest => "latest",
            Listing::Recommendations => "recommendations",
            Listing::TopWeekly => "top-weekly",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Listing::Popular => "Manhwa Populer",
            Listing::Latest => "Manhwa Terbaru",
            Listing::Recommendations => "Rekomendasi Manhwa",
            Listing::TopWeekly => "Top Mingguan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComicRoute {
    Home,
    Search { query: String },
    Detail { slug: String },
    Reader { chapter: String, manga: Option<String> },
    Listing(Listing),
}

impl ComicRoute {
    /// Picks the view for `/comic/<page>?<query>`. Order matters: a search
    /// wins over detail, detail over chapter, and so on down to home.
    pub fn resolve(page: Option<&str>, query: &ComicQuery) -> Self {
        let page = page
            .map(|p| p.trim_matches('/'))
            .map(|p| p.strip_suffix(".html").unwrap_or(p))
            .unwrap_or("");
        let param = |value: &Option<String>| value.as_deref().filter(|v| !v.is_empty()).map(str::to_string);

        if page == "search" || param(&query.search).is_some() {
            let query = param(&query.search).unwrap_or_default().trim().to_string();
            ComicRoute::Search { query }
        } else if page == "detail" || param(&query.detail).is_some() {
            ComicRoute::Detail { slug: param(&query.detail).unwrap_or_default() }
        } else if page == "chapter" || param(&query.chapter).is_some() {
            ComicRoute::Reader {
                chapter: param(&query.chapter).unwrap_or_default(),
                manga: param(&query.manga),
            }
        } else {
            match page {
                "popular" => ComicRoute::Listing(Listing::Popular),
                "latest" => ComicRoute::Listing(Listing::Latest),
                "recommendations" => ComicRoute::Listing(Listing::Recommendations),
                "top-weekly" => ComicRoute::Listing(Listing::TopWeekly),
                _ => ComicRoute::Home,
            }
        }
    }
}
