use crate::comic::grid::Card;
use crate::models::manhwa::{Genre, GenreDetail, ManhwaChapter, ManhwaDetail, ManhwaItem};
use crate::views::components::{cover, grid, section};
use crate::views::{attr, query_value, text, Page};

const CURRENT_PAGE: &str = "manhwa";

/// The four lists shown on the manhwa landing page.
#[derive(Debug, Clone, Default)]
pub struct ManhwaHome {
    pub recommendations: Vec<ManhwaItem>,
    pub new_manhwa: Vec<ManhwaItem>,
    pub popular: Vec<ManhwaItem>,
    pub top: Vec<ManhwaItem>,
}

pub fn card(item: &ManhwaItem) -> Card {
    let non_empty = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);
    Card {
        title: non_empty(&item.title).unwrap_or_else(|| "Untitled".to_string()),
        image: item.cover().map(str::to_string),
        rating: non_empty(&item.rating).unwrap_or_else(|| "-".to_string()),
        chapter: non_empty(&item.latest_chapter).or_else(|| non_empty(&item.chapter)).unwrap_or_default(),
        slug: item.key().unwrap_or_default().to_string(),
    }
}

fn detail_href(card: &Card) -> Option<String> {
    if card.slug.is_empty() {
        None
    } else {
        Some(format!("/manhwa/detail/{}", query_value(&card.slug)))
    }
}

fn genre_tag(genre: &Genre) -> String {
    match genre.slug.as_deref().filter(|slug| !slug.is_empty()) {
        Some(slug) => format!(r#"<a class="genre-tag" href="/manhwa/genre/{}">{}</a>"#, attr(&query_value(slug)), text(&genre.name)),
        None => format!(r#"<span class="genre-tag">{}</span>"#, text(&genre.name)),
    }
}

fn item_grid(id: &str, items: &[ManhwaItem]) -> String {
    let cards: Vec<Card> = items.iter().map(card).collect();
    grid(id, &cards, detail_href)
}

fn search_form(query: &str) -> String {
    format!(
        r#"<form class="search-form" action="/manhwa/search" method="get"><input class="search-input" type="search" name="q" value="{}" placeholder="Cari manhwa..."></form>"#,
        attr(query),
    )
}

pub fn home(lists: &ManhwaHome) -> Page {
    let body = [
        search_form(""),
        section("Rekomendasi", None, item_grid("recommendationGrid", &lists.recommendations)),
        section("Manhwa Terbaru", None, item_grid("newGrid", &lists.new_manhwa)),
        section("Manhwa Populer", None, item_grid("popularGrid", &lists.popular)),
        section("Top Manhwa", Some("/manhwa/genres"), item_grid("topGrid", &lists.top)),
    ].concat();
    Page::new("Manhwa", "Baca manhwa, manhua, dan manga subtitle Indonesia", CURRENT_PAGE, body)
}

pub fn ongoing(items: &[ManhwaItem]) -> Page {
    let body = format!("<h1>Manhwa Ongoing</h1>{}", item_grid("ongoingGrid", items));
    Page::new("Manhwa Ongoing", "Daftar manhwa yang sedang berjalan", CURRENT_PAGE, body)
}

pub fn detail(manhwa_id: &str, manhwa: &ManhwaDetail) -> Page {
    let title = manhwa.title.clone().unwrap_or_else(|| "Detail Manhwa".to_string());
    let genres: String = manhwa.genres.iter().map(genre_tag).collect();
    let chapters: String = manhwa.chapters.iter()
        .filter_map(|c| c.key().map(|key| (key, c)))
        .map(|(key, c)| format!(
            r#"<a class="chapter-item" href="/manhwa/chapter/{}"><span>{}</span><span class="chapter-date">{}</span></a>"#,
            attr(&query_value(key)),
            text(&c.title),
            text(c.date.as_deref().unwrap_or("")),
        ))
        .collect();
    let meta: String = [&manhwa.status, &manhwa.author]
        .into_iter()
        .flatten()
        .map(|m| format!("<span>{}</span>", text(m)))
        .collect();

    let body = format!(
        r#"<div class="detail-container" data-id="{id}">
<div class="detail-header">
<div class="detail-cover">{cover}</div>
<div class="detail-info">
<h1 class="detail-title">{title}</h1>
<div class="detail-meta"><span class="detail-rating">⭐ {rating}</span>{meta}</div>
<div class="detail-genres">{genres}</div>
<div class="detail-synopsis"><p>{synopsis}</p></div>
</div>
</div>
<div class="chapters-list"><div class="chapters-header">Daftar Chapter</div>{chapters}</div>
</div>"#,
        id = attr(manhwa_id),
        cover = cover(manhwa.cover(), &title),
        title = text(&title),
        rating = text(manhwa.rating.as_deref().unwrap_or("-")),
        meta = meta,
        genres = genres,
        synopsis = text(manhwa.synopsis.as_deref().unwrap_or("")),
        chapters = chapters,
    );
    let description = format!("Baca manhwa {} subtitle Indonesia", manhwa.title.as_deref().unwrap_or(""));
    Page::new(title, description, CURRENT_PAGE, body)
}

pub fn reader(chapter: &ManhwaChapter) -> Page {
    let title = chapter.title.clone().unwrap_or_else(|| "Baca Chapter".to_string());
    let images: String = chapter.images.iter()
        .map(|src| format!(r#"<img class="reader-image" src="{}" alt="{}" loading="lazy">"#, attr(src), attr(&title)))
        .collect();
    let button = |id: &str, label: &str, target: &Option<String>| match target.as_deref().filter(|s| !s.is_empty()) {
        Some(slug) => format!(r#"<a class="btn btn-secondary" id="{}" href="/manhwa/chapter/{}">{}</a>"#, id, attr(&query_value(slug)), label),
        None => format!(r#"<button class="btn btn-secondary" id="{}" disabled>{}</button>"#, id, label),
    };
    let nav = format!(
        r#"<div class="reader-nav">{}{}</div>"#,
        button("prevChapter", "Sebelumnya", &chapter.prev_slug),
        button("nextChapter", "Selanjutnya", &chapter.next_slug),
    );
    let body = format!(
        r#"<div id="readerPage"><h1 id="readerTitle">{}</h1>{nav}<div id="readerContent">{}</div>{nav}</div>"#,
        text(&title),
        images,
        nav = nav,
    );
    let description = format!("Baca chapter {} subtitle Indonesia", chapter.title.as_deref().unwrap_or(""));
    Page::new(title, description, CURRENT_PAGE, body)
}

pub fn search(query: &str, results: &[ManhwaItem]) -> Page {
    let info = if query.is_empty() {
        String::new()
    } else if results.is_empty() {
        format!(r#"<p class="search-info">Tidak ada hasil untuk "{}"</p>"#, text(query))
    } else {
        format!(r#"<p class="search-info">Menampilkan {} hasil untuk "{}"</p>"#, results.len(), text(query))
    };
    let body = format!(
        r#"{}<h1>Hasil Pencarian: "{}"</h1>{}{}"#,
        search_form(query),
        text(query),
        info,
        item_grid("searchGrid", results),
    );
    Page::new(format!("Pencarian: {}", query), format!("Hasil pencarian untuk {}", query), CURRENT_PAGE, body)
}

pub fn genres(genres: &[Genre]) -> Page {
    let items: String = genres.iter().map(genre_tag).collect();
    let body = format!(r#"<h1>Genre Manhwa</h1><div class="genre-list">{}</div>"#, items);
    Page::new("Genre Manhwa", "Jelajahi manhwa berdasarkan genre", CURRENT_PAGE, body)
}

pub fn genre_detail(genre_id: &str, genre: &GenreDetail) -> Page {
    let name = genre.name.clone().unwrap_or_else(|| genre_id.to_string());
    let body = format!(
        r#"<h1>Genre: {}</h1>{}"#,
        text(&name),
        item_grid("genreGrid", &genre.list),
    );
    let description = format!("Daftar manhwa dengan genre {}", genre.name.as_deref().unwrap_or(""));
    Page::new(format!("Genre: {}", name), description, CURRENT_PAGE, body)
}
