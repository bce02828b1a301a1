use crate::comic::grid::Card;
use crate::views::{attr, text};

pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMjAwIiBoZWlnaHQ9IjI1MCIgdmlld0JveD0iMCAwIDIwMCAyNTAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSIyMDAiIGhlaWdodD0iMjUwIiBmaWxsPSIjRjVGNUY1Ii8+CjxwYXRoIGQ9Ik04MCAxMDBIMTIwVjEzMEg4MFYxMDBaIiBmaWxsPSIjQ0VDRUNFIi8+CjxwYXRoIGQ9Ik02MCA3MEgxNDBWMTYwSDYwVjcwWiIgZmlsbD0iI0NFQ0VDRSIvPgo8L3N2Zz4K";

pub fn cover(src: Option<&str>, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" loading="lazy" onerror="this.src='{}'">"#,
        attr(src.unwrap_or(PLACEHOLDER_IMAGE)),
        attr(alt),
        PLACEHOLDER_IMAGE,
    )
}

/// A card without an `href` renders unlinked.
pub fn card(card: &Card, href: Option<&str>) -> String {
    let (open, close) = match href {
        Some(href) => (format!(r#"<a class="card" href="{}">"#, attr(href)), "</a>"),
        None => (r#"<div class="card">"#.to_string(), "</div>"),
    };
    format!(
        r#"{open}
<div class="card-image">{image}<div class="card-rating">⭐ {rating}</div></div>
<div class="card-content"><div class="card-title">{title}</div><div class="card-info"><span>{chapter}</span></div></div>
{close}"#,
        open = open,
        close = close,
        image = cover(card.image.as_deref(), &card.title),
        rating = text(&card.rating),
        title = text(&card.title),
        chapter = text(&card.chapter),
    )
}

/// Renders a grid, linking each card through `href`.
pub fn grid<F>(id: &str, cards: &[Card], href: F) -> String
    where
        F: Fn(&Card) -> Option<String>,
{
    let items: String = cards.iter().map(|c| card(c, href(c).as_deref())).collect();
    format!(r#"<div class="grid" id="{}">{}</div>"#, attr(id), items)
}

pub fn section(title: &str, more_href: Option<&str>, content: String) -> String {
    let more = more_href
        .map(|href| format!(r#"<a class="section-more" href="{}">Lihat Semua</a>"#, attr(href)))
        .unwrap_or_default();
    format!(
        r#"<section class="section"><div class="section-header"><h2>{}</h2>{}</div>{}</section>"#,
        text(title),
        more,
        content,
    )
}
