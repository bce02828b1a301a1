use crate::comic::controller::{ComicView, DetailView, HomeView, ListingView, ReaderView};
use crate::comic::grid::Card;
use crate::comic::slider::AUTOPLAY_INTERVAL;
use crate::views::components::{cover, grid, section};
use crate::views::error::{error_state, ERROR_TITLE};
use crate::views::{attr, query_value, text, Page};

const CURRENT_PAGE: &str = "comic";

pub fn detail_href(slug: &str) -> String {
    format!("/comic?detail={}", query_value(slug))
}

pub fn chapter_href(chapter: &str, manga: Option<&str>) -> String {
    match manga {
        Some(manga) => format!("/comic?chapter={}&manga={}", query_value(chapter), query_value(manga)),
        None => format!("/comic?chapter={}", query_value(chapter)),
    }
}

fn card_href(card: &Card) -> Option<String> {
    if card.slug.is_empty() {
        None
    } else {
        Some(detail_href(&card.slug))
    }
}

/// Advances the slider every `data-interval` ms; a manual move restarts the timer.
const SLIDER_SCRIPT: &str = r#"<script>
(function () {
  var slider = document.querySelector('.slider');
  var container = document.getElementById('sliderContainer');
  if (!slider || !container) return;
  var total = container.children.length;
  var index = parseInt(slider.dataset.index, 10) || 0;
  var interval = parseInt(slider.dataset.interval, 10);
  var timer = null;
  function navigate(direction) {
    if (total === 0) return;
    index = (index + direction + total) % total;
    container.style.transform = 'translateX(-' + (index * 100) + '%)';
  }
  function start() {
    clearInterval(timer);
    timer = setInterval(function () { navigate(1); }, interval);
  }
  [['sliderPrev', -1], ['sliderNext', 1]].forEach(function (control) {
    var button = document.getElementById(control[0]);
    if (!button) return;
    button.addEventListener('click', function (event) {
      event.preventDefault();
      navigate(control[1]);
      start();
    });
  });
  start();
})();
</script>"#;

pub fn page(view: &ComicView) -> Page {
    let description = "Baca komik, manga, dan manhwa subtitle Indonesia";
    match view {
        ComicView::Home(home) => Page::new("Comic", description, CURRENT_PAGE, home_body(home)),
        ComicView::Listing(listing) => Page::new(listing.heading.clone(), description, CURRENT_PAGE, listing_body(listing)),
        ComicView::Detail(detail) => Page::new(
            detail.title.clone(),
            format!("Baca manhwa {} subtitle Indonesia", detail.title),
            CURRENT_PAGE,
            detail_body(detail),
        ),
        ComicView::Reader(reader) => Page::new(
            reader.title.clone(),
            format!("Baca chapter {} subtitle Indonesia", reader.title),
            CURRENT_PAGE,
            reader_body(reader),
        ),
        ComicView::Error(message) => Page::new(ERROR_TITLE, description, CURRENT_PAGE, error_state(message)),
    }
}

fn search_form(query: &str) -> String {
    format!(
        r#"<form class="search-form" action="/comic" method="get"><input class="search-input" type="search" name="search" value="{}" placeholder="Cari manhwa..."></form>"#,
        attr(query),
    )
}

fn home_body(home: &HomeView) -> String {
    let slides: String = home.slides.iter()
        .map(|slide| format!(
            r#"{open}{image}<div class="slide-content"><div class="slide-title">{title}</div><div class="slide-info"><span>⭐ {rating}</span><span>{chapter}</span></div></div>{close}"#,
            open = match card_href(slide) {
                Some(href) => format!(r#"<a class="slide" href="{}">"#, attr(&href)),
                None => r#"<div class="slide">"#.to_string(),
            },
            close = if slide.slug.is_empty() { "</div>" } else { "</a>" },
            image = cover(slide.image.as_deref(), &slide.title),
            title = text(&slide.title),
            rating = text(&slide.rating),
            chapter = text(&slide.chapter),
        ))
        .collect();

    let controls = if home.slider.is_empty() {
        String::new()
    } else {
        format!(
            r#"<a class="slider-btn" id="sliderPrev" href="/comic?slide={}">‹</a><a class="slider-btn" id="sliderNext" href="/comic?slide={}">›</a>{}"#,
            home.slider.previous_index(),
            home.slider.next_index(),
            SLIDER_SCRIPT,
        )
    };

    let slider = format!(
        r#"<div class="slider" data-interval="{interval}" data-index="{index}"><div class="slider-container" id="sliderContainer" style="transform: {transform}">{slides}</div>{controls}</div>"#,
        interval = AUTOPLAY_INTERVAL.as_millis(),
        index = home.slider.index(),
        transform = home.slider.transform(),
        slides = slides,
        controls = controls,
    );

    [
        search_form(""),
        slider,
        section("Update Terbaru", Some("/comic/latest"), grid("latestGrid", &home.latest, card_href)),
        section("Manhwa Populer", Some("/comic/popular"), grid("popularGrid", &home.popular, card_href)),
        section("Rating Tertinggi", Some("/comic/top-weekly"), grid("topRatedGrid", &home.top_rated, card_href)),
    ].concat()
}

fn listing_body(listing: &ListingView) -> String {
    format!(
        r#"{form}<div id="searchPage"><h1>{heading}</h1><p class="search-info" id="searchInfo">{info}</p>{grid}</div>"#,
        form = search_form(listing.query.as_deref().unwrap_or("")),
        heading = text(&listing.heading),
        info = text(&listing.info),
        grid = grid("searchGrid", &listing.cards, card_href),
    )
}

fn detail_body(detail: &DetailView) -> String {
    let meta: String = detail.meta.iter()
        .map(|m| format!("<span>{}</span>", text(m)))
        .collect();
    let genres: String = detail.genres.iter()
        .map(|g| format!(r#"<span class="genre-tag">{}</span>"#, text(g)))
        .collect();
    let chapters: String = detail.chapters.iter()
        .filter(|c| !c.slug.is_empty())
        .map(|c| format!(
            r#"<a class="chapter-item" href="{}"><span>{}</span><span class="chapter-date">{}</span></a>"#,
            attr(&chapter_href(&c.slug, Some(&detail.slug))),
            text(&c.title),
            text(&c.date),
        ))
        .collect();
    let read_first = match detail.first_chapter().filter(|c| !c.slug.is_empty()) {
        Some(first) => format!(
            r#"<a class="btn btn-primary" id="readFirstChapter" href="{}">Baca Chapter Pertama</a>"#,
            attr(&chapter_href(&first.slug, Some(&detail.slug))),
        ),
        None => r#"<button class="btn btn-primary" id="readFirstChapter" disabled>Baca Chapter Pertama</button>"#.to_string(),
    };
    let followed = detail.followed_by.as_deref()
        .map(|f| format!(r#"<div class="detail-meta"><span>{}</span></div>"#, text(f)))
        .unwrap_or_default();

    format!(
        r#"<div class="detail-container" id="detailPage">
<div class="detail-header">
<div class="detail-cover">{cover}</div>
<div class="detail-info">
<h1 class="detail-title">{title}</h1>
<div class="detail-meta"><span class="detail-rating">⭐ {rating}</span>{meta}</div>
<div class="detail-genres">{genres}</div>
<div class="detail-synopsis"><p>{synopsis}</p></div>
<div class="detail-actions">{read_first}<button class="btn btn-secondary" id="followManhwa">Ikuti</button></div>
{followed}
</div>
</div>
<div class="chapters-list"><div class="chapters-header">Daftar Chapter</div>{chapters}</div>
</div>"#,
        cover = cover(detail.image.as_deref(), &detail.title),
        title = text(&detail.title),
        rating = text(&detail.rating),
        meta = meta,
        genres = genres,
        synopsis = text(&detail.synopsis),
        read_first = read_first,
        followed = followed,
        chapters = chapters,
    )
}

fn nav_button(id: &str, label: &str, target: Option<&str>, manga: Option<&str>) -> String {
    match target {
        Some(slug) => format!(
            r#"<a class="btn btn-secondary" id="{}" href="{}">{}</a>"#,
            id,
            attr(&chapter_href(slug, manga)),
            label,
        ),
        None => format!(r#"<button class="btn btn-secondary" id="{}" disabled>{}</button>"#, id, label),
    }
}

fn reader_body(reader: &ReaderView) -> String {
    let images: String = reader.images.iter()
        .map(|src| format!(r#"<img class="reader-image" src="{}" alt="{}" loading="lazy">"#, attr(src), attr(&reader.title)))
        .collect();
    let nav = format!(
        r#"<div class="reader-nav">{}{}</div>"#,
        nav_button("prevChapter", "Sebelumnya", reader.previous.as_deref(), reader.manga.as_deref()),
        nav_button("nextChapter", "Selanjutnya", reader.next.as_deref(), reader.manga.as_deref()),
    );

    format!(
        r#"<div id="readerPage"><h1 id="readerTitle">{title}</h1>{nav}<div id="readerContent">{images}</div>{nav}</div>"#,
        title = text(&reader.title),
        nav = nav,
        images = images,
    )
}
