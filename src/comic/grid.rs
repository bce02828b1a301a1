use crate::models::comic::CatalogItem;

pub const LATEST_LIMIT: usize = 12;
pub const POPULAR_LIMIT: usize = 8;
pub const TOP_RATED_LIMIT: usize = 8;

/// What a grid card shows for one catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub image: Option<String>,
    pub rating: String,
    pub chapter: String,
    pub slug: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Card {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            title: non_empty(&item.title).unwrap_or("Untitled").to_string(),
            image: non_empty(&item.image_src).or(non_empty(&item.image)).map(str::to_string),
            rating: non_empty(&item.rating).unwrap_or("-").to_string(),
            chapter: non_empty(&item.latest_chapter)
                .or(non_empty(&item.chapter))
                .unwrap_or("")
                .to_string(),
            slug: item.slug.clone(),
        }
    }

    /// Card for the home page "latest" grid, which reads `chapter` only.
    pub fn from_latest(item: &CatalogItem) -> Self {
        Self {
            image: non_empty(&item.image_src).map(str::to_string),
            chapter: non_empty(&item.chapter).unwrap_or("No chapters").to_string(),
            ..Self::from_item(item)
        }
    }
}

pub fn cards(items: &[CatalogItem], limit: usize) -> Vec<Card> {
    items.iter().take(limit).map(Card::from_item).collect()
}
