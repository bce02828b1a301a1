use serde_derive::{Deserialize, Serialize};

use crate::models::de::{null_as_empty, string_or_number};

/// Entry of any catalog listing: home, latest, popular, search, ...
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_src: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub rating: Option<String>,
    #[serde(default)]
    pub latest_chapter: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub slug: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub trending: Vec<CatalogItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub popular_manhwa: Vec<CatalogItem>,
}

/// Shape of `latest`, `popular` and `recommendations`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<CatalogItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub series_list: Vec<CatalogItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TopWeeklyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recommendations: Vec<CatalogItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenreTag {
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ChapterRef {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MangaDetail {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_src: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub rating: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<GenreTag>,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub followed_by: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chapters: Vec<ChapterRef>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChapterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub prev_slug: Option<String>,
    #[serde(default)]
    pub next_slug: Option<String>,
}

/// Responses that carry the upstream `success` flag.
pub trait Flagged {
    fn success(&self) -> bool;
}

macro_rules! flagged {
    ($($ty:ty),*) => {
        $(impl Flagged for $ty {
            fn success(&self) -> bool { self.success }
        })*
    };
}

flagged!(HomeResponse, ListResponse, SearchResponse, TopWeeklyResponse, MangaDetail, ChapterResponse);
