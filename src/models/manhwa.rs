use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::de::{null_as_empty, string_or_number};

/// Every manhwa endpoint wraps its payload in `{ "data": ... }`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_src: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub latest_chapter: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub rating: Option<String>,
}

impl ManhwaItem {
    pub fn key(&self) -> Option<&str> {
        self.slug.as_deref().or(self.id.as_deref())
    }

    pub fn cover(&self) -> Option<&str> {
        self.image_src.as_deref()
            .or(self.image.as_deref())
            .or(self.thumbnail.as_deref())
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Genre {
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GenreRepr {
    Name(String),
    Full {
        #[serde(default)]
        name: String,
        #[serde(default)]
        slug: Option<String>,
        #[serde(default)]
        id: Option<Value>,
    },
}

impl<'de> serde::Deserialize<'de> for Genre {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        let repr = <GenreRepr as serde::Deserialize>::deserialize(deserializer)?;
        Ok(match repr {
            GenreRepr::Name(name) => Genre { name, slug: None },
            GenreRepr::Full { name, slug, id } => {
                let slug = slug.or_else(|| match id {
                    Some(Value::String(s)) => Some(s),
                    Some(Value::Number(n)) => Some(n.to_string()),
                    _ => None,
                });
                Genre { name, slug }
            }
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ManhwaChapterRef {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl ManhwaChapterRef {
    pub fn key(&self) -> Option<&str> {
        self.slug.as_deref().or(self.id.as_deref())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_src: Option<String>,
    #[serde(default, alias = "description")]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chapters: Vec<ManhwaChapterRef>,
}

impl ManhwaDetail {
    pub fn cover(&self) -> Option<&str> {
        self.image_src.as_deref().or(self.image.as_deref())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaChapter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    #[serde(default, alias = "prevChapter")]
    pub prev_slug: Option<String>,
    #[serde(default, alias = "nextChapter")]
    pub next_slug: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GenreDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "manhwa", alias = "results", deserialize_with = "null_as_empty")]
    pub list: Vec<ManhwaItem>,
}
