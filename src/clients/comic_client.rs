use async_trait::async_trait;
use log::info;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::clients::checked_slug;
use crate::models::comic::{ChapterResponse, Flagged, HomeResponse, ListResponse, MangaDetail, SearchResponse, TopWeeklyResponse};
use crate::models::errors::ClientError;

#[async_trait]
pub trait ComicApi: Send + Sync {
    async fn home(&self) -> Result<HomeResponse, ClientError>;
    async fn latest(&self) -> Result<ListResponse, ClientError>;
    async fn search(&self, query: &str) -> Result<SearchResponse, ClientError>;
    async fn manga(&self, slug: &str) -> Result<MangaDetail, ClientError>;
    async fn chapter(&self, slug: &str) -> Result<ChapterResponse, ClientError>;
    async fn popular(&self) -> Result<ListResponse, ClientError>;
    async fn recommendations(&self) -> Result<ListResponse, ClientError>;
    async fn top_weekly(&self) -> Result<TopWeeklyResponse, ClientError>;
}

pub struct ComicClient {
    client: reqwest::Client,
    base_url: String,
}

impl ComicClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn get<T>(&self, endpoint: &str) -> Result<T, ClientError>
        where
            T: DeserializeOwned + Flagged,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let result = self.client.get(&url)
            .send().await
            .map_err(|err| ClientError::Request(err.to_string()))?;

        let status = result.status();
        info!("GET {} {}", result.url(), status);
        let body = result.bytes().await
            .map_err(|err| ClientError::Request(err.to_string()))?;

        // Error statuses may still carry a `success: false` body.
        let json = match serde_json::from_slice::<T>(&body) {
            Ok(json) => json,
            Err(_) if !status.is_success() => {
                return Err(ClientError::Status { status: status.as_u16(), url });
            }
            Err(err) => return Err(ClientError::Decode(err.to_string())),
        };

        if !json.success() {
            return Err(ClientError::Unsuccessful(endpoint.to_string()));
        }
        if !status.is_success() {
            return Err(ClientError::Status { status: status.as_u16(), url });
        }
        Ok(json)
    }
}

/// Same reserved set as a browser's `encodeURIComponent`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-').remove(b'_').remove(b'.').remove(b'!').remove(b'~')
    .remove(b'*').remove(b'\'').remove(b'(').remove(b')');

pub fn search_path(query: &str) -> String {
    format!("search/{}", utf8_percent_encode(query, URI_COMPONENT))
}

#[async_trait]
impl ComicApi for ComicClient {
    async fn home(&self) -> Result<HomeResponse, ClientError> {
        self.get("home").await
    }

    async fn latest(&self) -> Result<ListResponse, ClientError> {
        self.get("latest").await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        self.get(&search_path(query)).await
    }

    async fn manga(&self, slug: &str) -> Result<MangaDetail, ClientError> {
        let slug = checked_slug(slug)?;
        self.get(&format!("manga/{}", slug)).await
    }

    async fn chapter(&self, slug: &str) -> Result<ChapterResponse, ClientError> {
        let slug = checked_slug(slug)?;
        self.get(&format!("chapter/{}", slug)).await
    }

    async fn popular(&self) -> Result<ListResponse, ClientError> {
        self.get("popular").await
    }

    async fn recommendations(&self) -> Result<ListResponse, ClientError> {
        self.get("recommendations").await
    }

    async fn top_weekly(&self) -> Result<TopWeeklyResponse, ClientError> {
        self.get("top-weekly").await
    }
}
