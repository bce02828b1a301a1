use async_trait::async_trait;
use log::info;
use percent_encoding::utf8_percent_encode;
use serde::de::DeserializeOwned;

use crate::clients::checked_slug;
use crate::clients::comic_client::URI_COMPONENT;
use crate::models::errors::ClientError;
use crate::models::manhwa::{Envelope, Genre, GenreDetail, ManhwaChapter, ManhwaDetail, ManhwaItem};

#[async_trait]
pub trait ManhwaApi: Send + Sync {
    async fn new_manhwa(&self) -> Result<Vec<ManhwaItem>, ClientError>;
    async fn popular(&self) -> Result<Vec<ManhwaItem>, ClientError>;
    async fn top(&self) -> Result<Vec<ManhwaItem>, ClientError>;
    async fn ongoing(&self) -> Result<Vec<ManhwaItem>, ClientError>;
    async fn recommendations(&self) -> Result<Vec<ManhwaItem>, ClientError>;
    async fn detail(&self, manhwa_id: &str) -> Result<ManhwaDetail, ClientError>;
    async fn chapter(&self, chapter_id: &str) -> Result<ManhwaChapter, ClientError>;
    async fn genres(&self) -> Result<Vec<Genre>, ClientError>;
    async fn genre(&self, genre_id: &str) -> Result<GenreDetail, ClientError>;
    async fn search(&self, query: &str) -> Result<Vec<ManhwaItem>, ClientError>;
}

pub struct ManhwaClient {
    client: reqwest::Client,
    base_url: String,
}

impl ManhwaClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url: base_url.trim_end_matches('/').to_string() }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let result = self.client.get(&url)
            .send().await
            .map_err(|err| ClientError::Request(err.to_string()))?;

        info!("GET {} {}", result.url(), result.status());
        if !result.status().is_success() {
            return Err(ClientError::Status { status: result.status().as_u16(), url });
        }

        let json = result.json::<Envelope<T>>().await
            .map_err(|err| ClientError::Decode(err.to_string()))?;

        json.data.ok_or_else(|| ClientError::Unsuccessful(endpoint.to_string()))
    }
}

#[async_trait]
impl ManhwaApi for ManhwaClient {
    async fn new_manhwa(&self) -> Result<Vec<ManhwaItem>, ClientError> {
        self.get("/manhwa-new").await
    }

    async fn popular(&self) -> Result<Vec<ManhwaItem>, ClientError> {
        self.get("/manhwa-popular").await
    }

    async fn top(&self) -> Result<Vec<ManhwaItem>, ClientError> {
        self.get("/manhwa-top").await
    }

    async fn ongoing(&self) -> Result<Vec<ManhwaItem>, ClientError> {
        self.get("/manhwa-ongoing").await
    }

    async fn recommendations(&self) -> Result<Vec<ManhwaItem>, ClientError> {
        self.get("/manhwa-recommendation").await
    }

    async fn detail(&self, manhwa_id: &str) -> Result<ManhwaDetail, ClientError> {
        let manhwa_id = checked_slug(manhwa_id)?;
        self.get(&format!("/manhwa-detail/{}", manhwa_id)).await
    }

    async fn chapter(&self, chapter_id: &str) -> Result<ManhwaChapter, ClientError> {
        let chapter_id = checked_slug(chapter_id)?;
        self.get(&format!("/chapter/{}", chapter_id)).await
    }

    async fn genres(&self) -> Result<Vec<Genre>, ClientError> {
        self.get("/genres").await
    }

    async fn genre(&self, genre_id: &str) -> Result<GenreDetail, ClientError> {
        let genre_id = checked_slug(genre_id)?;
        self.get(&format!("/genre/{}", genre_id)).await
    }

    async fn search(&self, query: &str) -> Result<Vec<ManhwaItem>, ClientError> {
        self.get(&format!("/search/{}", utf8_percent_encode(query, URI_COMPONENT))).await
    }
}
