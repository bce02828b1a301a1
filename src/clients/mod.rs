use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::errors::ClientError;

pub mod comic_client;
pub mod manhwa_client;
pub mod proxy_client;

/// Path segments taken from visitor URLs before they are spliced into
/// upstream paths.
pub fn checked_slug(slug: &str) -> Result<&str, ClientError> {
    static SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").unwrap());

    if SLUG.is_match(slug) && slug != "." && slug != ".." {
        Ok(slug)
    } else {
        Err(ClientError::InvalidSlug(slug.to_string()))
    }
}

pub fn http_client(timeout: std::time::Duration, user_agent: &str) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}
