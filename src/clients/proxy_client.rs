use axum::http::{HeaderMap, HeaderValue, Request};
use axum::response::Response;
use hyper::Body;
use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use unicase::Ascii;

use crate::clients::checked_slug;
use crate::models::errors::ProxyError;

/// Forwards browser requests for raw comic JSON to the upstream API.
#[derive(Clone)]
pub struct ProxyClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn proxy_request(
        &self,
        endpoint: &str,
        req: Request<Body>,
    ) -> Result<Response<Body>, ProxyError> {
        let request = self.to_proxy_request(endpoint, req)?;
        let response = self.call_proxy_request(request).await?;

        self.response_to_reply(response).await
    }

    async fn response_to_reply(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<Body>, ProxyError> {
        let mut builder = Response::builder();
        for (k, v) in remove_hop_headers(response.headers()).iter() {
            builder = builder.header(k, v);
        }
        let status = response.status();
        let body = Body::wrap_stream(response.bytes_stream());
        builder
            .status(status)
            .body(body)
            .map_err(|err| ProxyError { message: err.to_string() })
    }

    fn to_proxy_request(
        &self,
        endpoint: &str,
        request: Request<Body>,
    ) -> Result<reqwest::Request, ProxyError> {
        let path = upstream_path(endpoint)
            .ok_or_else(|| ProxyError { message: format!("unknown endpoint '{}'", endpoint) })?;
        let url = match request.uri().query() {
            Some(query) => format!("{}/{}?{}", self.base_url, path, query),
            None => format!("{}/{}", self.base_url, path),
        };

        let mut headers = remove_hop_headers(request.headers());
        headers.remove("host");

        self.client
            .get(url)
            .headers(headers)
            .build()
            .map_err(|err| ProxyError { message: err.to_string() })
    }

    async fn call_proxy_request(&self, request: reqwest::Request) -> Result<reqwest::Response, ProxyError> {
        self.client
            .execute(request)
            .await
            .map_err(|err| ProxyError { message: err.to_string() })
    }
}

/// Maps `search/<q>`, `manga/<slug>`, `home`, ... onto the upstream path,
/// refusing anything outside the published endpoint set.
pub fn upstream_path(endpoint: &str) -> Option<String> {
    let segments: Vec<&str> = endpoint.trim_matches('/').split('/').collect();
    match segments.as_slice() {
        [single @ ("home" | "latest" | "popular" | "recommendations" | "top-weekly")] => {
            Some(single.to_string())
        }
        ["search", query] if is_search_term(query) => Some(format!("search/{}", query)),
        [kind @ ("manga" | "chapter"), slug] => {
            checked_slug(slug).ok().map(|slug| format!("{}/{}", kind, slug))
        }
        _ => None,
    }
}

/// A search segment must decode to real text, never to a dot-segment.
fn is_search_term(query: &str) -> bool {
    match percent_decode_str(query).decode_utf8() {
        Ok(decoded) => !(decoded.trim().is_empty() || decoded == "." || decoded == ".."),
        Err(_) => false,
    }
}

fn is_hop_header(header_name: &str) -> bool {
    static HOP_HEADERS: Lazy<Vec<Ascii<&'static str>>> = Lazy::new(|| {
        vec![
            Ascii::new("Connection"),
            Ascii::new("Keep-Alive"),
            Ascii::new("Proxy-Authenticate"),
            Ascii::new("Proxy-Authorization"),
            Ascii::new("Te"),
            Ascii::new("Trailers"),
            Ascii::new("Transfer-Encoding"),
            Ascii::new("Upgrade"),
        ]
    });

    HOP_HEADERS.iter().any(|h| h == &header_name)
}

fn remove_hop_headers(headers: &HeaderMap<HeaderValue>) -> HeaderMap<HeaderValue> {
    headers
        .iter()
        .filter_map(|(k, v)| {
            if is_hop_header(k.as_str()) {
                None
            } else {
                Some((k.clone(), v.clone()))
            }
        })
        .collect()
}
