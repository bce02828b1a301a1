use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use axum::http::StatusCode;

/// Failure of a call to one of the upstream catalog APIs.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Transport failure: connect, timeout, TLS.
    Request(String),
    /// Upstream answered with a non-2xx status.
    Status { status: u16, url: String },
    /// Body was not the JSON we expected.
    Decode(String),
    /// Upstream answered `"success": false`.
    Unsuccessful(String),
    InvalidSlug(String),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Request(message) => write!(f, "request failed: {}", message),
            ClientError::Status { status, url } => write!(f, "{}, {}", status, url),
            ClientError::Decode(message) => write!(f, "invalid response body: {}", message),
            ClientError::Unsuccessful(endpoint) => write!(f, "{} reported success=false", endpoint),
            ClientError::InvalidSlug(slug) => write!(f, "invalid slug '{}'", slug),
        }
    }
}

impl Error for ClientError {}

#[derive(Debug, Clone)]
pub struct ProxyError {
    pub message: String,
}

impl Display for ProxyError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ProxyError {}

/// A failed page render, shown to the visitor as the error page.
#[derive(Debug, Clone)]
pub struct PageError {
    pub message: String,
    pub code: StatusCode,
}

impl PageError {
    pub fn new<S: AsRef<str>>(message: S, code: StatusCode) -> Self {
        Self {
            message: message.as_ref().to_string(),
            code,
        }
    }

    pub fn internal<S: AsRef<str>>(message: S) -> Self {
        Self::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn not_found() -> Self {
        Self::new("Halaman tidak ditemukan", StatusCode::NOT_FOUND)
    }
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({} - {})", self.code.as_str(), self.message)
    }
}

impl Error for PageError {}
