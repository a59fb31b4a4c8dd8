use async_trait::async_trait;
use bytes::Bytes;
use favicon_domain::FaviconError;
use std::time::Duration;

pub const ACCEPT_IMAGE: &str = "image/*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub accept: &'static str,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn image(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            accept: ACCEPT_IMAGE,
            timeout,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Plain GET. Status codes are reported, not interpreted; transport
    /// failures and timeouts are errors.
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FaviconError>;
}
