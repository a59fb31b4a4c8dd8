//! HTTPS transport for icon fetches.
//!
//! One pooled client per fetcher. The client-wide timeout bounds the whole
//! resource transfer. Each request's own timeout is an idle timeout: it
//! bounds the wait for the response head and for every body chunk, so a
//! server that keeps trickling bytes is cut off only by the resource timeout.

use async_trait::async_trait;
use bytes::BytesMut;
use favicon_application::ports::{HttpFetcher, HttpRequest, HttpResponse};
use favicon_domain::FaviconError;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("favicon-resolver/", env!("CARGO_PKG_VERSION"));

pub struct ReqwestFetcher {
    client: reqwest::Client,
    resource_timeout: Duration,
}

impl ReqwestFetcher {
    pub fn new(resource_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .timeout(resource_timeout)
            .pool_max_idle_per_host(2)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            resource_timeout,
        }
    }

    pub fn resource_timeout(&self) -> Duration {
        self.resource_timeout
    }
}

fn map_reqwest_error(url: &str, e: reqwest::Error) -> FaviconError {
    if e.is_timeout() {
        FaviconError::Timeout {
            url: url.to_string(),
        }
    } else {
        FaviconError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FaviconError> {
        debug!(url = %request.url, "Fetching icon");

        let timed_out = || FaviconError::Timeout {
            url: request.url.clone(),
        };

        let mut response = tokio::time::timeout(
            request.timeout,
            self.client
                .get(&request.url)
                .header(ACCEPT, request.accept)
                .send(),
        )
        .await
        .map_err(|_| timed_out())?
        .map_err(|e| map_reqwest_error(&request.url, e))?;

        let status = response.status().as_u16();

        let mut body = BytesMut::new();
        while let Some(chunk) = tokio::time::timeout(request.timeout, response.chunk())
            .await
            .map_err(|_| timed_out())?
            .map_err(|e| map_reqwest_error(&request.url, e))?
        {
            body.extend_from_slice(&chunk);
        }
        let body = body.freeze();

        debug!(
            url = %request.url,
            status,
            body_len = body.len(),
            "Icon response received"
        );

        Ok(HttpResponse { status, body })
    }
}
