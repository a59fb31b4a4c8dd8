#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use favicon_application::ports::{
    HostIconResolver, HttpFetcher, HttpRequest, HttpResponse, TelemetrySink,
};
use favicon_domain::config::ResolverConfig;
use favicon_domain::{FaviconError, FaviconImage, TelemetryEvent};
use image::{ImageFormat, Rgba, RgbaImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const HOST: &str = "example.com";

pub fn aggregator_url(host: &str) -> String {
    format!("https://www.google.com/s2/favicons?domain={host}&sz=64")
}

pub fn direct_url(host: &str) -> String {
    format!("https://{host}/favicon.ico")
}

pub fn png_bytes(width: u32, height: u32, shade: u8) -> Bytes {
    let img = RgbaImage::from_pixel(width, height, Rgba([shade, shade, shade, 255]));
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png).unwrap();
    Bytes::from(cursor.into_inner())
}

pub fn solid_image(size: u32, shade: u8) -> FaviconImage {
    FaviconImage::new(size, size, vec![shade; (size * size * 4) as usize])
}

pub fn test_config() -> ResolverConfig {
    ResolverConfig::default()
}

// ── HTTP ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub enum Scripted {
    Respond {
        status: u16,
        body: Bytes,
        delay: Duration,
    },
    Fail {
        delay: Duration,
    },
}

impl Scripted {
    pub fn png(width: u32, height: u32, shade: u8, delay_ms: u64) -> Self {
        Self::Respond {
            status: 200,
            body: png_bytes(width, height, shade),
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn status(status: u16, delay_ms: u64) -> Self {
        Self::Respond {
            status,
            body: Bytes::new(),
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn body(body: &'static [u8], delay_ms: u64) -> Self {
        Self::Respond {
            status: 200,
            body: Bytes::from_static(body),
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn fail(delay_ms: u64) -> Self {
        Self::Fail {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Scripted fetcher. A request counts as `started` when the fetch begins and
/// as `completed` only if it survives its scripted delay, so an aborted
/// attempt shows up as started but never completed.
#[derive(Default)]
pub struct MockHttpFetcher {
    routes: HashMap<String, Scripted>,
    started: Mutex<Vec<HttpRequest>>,
    completed: Mutex<Vec<String>>,
}

impl MockHttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: impl Into<String>, scripted: Scripted) -> Self {
        self.routes.insert(url.into(), scripted);
        self
    }

    pub fn started_urls(&self) -> Vec<String> {
        self.started
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }

    pub fn started_requests(&self) -> Vec<HttpRequest> {
        self.started.lock().unwrap().clone()
    }

    pub fn completed_urls(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    pub fn was_started(&self, url: &str) -> bool {
        self.started_urls().iter().any(|u| u == url)
    }

    pub fn was_completed(&self, url: &str) -> bool {
        self.completed_urls().iter().any(|u| u == url)
    }
}

#[async_trait]
impl HttpFetcher for MockHttpFetcher {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FaviconError> {
        self.started.lock().unwrap().push(request.clone());

        let scripted = self.routes.get(&request.url).cloned();
        let result = match scripted {
            Some(Scripted::Respond {
                status,
                body,
                delay,
            }) => {
                tokio::time::sleep(delay).await;
                Ok(HttpResponse::new(status, body))
            }
            Some(Scripted::Fail { delay }) => {
                tokio::time::sleep(delay).await;
                Err(FaviconError::Transport {
                    url: request.url.clone(),
                    reason: "connection refused".to_string(),
                })
            }
            None => Err(FaviconError::Transport {
                url: request.url.clone(),
                reason: "no route".to_string(),
            }),
        };

        self.completed.lock().unwrap().push(request.url.clone());
        result
    }
}

// ── Host resolver ──────────────────────────────────────────────────────────

pub struct DelayedMockIconResolver {
    call_count: Arc<AtomicUsize>,
    delay: Duration,
    response: Option<FaviconImage>,
}

impl DelayedMockIconResolver {
    pub fn new(delay_ms: u64, image: FaviconImage) -> Self {
        Self {
            call_count: Arc::new(AtomicUsize::new(0)),
            delay: Duration::from_millis(delay_ms),
            response: Some(image),
        }
    }

    pub fn new_failing(delay_ms: u64) -> Self {
        Self {
            call_count: Arc::new(AtomicUsize::new(0)),
            delay: Duration::from_millis(delay_ms),
            response: None,
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostIconResolver for DelayedMockIconResolver {
    async fn resolve_host(&self, _host: &str) -> Option<FaviconImage> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.response.clone()
    }
}

// ── Telemetry ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingTelemetry {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn capture(&self, event: TelemetryEvent) {
        self.events.lock().unwrap().push(event);
    }
}
