#![allow(dead_code)]

use async_trait::async_trait;
use favicon_application::ports::{AssetStore, HostIconResolver};
use favicon_domain::FaviconImage;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn solid_image(size: u32, shade: u8) -> FaviconImage {
    let pixels = vec![shade; (size * size * 4) as usize];
    FaviconImage::new(size, size, pixels)
}

#[derive(Default)]
pub struct MockAssetStore {
    assets: HashMap<String, FaviconImage>,
    loads: Mutex<Vec<String>>,
}

impl MockAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, asset_id: &str, image: FaviconImage) -> Self {
        self.assets.insert(asset_id.to_string(), image);
        self
    }

    pub fn loads(&self) -> Vec<String> {
        self.loads.lock().unwrap().clone()
    }
}

impl AssetStore for MockAssetStore {
    fn load(&self, asset_id: &str) -> Option<FaviconImage> {
        self.loads.lock().unwrap().push(asset_id.to_string());
        self.assets.get(asset_id).cloned()
    }
}

#[derive(Default)]
pub struct MockHostIconResolver {
    icons: HashMap<String, FaviconImage>,
    calls: Arc<AtomicUsize>,
    hosts: Mutex<Vec<String>>,
}

impl MockHostIconResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icon(mut self, host: &str, image: FaviconImage) -> Self {
        self.icons.insert(host.to_string(), image);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_hosts(&self) -> Vec<String> {
        self.hosts.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostIconResolver for MockHostIconResolver {
    async fn resolve_host(&self, host: &str) -> Option<FaviconImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.hosts.lock().unwrap().push(host.to_string());
        self.icons.get(host).cloned()
    }
}
