mod asset_store;
mod host_icon_resolver;
mod http_fetcher;
mod image_decoder;
mod telemetry_sink;

pub use asset_store::AssetStore;
pub use host_icon_resolver::HostIconResolver;
pub use http_fetcher::{HttpFetcher, HttpRequest, HttpResponse, ACCEPT_IMAGE};
pub use image_decoder::ImageDecoder;
pub use telemetry_sink::TelemetrySink;

// Re-export for convenience
pub use favicon_domain::{FaviconError, FaviconImage, TelemetryEvent};
