pub mod assets;
pub mod cache;
pub mod decoder;
pub mod events;
pub mod resolver;
pub mod source;
pub mod transport;

pub use assets::DirectoryAssetStore;
pub use cache::IconCache;
pub use decoder::ImageCrateDecoder;
pub use events::{TelemetryEmitter, TelemetryMetrics};
pub use resolver::{CachedIconResolver, RacingIconFetcher};
pub use source::FaviconSource;
pub use transport::ReqwestFetcher;
