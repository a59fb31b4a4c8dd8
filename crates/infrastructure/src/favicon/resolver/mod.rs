pub mod cache_layer;
pub mod racing;

pub use cache_layer::CachedIconResolver;
pub use racing::{fetch_icon, RacingIconFetcher};
