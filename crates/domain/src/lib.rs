//! Favicon Resolver Domain Layer
pub mod config;
pub mod errors;
pub mod favicon_image;
pub mod favicon_request;
pub mod host;
pub mod pattern_table;
pub mod telemetry_event;
pub mod timeline;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::FaviconError;
pub use favicon_image::FaviconImage;
pub use favicon_request::FaviconRequest;
pub use host::normalize_host;
pub use pattern_table::{DualPatternRule, PatternRule, PatternTable};
pub use telemetry_event::TelemetryEvent;
pub use timeline::{resolve_overlaps, TimelineCard};
