pub mod assets;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod telemetry;

pub use assets::AssetConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use telemetry::TelemetryConfig;
