pub mod emitter;
pub mod metrics;

pub use emitter::{TelemetryEmitter, TelemetryReceiver};
pub use metrics::TelemetryMetrics;
