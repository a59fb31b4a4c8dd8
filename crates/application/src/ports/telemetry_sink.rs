use favicon_domain::TelemetryEvent;

/// Fire-and-forget analytics capture. Implementations must not block and must
/// swallow their own failures.
pub trait TelemetrySink: Send + Sync {
    fn capture(&self, event: TelemetryEvent);
}
