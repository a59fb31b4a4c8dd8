use std::sync::Arc;

pub const FAVICON_FETCH_FAILED: &str = "favicon_fetch_failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryEvent {
    pub name: &'static str,

    pub host: Arc<str>,
}

impl TelemetryEvent {
    pub fn fetch_failed(host: impl Into<Arc<str>>) -> Self {
        Self {
            name: FAVICON_FETCH_FAILED,
            host: host.into(),
        }
    }

    /// Event properties as the analytics sink expects them.
    pub fn properties(&self) -> [(&'static str, &str); 1] {
        [("host", &*self.host)]
    }
}
