use favicon_application::ports::TelemetrySink;
use favicon_domain::config::TelemetryConfig;
use favicon_domain::TelemetryEvent;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::{self, error::SendError};
use tracing::{debug, trace};

pub type TelemetryReceiver = mpsc::UnboundedReceiver<TelemetryEvent>;

/// Channel-backed telemetry sink. Capturing never blocks. A disabled emitter
/// discards events; an enabled one counts the events it could not hand to a
/// consumer that has gone away.
pub struct TelemetryEmitter {
    sender: Option<mpsc::UnboundedSender<TelemetryEvent>>,
    undelivered: AtomicU64,
}

impl TelemetryEmitter {
    pub fn disabled() -> Self {
        Self {
            sender: None,
            undelivered: AtomicU64::new(0),
        }
    }

    pub fn channel() -> (Self, TelemetryReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let emitter = Self {
            sender: Some(tx),
            undelivered: AtomicU64::new(0),
        };
        (emitter, rx)
    }

    /// Receiver is `None` when telemetry is switched off.
    pub fn from_config(config: &TelemetryConfig) -> (Self, Option<TelemetryReceiver>) {
        if config.enabled {
            let (emitter, rx) = Self::channel();
            (emitter, Some(rx))
        } else {
            (Self::disabled(), None)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    pub fn undelivered(&self) -> u64 {
        self.undelivered.load(Ordering::Relaxed)
    }
}

impl TelemetrySink for TelemetryEmitter {
    fn capture(&self, event: TelemetryEvent) {
        let Some(tx) = &self.sender else {
            trace!(event = event.name, host = %event.host, "Telemetry disabled");
            return;
        };

        if let Err(SendError(event)) = tx.send(event) {
            self.undelivered.fetch_add(1, Ordering::Relaxed);
            debug!(event = event.name, host = %event.host, "Telemetry consumer gone");
        }
    }
}

impl Default for TelemetryEmitter {
    fn default() -> Self {
        Self::disabled()
    }
}

impl std::fmt::Debug for TelemetryEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryEmitter")
            .field("enabled", &self.is_enabled())
            .field("undelivered", &self.undelivered())
            .finish()
    }
}
