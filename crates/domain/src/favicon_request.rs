use crate::host::normalize_host;

/// A resolution request for one timeline activity.
///
/// The raw labels are matched against the pattern tables as-is so path
/// context survives; the hosts feed the network-backed resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaviconRequest {
    pub primary_raw: Option<String>,
    pub secondary_raw: Option<String>,
    pub primary_host: Option<String>,
    pub secondary_host: Option<String>,
}

impl FaviconRequest {
    pub fn new(
        primary_raw: Option<String>,
        secondary_raw: Option<String>,
        primary_host: Option<String>,
        secondary_host: Option<String>,
    ) -> Self {
        Self {
            primary_raw,
            secondary_raw,
            primary_host,
            secondary_host,
        }
    }

    /// Builds a request from raw labels, deriving both hosts by normalization.
    pub fn from_labels(primary: Option<&str>, secondary: Option<&str>) -> Self {
        Self {
            primary_raw: primary.map(str::to_string),
            secondary_raw: secondary.map(str::to_string),
            primary_host: primary.and_then(normalize_host),
            secondary_host: secondary.and_then(normalize_host),
        }
    }

    pub fn raw_labels(&self) -> impl Iterator<Item = &str> {
        [self.primary_raw.as_deref(), self.secondary_raw.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
    }

    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        [self.primary_host.as_deref(), self.secondary_host.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
