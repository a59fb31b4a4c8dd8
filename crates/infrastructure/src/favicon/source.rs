//! The two endpoints raced for every host.
//!
//! ```text
//! GET https://www.google.com/s2/favicons?domain=<host>&sz=64   (aggregator, immediate)
//! GET https://<host>/favicon.ico                               (direct site, delayed)
//! ```
//!
//! The host must be a bare authority; it is percent-encoded into the
//! aggregator query and IDNs are sent in their ASCII form.

use favicon_domain::config::ResolverConfig;
use favicon_domain::FaviconError;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaviconSource {
    Aggregator,
    DirectSite,
}

impl FaviconSource {
    pub const ALL: [FaviconSource; 2] = [FaviconSource::Aggregator, FaviconSource::DirectSite];

    pub fn url(&self, host: &str, config: &ResolverConfig) -> Result<String, FaviconError> {
        let host = ascii_host(host)?;
        match self {
            Self::Aggregator => {
                let mut url =
                    Url::parse(&config.aggregator_url).map_err(|e| FaviconError::Transport {
                        url: config.aggregator_url.clone(),
                        reason: e.to_string(),
                    })?;
                url.query_pairs_mut()
                    .append_pair("domain", &host)
                    .append_pair("sz", &config.icon_size.to_string());
                Ok(url.into())
            }
            Self::DirectSite => Ok(format!("https://{host}/favicon.ico")),
        }
    }

    /// Head start given to the aggregator before this source begins.
    pub fn start_delay(&self, config: &ResolverConfig) -> Duration {
        match self {
            Self::Aggregator => Duration::ZERO,
            Self::DirectSite => config.direct_fetch_delay(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aggregator => "aggregator",
            Self::DirectSite => "direct",
        }
    }
}

/// Parses `host` as the whole authority of an https URL. Anything that
/// would leak into the path, query, fragment, port or userinfo is rejected.
fn ascii_host(host: &str) -> Result<String, FaviconError> {
    let invalid = || FaviconError::InvalidHost(host.to_string());

    if host.is_empty() || (host.contains(':') && !host.starts_with('[')) {
        return Err(invalid());
    }

    let url = Url::parse(&format!("https://{host}/")).map_err(|_| invalid())?;
    let bare = url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty()
        && url.password().is_none()
        && url.port().is_none();

    match url.host_str() {
        Some(ascii) if bare => Ok(ascii.to_string()),
        _ => Err(invalid()),
    }
}
