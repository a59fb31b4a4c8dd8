use url::Url;

/// Derives a bare hostname from a raw activity label.
///
/// Accepts full URLs, schemeless path-bearing strings
/// (`developer.apple.com/xcode`), bare domains and single-word site names
/// (`YouTube` becomes `youtube.com`). Returns `None` when no host can be
/// derived.
pub fn normalize_host(raw: &str) -> Option<String> {
    let candidate = raw.trim().to_lowercase();
    if candidate.is_empty() {
        return None;
    }

    if let Some(host) = parse_host(&candidate) {
        return Some(host);
    }

    if candidate.contains("://") {
        return None;
    }

    if candidate.contains('/') {
        return parse_host(&format!("https://{candidate}"));
    }

    let host = if candidate.contains('.') {
        candidate
    } else {
        format!("{candidate}.com")
    };

    if host.chars().any(char::is_whitespace) {
        return None;
    }

    Some(host)
}

fn parse_host(candidate: &str) -> Option<String> {
    let url = Url::parse(candidate).ok()?;
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}
