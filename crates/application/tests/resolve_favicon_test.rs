mod helpers;

use favicon_application::use_cases::ResolveFaviconUseCase;
use favicon_domain::{FaviconRequest, PatternRule, PatternTable};
use helpers::{solid_image, MockAssetStore, MockHostIconResolver};
use std::sync::Arc;

fn make_use_case(
    patterns: PatternTable,
    assets: Arc<MockAssetStore>,
    network: Arc<MockHostIconResolver>,
) -> ResolveFaviconUseCase {
    ResolveFaviconUseCase::new(Arc::new(patterns), assets, network)
}

fn builtin_assets() -> MockAssetStore {
    MockAssetStore::new()
        .with_asset("xcode", solid_image(16, 1))
        .with_asset("icloud_mail", solid_image(16, 2))
        .with_asset("apple_mail", solid_image(16, 3))
        .with_asset("apple_music", solid_image(16, 4))
        .with_asset("slack", solid_image(16, 5))
}

// ── pattern stage ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_primary_single_pattern_skips_network() {
    let assets = Arc::new(builtin_assets());
    let network = Arc::new(MockHostIconResolver::new());
    let use_case = make_use_case(PatternTable::builtin(), assets, network.clone());

    let request = FaviconRequest::from_labels(Some("developer.apple.com/xcode"), None);
    let image = use_case.execute(&request).await;

    assert_eq!(image, Some(solid_image(16, 1)));
    assert_eq!(network.call_count(), 0);
}

#[tokio::test]
async fn test_single_table_takes_precedence_over_dual_table() {
    let assets = Arc::new(builtin_assets());
    let network = Arc::new(MockHostIconResolver::new());
    let use_case = make_use_case(PatternTable::builtin(), assets, network.clone());

    let request = FaviconRequest::from_labels(Some("Apple Mail - icloud.com/mail"), None);
    let image = use_case.execute(&request).await;

    assert_eq!(image, Some(solid_image(16, 2)));
    assert_eq!(network.call_count(), 0);
}

#[tokio::test]
async fn test_secondary_single_beats_primary_dual() {
    let assets = Arc::new(builtin_assets());
    let network = Arc::new(MockHostIconResolver::new());
    let use_case = make_use_case(PatternTable::builtin(), assets, network);

    let request = FaviconRequest::from_labels(Some("Apple Music"), Some("Slack"));
    let image = use_case.execute(&request).await;

    assert_eq!(image, Some(solid_image(16, 5)));
}

#[tokio::test]
async fn test_dual_pattern_on_primary_label() {
    let assets = Arc::new(builtin_assets());
    let network = Arc::new(MockHostIconResolver::new());
    let use_case = make_use_case(PatternTable::builtin(), assets, network.clone());

    let request = FaviconRequest::from_labels(Some("Apple Music"), Some("Now Playing"));
    let image = use_case.execute(&request).await;

    assert_eq!(image, Some(solid_image(16, 4)));
    assert_eq!(network.call_count(), 0);
}

#[tokio::test]
async fn test_generic_word_without_apple_falls_through_to_network() {
    let assets = Arc::new(builtin_assets());
    let network = Arc::new(
        MockHostIconResolver::new().with_icon("musicplayer.com", solid_image(32, 9)),
    );
    let use_case = make_use_case(PatternTable::builtin(), assets, network.clone());

    let request = FaviconRequest::new(
        Some("music".to_string()),
        None,
        Some("musicplayer.com".to_string()),
        None,
    );
    let image = use_case.execute(&request).await;

    assert_eq!(image, Some(solid_image(32, 9)));
    assert_eq!(network.requested_hosts(), vec!["musicplayer.com"]);
}

#[tokio::test]
async fn test_missing_asset_falls_through_to_next_matching_rule() {
    let patterns = PatternTable::new(
        vec![
            PatternRule::new("icloud.com/mail", "icloud_mail_hd"),
            PatternRule::new("icloud.com", "icloud"),
        ],
        vec![],
    );
    let assets = Arc::new(MockAssetStore::new().with_asset("icloud", solid_image(8, 7)));
    let network = Arc::new(MockHostIconResolver::new());
    let use_case = make_use_case(patterns, assets.clone(), network.clone());

    let request = FaviconRequest::from_labels(Some("icloud.com/mail"), None);
    let image = use_case.execute(&request).await;

    assert_eq!(image, Some(solid_image(8, 7)));
    assert_eq!(assets.loads(), vec!["icloud_mail_hd", "icloud"]);
    assert_eq!(network.call_count(), 0);
}

#[tokio::test]
async fn test_missing_asset_falls_through_to_network() {
    let assets = Arc::new(MockAssetStore::new());
    let network =
        Arc::new(MockHostIconResolver::new().with_icon("slack.com", solid_image(32, 3)));
    let use_case = make_use_case(PatternTable::builtin(), assets, network.clone());

    let request = FaviconRequest::from_labels(Some("slack.com"), None);
    let image = use_case.execute(&request).await;

    assert_eq!(image, Some(solid_image(32, 3)));
    assert_eq!(network.call_count(), 1);
}

// ── network stage ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_secondary_host_used_when_primary_fails() {
    let network =
        Arc::new(MockHostIconResolver::new().with_icon("example.org", solid_image(16, 6)));
    let use_case = make_use_case(
        PatternTable::builtin(),
        Arc::new(MockAssetStore::new()),
        network.clone(),
    );

    let request = FaviconRequest::from_labels(Some("example.net"), Some("example.org"));
    let image = use_case.execute(&request).await;

    assert_eq!(image, Some(solid_image(16, 6)));
    assert_eq!(network.requested_hosts(), vec!["example.net", "example.org"]);
}

#[tokio::test]
async fn test_primary_host_short_circuits_secondary() {
    let network = Arc::new(
        MockHostIconResolver::new()
            .with_icon("example.net", solid_image(16, 1))
            .with_icon("example.org", solid_image(16, 2)),
    );
    let use_case = make_use_case(
        PatternTable::builtin(),
        Arc::new(MockAssetStore::new()),
        network.clone(),
    );

    let request = FaviconRequest::from_labels(Some("example.net"), Some("example.org"));
    let image = use_case.execute(&request).await;

    assert_eq!(image, Some(solid_image(16, 1)));
    assert_eq!(network.call_count(), 1);
}

#[tokio::test]
async fn test_total_failure_returns_none() {
    let network = Arc::new(MockHostIconResolver::new());
    let use_case = make_use_case(
        PatternTable::builtin(),
        Arc::new(MockAssetStore::new()),
        network.clone(),
    );

    let request = FaviconRequest::from_labels(Some("unknown.example"), Some("Nowhere"));
    assert_eq!(use_case.execute(&request).await, None);
    assert_eq!(network.requested_hosts(), vec!["unknown.example", "nowhere.com"]);
}

#[tokio::test]
async fn test_empty_request_does_nothing() {
    let assets = Arc::new(MockAssetStore::new());
    let network = Arc::new(MockHostIconResolver::new());
    let use_case = make_use_case(PatternTable::builtin(), assets.clone(), network.clone());

    let request = FaviconRequest::new(Some("   ".to_string()), None, Some(" ".to_string()), None);
    assert_eq!(use_case.execute(&request).await, None);
    assert!(assets.loads().is_empty());
    assert_eq!(network.call_count(), 0);
}
