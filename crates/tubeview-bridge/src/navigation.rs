//! Navigation policy for the embedded surface.
//!
//! Every navigation the surface attempts is classified into exactly one
//! outcome. Evaluation order: bridge scheme, then same-origin, then the
//! known embedded-player asset patterns, else external. External is the
//! default — unrecognized navigations are handed to the platform
//! browser, never silently dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::callback::CALLBACK_SCHEME;

/// What to do with a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Inside the trusted origin; let the surface proceed silently.
    SameOrigin,
    /// Bridge-scheme pseudo-navigation; intercept and parse as a callback.
    BridgeCallback,
    /// A resource the embedded player legitimately loads; let it proceed.
    EmbeddedPlayerAsset,
    /// Everything else; open in the platform browser, block in-surface.
    External,
}

static EMBED_PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^http(s)?://(www\.)?youtube\.com/embed/.*$").unwrap());

static AD_CONVERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^http(s)?://pubads\.g\.doubleclick\.net/pagead/conversion/").unwrap()
});

static SYNDICATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https://tpc\.googlesyndication\.com/sodar/.*\.html$").unwrap()
});

static OAUTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^http(s)?://accounts\.google\.com/o/oauth2/.*$").unwrap());

static STATIC_PROXY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https://content\.googleapis\.com/static/proxy\.html.*$").unwrap()
});

/// Classify one navigation request against the session's trusted origin.
pub fn classify(url: &str, trusted_origin: &str) -> NavigationOutcome {
    if scheme_of(url)
        .map(|scheme| scheme.eq_ignore_ascii_case(CALLBACK_SCHEME))
        .unwrap_or(false)
    {
        return NavigationOutcome::BridgeCallback;
    }
    if same_origin(url, trusted_origin) {
        return NavigationOutcome::SameOrigin;
    }
    if is_embedded_player_asset(url) {
        return NavigationOutcome::EmbeddedPlayerAsset;
    }
    NavigationOutcome::External
}

fn is_embedded_player_asset(url: &str) -> bool {
    [
        &*EMBED_PAGE_RE,
        &*AD_CONVERSION_RE,
        &*SYNDICATION_RE,
        &*OAUTH_RE,
        &*STATIC_PROXY_RE,
    ]
    .iter()
    .any(|pattern| pattern.is_match(url))
}

fn scheme_of(url: &str) -> Option<&str> {
    url.split_once(':').map(|(scheme, _)| scheme)
}

/// Scheme + authority equality. A URL without an authority component
/// (such as the `about:blank` origin placeholder) matches nothing.
fn same_origin(url: &str, origin: &str) -> bool {
    match (origin_parts(url), origin_parts(origin)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn origin_parts(url: &str) -> Option<(String, String)> {
    let (scheme, rest) = url.split_once("://")?;
    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("");
    if scheme.is_empty() || authority.is_empty() {
        return None;
    }
    Some((scheme.to_ascii_lowercase(), authority.to_ascii_lowercase()))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://host.example";

    // -- Bridge scheme --

    #[test]
    fn bridge_scheme_always_wins() {
        assert_eq!(
            classify("ytplayer://onReady?data=1", ORIGIN),
            NavigationOutcome::BridgeCallback
        );
        // Even when the trusted origin itself uses the bridge scheme.
        assert_eq!(
            classify("ytplayer://onStateChange?data=1", "ytplayer://anything"),
            NavigationOutcome::BridgeCallback
        );
    }

    #[test]
    fn bridge_scheme_is_case_insensitive() {
        assert_eq!(
            classify("YTPlayer://onReady", ORIGIN),
            NavigationOutcome::BridgeCallback
        );
    }

    // -- Same origin --

    #[test]
    fn same_origin_allows_any_path() {
        assert_eq!(
            classify("https://host.example/anything", ORIGIN),
            NavigationOutcome::SameOrigin
        );
        assert_eq!(
            classify("https://HOST.example/?q=1", ORIGIN),
            NavigationOutcome::SameOrigin
        );
    }

    #[test]
    fn different_scheme_is_not_same_origin() {
        assert_eq!(
            classify("http://host.example/", ORIGIN),
            NavigationOutcome::External
        );
    }

    #[test]
    fn different_port_is_not_same_origin() {
        assert_eq!(
            classify("https://host.example:8443/", ORIGIN),
            NavigationOutcome::External
        );
    }

    #[test]
    fn placeholder_origin_matches_nothing() {
        assert_eq!(
            classify("https://example.com/", "about:blank"),
            NavigationOutcome::External
        );
        assert_eq!(
            classify("about:blank", "about:blank"),
            NavigationOutcome::External
        );
    }

    // -- Embedded player assets --

    #[test]
    fn embed_page_is_player_asset() {
        assert_eq!(
            classify("https://www.youtube.com/embed/abc123?x=1", ORIGIN),
            NavigationOutcome::EmbeddedPlayerAsset
        );
        assert_eq!(
            classify("http://youtube.com/embed/abc123", ORIGIN),
            NavigationOutcome::EmbeddedPlayerAsset
        );
    }

    #[test]
    fn ad_conversion_is_player_asset() {
        assert_eq!(
            classify(
                "https://pubads.g.doubleclick.net/pagead/conversion/123/?x=1",
                ORIGIN
            ),
            NavigationOutcome::EmbeddedPlayerAsset
        );
    }

    #[test]
    fn syndication_sodar_is_player_asset() {
        assert_eq!(
            classify(
                "https://tpc.googlesyndication.com/sodar/sodar2/222/runner.html",
                ORIGIN
            ),
            NavigationOutcome::EmbeddedPlayerAsset
        );
        // Only .html pages under sodar/ are recognized.
        assert_eq!(
            classify("https://tpc.googlesyndication.com/sodar/runner.js", ORIGIN),
            NavigationOutcome::External
        );
    }

    #[test]
    fn oauth_is_player_asset() {
        assert_eq!(
            classify("https://accounts.google.com/o/oauth2/auth?client=1", ORIGIN),
            NavigationOutcome::EmbeddedPlayerAsset
        );
    }

    #[test]
    fn static_proxy_is_player_asset() {
        assert_eq!(
            classify(
                "https://content.googleapis.com/static/proxy.html?jsh=m",
                ORIGIN
            ),
            NavigationOutcome::EmbeddedPlayerAsset
        );
    }

    #[test]
    fn pattern_match_is_case_insensitive() {
        assert_eq!(
            classify("HTTPS://WWW.YOUTUBE.COM/EMBED/ABC", ORIGIN),
            NavigationOutcome::EmbeddedPlayerAsset
        );
    }

    // -- External fallback --

    #[test]
    fn everything_else_is_external() {
        assert_eq!(
            classify("https://example.com/", ORIGIN),
            NavigationOutcome::External
        );
        assert_eq!(
            classify("https://www.youtube.com/watch?v=abc", ORIGIN),
            NavigationOutcome::External
        );
        assert_eq!(classify("not-a-url", ORIGIN), NavigationOutcome::External);
        assert_eq!(classify("", ORIGIN), NavigationOutcome::External);
    }
}
