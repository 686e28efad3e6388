//! Post identity: stable identifiers derived from platform and URL.
//!
//! A post's identifier is its explicit id when one is supplied. Otherwise it
//! is `<prefix>-<key>`, where the key is the status id (Twitter / X) or the
//! shortcode (Instagram) taken from the URL path, or a hash of the whole URL
//! when the URL is not a post link on the platform's own host.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::types::{Platform, Post, PostId};

fn twitter_status_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^/[^/]+/status/(\d+)").expect("static pattern"))
}

fn instagram_post_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^/(?:p|reel)/([A-Za-z0-9_-]+)").expect("static pattern")
    })
}

/// Extract the platform-specific key from a post URL.
///
/// Returns the numeric status id for Twitter / X and the shortcode for
/// Instagram. The URL's host must belong to `platform`; any other host, or a
/// path that is not a post link, yields `None`.
pub fn extract_post_key(platform: Platform, url: &str) -> Option<String> {
    let parsed = parse_url(url)?;
    if platform_of(&parsed)? != platform {
        return None;
    }

    let pattern = match platform {
        Platform::Twitter => twitter_status_pattern(),
        Platform::Instagram => instagram_post_pattern(),
    };
    pattern
        .captures(parsed.path())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Derive the identifier for a post.
///
/// An empty explicit id counts as absent.
pub fn generate_identifier(post: &Post) -> PostId {
    if let Some(id) = post.id.as_deref().filter(|id| !id.is_empty()) {
        return PostId::from(id);
    }

    let key = extract_post_key(post.platform, &post.url).unwrap_or_else(|| hash_url(&post.url));

    PostId(format!("{}-{}", post.platform.id_prefix(), key))
}

/// Stable base-36 hash of a URL.
///
/// 31-multiplier rolling hash over UTF-16 code units with 32-bit wrapping,
/// rendered as the base-36 magnitude. Identical URLs always hash alike.
pub fn hash_url(url: &str) -> String {
    let hash = url.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    to_base36(hash.unsigned_abs())
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Guess the platform of a URL from its host.
pub fn detect_platform(url: &str) -> Option<Platform> {
    parse_url(url).as_ref().and_then(platform_of)
}

/// Parse a post URL; links pasted without a scheme are read as https.
fn parse_url(url: &str) -> Option<Url> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    if url.contains("://") {
        Url::parse(url).ok()
    } else {
        Url::parse(&format!("https://{}", url)).ok()
    }
}

fn platform_of(url: &Url) -> Option<Platform> {
    let host = url.host_str()?.to_ascii_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("mobile."))
        .unwrap_or(&host);

    match host {
        "twitter.com" | "x.com" => Some(Platform::Twitter),
        "instagram.com" => Some(Platform::Instagram),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twitter_status_id() {
        let post = Post::twitter("https://twitter.com/rustlang/status/1234567890");
        assert_eq!(generate_identifier(&post).as_str(), "tw-1234567890");

        let post = Post::twitter("https://x.com/rustlang/status/42?s=20");
        assert_eq!(generate_identifier(&post).as_str(), "tw-42");
    }

    #[test]
    fn test_instagram_shortcode() {
        let post = Post::instagram("https://www.instagram.com/p/CxY_z-12/");
        assert_eq!(generate_identifier(&post).as_str(), "ig-CxY_z-12");

        let post = Post::instagram("https://instagram.com/reel/AbC123");
        assert_eq!(generate_identifier(&post).as_str(), "ig-AbC123");
    }

    #[test]
    fn test_explicit_id_wins() {
        let post = Post::instagram("https://instagram.com/p/abc").with_id("custom-id");
        assert_eq!(generate_identifier(&post).as_str(), "custom-id");

        let post = Post::twitter("not a url").with_id("custom-id");
        assert_eq!(generate_identifier(&post).as_str(), "custom-id");
    }

    #[test]
    fn test_empty_explicit_id_is_ignored() {
        let post = Post::twitter("https://x.com/a/status/7").with_id("");
        assert_eq!(generate_identifier(&post).as_str(), "tw-7");
    }

    #[test]
    fn test_unmatched_url_falls_back_to_hash() {
        let post = Post::twitter("https://example.com/some/page");
        let id = generate_identifier(&post);
        assert!(id.as_str().starts_with("tw-"));
        assert_eq!(id.as_str(), format!("tw-{}", hash_url("https://example.com/some/page")));

        // Platform patterns do not cross over.
        let post = Post::instagram("https://x.com/rustlang/status/1");
        assert!(generate_identifier(&post).as_str().starts_with("ig-"));
        assert_ne!(generate_identifier(&post).as_str(), "ig-1");
    }

    #[test]
    fn test_identifier_is_idempotent() {
        let post = Post::instagram("https://example.org/feed");
        assert_eq!(generate_identifier(&post), generate_identifier(&post));
    }

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash_url(""), "0");
        assert_eq!(hash_url("a"), "2p");
        assert_eq!(hash_url("hello"), "1n1e4y");
    }

    #[test]
    fn test_hash_distinguishes_urls() {
        assert_ne!(hash_url("https://a.example/1"), hash_url("https://a.example/2"));
    }

    #[test]
    fn test_detect_platform() {
        assert_eq!(detect_platform("https://twitter.com/a/status/1"), Some(Platform::Twitter));
        assert_eq!(detect_platform("https://mobile.twitter.com/a"), Some(Platform::Twitter));
        assert_eq!(detect_platform("x.com/a/status/1"), Some(Platform::Twitter));
        assert_eq!(detect_platform("https://www.instagram.com/p/abc/"), Some(Platform::Instagram));
        assert_eq!(detect_platform("https://fox.com/news"), None);
        assert_eq!(detect_platform("https://example.com"), None);
        assert_eq!(detect_platform(""), None);
    }

    #[test]
    fn test_host_case_is_ignored() {
        assert_eq!(detect_platform("https://X.COM/rustlang/status/42"), Some(Platform::Twitter));
        assert_eq!(detect_platform("WWW.Instagram.com/p/abc"), Some(Platform::Instagram));

        let post = Post::twitter("https://X.COM/rustlang/status/42");
        assert_eq!(generate_identifier(&post).as_str(), "tw-42");

        let post = Post::instagram("https://www.INSTAGRAM.com/p/CxY_z-12/");
        assert_eq!(generate_identifier(&post).as_str(), "ig-CxY_z-12");
    }

    #[test]
    fn test_scheme_less_links() {
        let post = Post::twitter("twitter.com/rustlang/status/9");
        assert_eq!(generate_identifier(&post).as_str(), "tw-9");

        let post = Post::instagram("instagram.com/reel/Zz_9");
        assert_eq!(generate_identifier(&post).as_str(), "ig-Zz_9");
    }

    #[test]
    fn test_lookalike_hosts_fall_back_to_hash() {
        let url = "https://fox.com/news/status/12345";
        assert_eq!(extract_post_key(Platform::Twitter, url), None);
        let post = Post::twitter(url);
        assert_eq!(generate_identifier(&post).as_str(), format!("tw-{}", hash_url(url)));
        assert_ne!(generate_identifier(&post).as_str(), "tw-12345");

        let url = "https://notinstagram.com/p/abc";
        assert_eq!(extract_post_key(Platform::Instagram, url), None);
        assert_ne!(generate_identifier(&Post::instagram(url)).as_str(), "ig-abc");

        // The platform name inside the path does not count either.
        let url = "https://example.com/x.com/a/status/5";
        assert_eq!(extract_post_key(Platform::Twitter, url), None);
    }

    #[test]
    fn test_extract_post_key() {
        assert_eq!(
            extract_post_key(Platform::Twitter, "https://mobile.twitter.com/a/status/77?s=20"),
            Some("77".to_string())
        );
        assert_eq!(
            extract_post_key(Platform::Instagram, "https://www.instagram.com/p/AbC/?img_index=1"),
            Some("AbC".to_string())
        );
        assert_eq!(extract_post_key(Platform::Twitter, "https://x.com/home"), None);
        assert_eq!(extract_post_key(Platform::Instagram, "not a url"), None);
    }
}
