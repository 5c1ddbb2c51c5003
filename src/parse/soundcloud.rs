//! SoundCloud player URL extraction

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SRC_ATTR: Regex = Regex::new(r#"(?i)src\s*=\s*["']([^"']+)["']"#).unwrap();
    static ref BARE_URL: Regex = Regex::new(r#"(?i)(https?://[^\s"'<>]+)"#).unwrap();
    static ref VISUAL_TRUE: Regex = Regex::new(r"(?i)visual=true").unwrap();
}

/// Pull the player URL out of a pasted embed snippet
///
/// Prefers the `src` attribute; falls back to the first bare URL when the
/// snippet mentions soundcloud.com.
pub fn extract_player_url(embed_code: &str) -> Option<String> {
    if embed_code.trim().is_empty() {
        return None;
    }
    if let Some(src) = SRC_ATTR.captures(embed_code).and_then(|c| c.get(1)) {
        return Some(src.as_str().replace("&amp;", "&"));
    }
    if embed_code.contains("soundcloud.com") {
        return BARE_URL
            .captures(embed_code)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().replace("&amp;", "&"));
    }
    None
}

/// Force the compact (non-visual) player
pub fn compact_player_url(url: &str) -> String {
    let mut url = VISUAL_TRUE.replace_all(url, "visual=false").into_owned();
    if !url.contains("visual=") {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str("visual=false");
    }
    url
}

/// Player URL ready for the embed, or `None` when nothing usable was pasted
pub fn player_url(embed_code: &str) -> Option<String> {
    extract_player_url(embed_code).map(|url| compact_player_url(&url))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMBED: &str = r#"<iframe width="100%" height="166" scrolling="no" frameborder="no" allow="autoplay" src="https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/tracks/123&amp;color=%23ff5500&amp;visual=true"></iframe>"#;

    #[test]
    fn test_extracts_src_and_decodes_ampersands() {
        let url = extract_player_url(EMBED).unwrap();
        assert_eq!(
            url,
            "https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/tracks/123&color=%23ff5500&visual=true"
        );
    }

    #[test]
    fn test_visual_forced_off() {
        let url = player_url(EMBED).unwrap();
        assert!(url.ends_with("&visual=false"));
        assert!(!url.contains("visual=true"));
    }

    #[test]
    fn test_visual_appended() {
        assert_eq!(compact_player_url("https://x.test/p"), "https://x.test/p?visual=false");
        assert_eq!(compact_player_url("https://x.test/p?a=1"), "https://x.test/p?a=1&visual=false");
        assert_eq!(compact_player_url("https://x.test/p?visual=TRUE"), "https://x.test/p?visual=false");
    }

    #[test]
    fn test_bare_soundcloud_url() {
        let url = extract_player_url("listen: https://soundcloud.com/artist/song now");
        assert_eq!(url.as_deref(), Some("https://soundcloud.com/artist/song"));
    }

    #[test]
    fn test_unrelated_text() {
        assert_eq!(extract_player_url("https://example.com/song"), None);
        assert_eq!(extract_player_url("   "), None);
    }
}
