//! Google Drive link normalization
//!
//! Authors paste share links in whatever shape Drive gave them. Cards need a
//! directly loadable image, so every recognized shape is rewritten to the
//! thumbnail endpoint. Anything else is left alone: an external image URL is
//! used as-is and free text is treated as a placeholder.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Recognized shapes, tried in order; the first match wins
    static ref FILE_ID_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"drive\.google\.com/file/d/([a-zA-Z0-9_-]+)").unwrap(),
        Regex::new(r"drive\.google\.com/uc\?export=view&id=([a-zA-Z0-9_-]+)").unwrap(),
        Regex::new(r"drive\.google\.com/open\?id=([a-zA-Z0-9_-]+)").unwrap(),
        Regex::new(r"drive\.google\.com/thumbnail\?id=([a-zA-Z0-9_-]+)").unwrap(),
    ];
    static ref PATH_ID: Regex = Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap();
    static ref BARE_ID: Regex = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Width requested from the thumbnail endpoint
pub const THUMBNAIL_WIDTH: &str = "w800";

/// Extract the Drive file id from a recognized link shape
pub fn extract_file_id(url: &str) -> Option<&str> {
    FILE_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether `id` has the shape of a bare Drive file id
///
/// Ids are interpolated into API paths, so nothing outside `[A-Za-z0-9_-]`
/// is accepted.
pub fn is_file_id(id: &str) -> bool {
    BARE_ID.is_match(id)
}

/// Canonical thumbnail URL for a file id
pub fn thumbnail_url(file_id: &str) -> String {
    format!(
        "https://drive.google.com/thumbnail?id={}&sz={}",
        file_id, THUMBNAIL_WIDTH
    )
}

/// Rewrite a Drive link to its thumbnail form
///
/// Unrecognized input, URL or not, is returned unchanged. The result is a
/// fixed point: normalizing it again yields the same string.
pub fn normalize_drive_link(url: &str) -> String {
    match extract_file_id(url) {
        Some(id) => thumbnail_url(id),
        None => url.to_string(),
    }
}

/// Rewrite a Drive link to the googleusercontent form used for large images
///
/// Side images on the lyrics page are shown at full size, which the
/// thumbnail endpoint does not serve.
pub fn content_image_url(url: &str) -> String {
    let id = extract_file_id(url).or_else(|| {
        PATH_ID
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    });
    match id {
        Some(id) => format!("https://lh3.googleusercontent.com/d/{}", id),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "1AbC-d_E2fG";

    #[test]
    fn test_is_file_id() {
        assert!(is_file_id(ID));
        assert!(!is_file_id(""));
        assert!(!is_file_id("../../oauth2/v3/userinfo"));
        assert!(!is_file_id("abc?alt=media"));
        assert!(!is_file_id("abc/def"));
    }

    fn all_shapes() -> Vec<String> {
        vec![
            format!("https://drive.google.com/file/d/{}/view?usp=sharing", ID),
            format!("https://drive.google.com/uc?export=view&id={}", ID),
            format!("https://drive.google.com/open?id={}", ID),
            format!("https://drive.google.com/thumbnail?id={}&sz=w400", ID),
        ]
    }

    #[test]
    fn test_all_shapes_yield_same_thumbnail() {
        let expected = format!("https://drive.google.com/thumbnail?id={}&sz=w800", ID);
        for url in all_shapes() {
            assert_eq!(normalize_drive_link(&url), expected, "shape: {}", url);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for url in all_shapes() {
            let once = normalize_drive_link(&url);
            assert_eq!(normalize_drive_link(&once), once);
        }
        let external = "https://example.com/cat.png";
        assert_eq!(normalize_drive_link(&normalize_drive_link(external)), external);
    }

    #[test]
    fn test_external_url_passes_through() {
        assert_eq!(
            normalize_drive_link("https://example.com/a.png?x=1"),
            "https://example.com/a.png?x=1"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(normalize_drive_link("image goes here"), "image goes here");
        assert_eq!(normalize_drive_link(""), "");
    }

    #[test]
    fn test_extract_file_id() {
        for url in all_shapes() {
            assert_eq!(extract_file_id(&url), Some(ID));
        }
        assert_eq!(extract_file_id("https://example.com/file/d/xyz"), None);
    }

    #[test]
    fn test_content_image_url() {
        let url = format!("https://drive.google.com/file/d/{}/view", ID);
        let converted = content_image_url(&url);
        assert_eq!(converted, format!("https://lh3.googleusercontent.com/d/{}", ID));
        assert_eq!(content_image_url(&converted), converted);
        assert_eq!(content_image_url("https://example.com/x.png"), "https://example.com/x.png");
    }
}
