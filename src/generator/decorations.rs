//! Corner decorations and side images for the lyrics page

use crate::colors::{hex_to_rgb, FALLBACK_RGB};
use crate::escape::{AttrValue, CssValue, TrustedHtml};
use crate::models::{CornerPattern, LyricsStyle};
use crate::parse::content_image_url;

/// Which corner a decoration is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    BottomRight,
}

const FLOWER_PATH: &str = "M41.43,87.43c-2.62-1.17-4.18-1.81-5.69-2.54A42.67,42.67,0,0,1,19,70.58c-5.44-7.88-6.47-16.4-3.67-25.36C18,36.57,24.71,30.8,36,33.42c7.14,1.65,13.81,5.3,20.68,8.09,1.26.52,2.45,1.21,3.42,1.69,2.08-1.2,1.74-2.74,1.44-4-2.4-10.6,1.51-19.72,6.83-28.4a21.58,21.58,0,0,1,5.9-6.11c11.62-8.16,31.82-5.19,40.61,5.85,3,3.68,4.65,7.83,4.21,12.7-.33,3.63-.5,7.27-.79,11.63,2.68-1.39,4.71-2.36,6.66-3.46,10.9-6.18,22.22-6.68,33.9-2.58a47.34,47.34,0,0,1,4.84,1.77,21.79,21.79,0,0,1,11.95,13.62C178,51.34,177,57.36,174.22,64,168.71,77.31,159,85.74,145.68,90.54A41,41,0,0,0,142,92.38a68.91,68.91,0,0,0,7.17,3.94,59.43,59.43,0,0,1,19.27,12.61,24.61,24.61,0,0,1,7.83,16.65c.48,9.35-6.85,19.15-16.38,21.58a39.76,39.76,0,0,1-32.1-5.16c-2.59-1.63-5.14-3.31-8.49-5.48-.29,2.19-.75,3.51-.58,4.75,1.53,11.38-.87,22.23-5,32.68-1.91,4.88-5.49,8.33-11.41,9.15-4.3.61-8.42,1.1-12.7.17a20.8,20.8,0,0,1-13.18-8.88c-5.1-7.48-8.41-15.61-8.54-24.81,0-4,0-8,0-12.8a17.91,17.91,0,0,0-3.32,1.75c-8.76,7.73-18.67,13.27-30.23,15.4-12.51,2.31-23.17-1-31.38-11.1C.74,140.07-.81,131.7.45,127.2,2.07,121.42,4.18,115.84,8,111c8-10,17.45-17.89,29.81-21.89C38.63,88.86,39.36,88.41,41.43,87.43Z";

/// SVG body for a pattern in a 320x320 view box, or `None` for no drawing
fn pattern_body(pattern: CornerPattern, corner: Corner) -> Option<String> {
    use Corner::*;
    use CornerPattern::{Circle, Cloud, Flower, Heart, Leaf, Music, Sparkle, Star, Wave};

    let body = match (pattern, corner) {
        (CornerPattern::None, _) => return None,
        (Flower, TopLeft) => format!(
            r#"<path transform="scale(0.9) translate(-20,-20)" d="{}"/>"#,
            FLOWER_PATH
        ),
        (Flower, BottomRight) => format!(
            r#"<path transform="scale(0.9) translate(130,130)" d="{}"/>"#,
            FLOWER_PATH
        ),
        (Leaf, TopLeft) => r#"<path d="M10,160 Q10,10 160,10 Q80,80 80,160 Q80,80 10,160 Z"/>"#.to_string(),
        (Leaf, BottomRight) => r#"<path d="M310,160 Q310,310 160,310 Q240,240 240,160 Q240,240 310,160 Z"/>"#.to_string(),
        (Circle, TopLeft) => r#"<circle cx="80" cy="80" r="120"/>"#.to_string(),
        (Circle, BottomRight) => r#"<circle cx="240" cy="240" r="140"/>"#.to_string(),
        (Cloud, TopLeft) => r#"<path d="M20,120 Q20,60 80,60 Q100,20 140,40 Q180,20 180,60 Q220,60 200,100 Q220,140 180,140 Q160,180 100,160 Q40,180 20,120 Z"/>"#.to_string(),
        (Cloud, BottomRight) => r#"<path d="M140,280 Q140,220 200,220 Q220,180 260,200 Q300,180 300,220 Q340,220 320,260 Q340,300 300,300 Q280,340 220,320 Q160,340 140,280 Z"/>"#.to_string(),
        (Star, TopLeft) => r#"<polygon points="80,10 95,60 150,60 105,95 120,150 80,115 40,150 55,95 10,60 65,60"/>"#.to_string(),
        (Star, BottomRight) => r#"<polygon points="240,170 260,230 320,230 270,270 290,330 240,290 190,330 210,270 160,230 220,230"/>"#.to_string(),
        (Heart, TopLeft) => r#"<path d="M80,40 C80,20 55,10 40,25 C10,50 80,120 80,120 C80,120 150,50 120,25 C105,10 80,20 80,40 Z"/>"#.to_string(),
        (Heart, BottomRight) => r#"<path d="M240,200 C240,180 215,170 200,185 C170,210 240,280 240,280 C240,280 310,210 280,185 C265,170 240,180 240,200 Z"/>"#.to_string(),
        (Music, TopLeft) => r#"<g><ellipse cx="50" cy="110" rx="25" ry="18"/><rect x="72" y="30" width="6" height="82"/><ellipse cx="110" cy="80" rx="22" ry="16"/><rect x="130" y="15" width="6" height="67"/><path d="M78,30 Q105,15 136,20" stroke-width="6" fill="none"/></g>"#.to_string(),
        (Music, BottomRight) => r#"<g><ellipse cx="230" cy="280" rx="22" ry="16"/><rect x="249" y="205" width="5" height="77"/><ellipse cx="280" cy="255" rx="20" ry="14"/><rect x="297" y="190" width="5" height="67"/></g>"#.to_string(),
        (Wave, TopLeft) => r#"<path d="M-20,80 Q30,40 80,80 Q130,120 180,80 Q230,40 280,80 L280,180 Q230,140 180,180 Q130,220 80,180 Q30,140 -20,180 Z"/>"#.to_string(),
        (Wave, BottomRight) => r#"<path d="M40,260 Q90,220 140,260 Q190,300 240,260 Q290,220 340,260 L340,340 Q290,300 240,340 Q190,380 140,340 Q90,300 40,340 Z"/>"#.to_string(),
        (Sparkle, TopLeft) => r#"<g><polygon points="60,10 70,50 110,60 70,70 60,110 50,70 10,60 50,50"/><polygon points="120,60 127,85 150,90 127,95 120,120 113,95 90,90 113,85" opacity="0.6"/></g>"#.to_string(),
        (Sparkle, BottomRight) => r#"<g><polygon points="250,200 265,250 310,265 265,280 250,330 235,280 190,265 235,250"/><polygon points="190,250 198,278 225,285 198,292 190,320 182,292 155,285 182,278" opacity="0.6"/></g>"#.to_string(),
    };
    Some(body)
}

/// Fixed-position SVG for one corner; empty for [`CornerPattern::None`]
pub fn corner_svg(corner: Corner, style: &LyricsStyle) -> TrustedHtml {
    let pattern = match corner {
        Corner::TopLeft => style.top_left_pattern,
        Corner::BottomRight => style.bottom_right_pattern,
    };
    let Some(body) = pattern_body(pattern, corner) else {
        return TrustedHtml::default();
    };

    let (r, g, b) = hex_to_rgb(&style.pattern_color).unwrap_or(FALLBACK_RGB);
    let margin = style.pattern_margin;
    let placement = match corner {
        Corner::TopLeft => format!("top:{margin}px;left:{margin}px"),
        Corner::BottomRight => format!("bottom:{margin}px;right:{margin}px"),
    };
    let opacity = style.pattern_opacity.clamp(0.0, 1.0);

    TrustedHtml::from_markup(format!(
        r#"<svg class="lw-corner-svg" xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 320 320" style="{placement}"><g fill="rgb({r},{g},{b})" fill-opacity="{opacity}" stroke="rgb({r},{g},{b})" stroke-opacity="{opacity}">{body}</g></svg>"#,
        size = style.pattern_size,
    ))
}

/// Which side a character image sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Character image beside the lyrics panel
///
/// Drive links are rewritten to the direct content form. Empty when images
/// are switched off or no URL was given.
pub fn side_image(side: Side, style: &LyricsStyle) -> TrustedHtml {
    let url = match side {
        Side::Left => style.left_image_url.trim(),
        Side::Right => style.right_image_url.trim(),
    };
    if !style.show_images || url.is_empty() {
        return TrustedHtml::default();
    }

    let (class, offset, alt) = match side {
        Side::Left => ("lw-left", "left", "Character 1"),
        Side::Right => ("lw-right", "right", "Character 2"),
    };
    let src = AttrValue::new(&content_image_url(url));
    let size = CssValue::new(&format!("{}px", style.image_size));

    TrustedHtml::from_markup(format!(
        r#"<div class="lw-side-image {class}" style="{offset}:{margin}px"><img class="lw-character-image" style="max-width:{size};max-height:{size}" src="{src}" alt="{alt}" onerror="this.style.display='none'"></div>"#,
        margin = style.image_margin,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_pattern_draws_nothing() {
        let style = LyricsStyle {
            top_left_pattern: CornerPattern::None,
            ..Default::default()
        };
        assert!(corner_svg(Corner::TopLeft, &style).is_empty());
        assert!(!corner_svg(Corner::BottomRight, &style).is_empty());
    }

    #[test]
    fn test_corner_color_and_placement() {
        let style = LyricsStyle {
            top_left_pattern: CornerPattern::Star,
            pattern_color: "#ff0000".to_string(),
            pattern_opacity: 0.5,
            pattern_margin: 12,
            pattern_size: 150,
            ..Default::default()
        };
        let svg = corner_svg(Corner::TopLeft, &style);
        assert!(svg.as_str().contains(r#"fill="rgb(255,0,0)""#));
        assert!(svg.as_str().contains(r#"fill-opacity="0.5""#));
        assert!(svg.as_str().contains("top:12px;left:12px"));
        assert!(svg.as_str().contains(r#"width="150""#));
        assert!(svg.as_str().contains("<polygon"));
    }

    #[test]
    fn test_unparsable_color_falls_back() {
        let style = LyricsStyle {
            pattern_color: "green".to_string(),
            ..Default::default()
        };
        let svg = corner_svg(Corner::BottomRight, &style);
        assert!(svg.as_str().contains("rgb(134,239,172)"));
        assert!(svg.as_str().contains("bottom:20px;right:20px"));
    }

    #[test]
    fn test_side_image_uses_content_url() {
        let style = LyricsStyle {
            left_image_url: "https://drive.google.com/file/d/abc_123/view".to_string(),
            ..Default::default()
        };
        let html = side_image(Side::Left, &style);
        assert!(html.as_str().contains(r#"src="https://lh3.googleusercontent.com/d/abc_123""#));
        assert!(html.as_str().contains("left:40px"));
        assert!(side_image(Side::Right, &style).is_empty());
    }

    #[test]
    fn test_side_image_toggle_off() {
        let style = LyricsStyle {
            show_images: false,
            left_image_url: "https://img.test/a.png".to_string(),
            ..Default::default()
        };
        assert!(side_image(Side::Left, &style).is_empty());
    }

    #[test]
    fn test_side_image_url_is_escaped() {
        let style = LyricsStyle {
            right_image_url: "https://img.test/a.png\"onload=\"x".to_string(),
            ..Default::default()
        };
        let html = side_image(Side::Right, &style);
        assert!(html.as_str().contains("a.png&quot;onload=&quot;x"));
    }
}
