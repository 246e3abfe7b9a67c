//! Inline SVG markup for icon identifiers.

use crate::core::icons::{Glyph, IconRef};

const STROKE_ATTRS: &str = r#"fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#;

fn glyph_body(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Laptop => r#"<rect x="3" y="4" width="18" height="12" rx="2"/><path d="M2 20h20"/>"#,
        Glyph::TrendingUp => r#"<path d="M22 7l-8.5 8.5-5-5L2 17"/><path d="M16 7h6v6"/>"#,
        Glyph::Factory => r#"<path d="M2 20V8l6 4V8l6 4V4h8v16z"/><path d="M2 20h20"/>"#,
        Glyph::Building => r#"<rect x="4" y="2" width="16" height="20" rx="2"/><path d="M9 22v-4h6v4M8 6h.01M16 6h.01M12 6h.01M8 10h.01M16 10h.01M12 10h.01M8 14h.01M16 14h.01M12 14h.01"/>"#,
        Glyph::Users => r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        Glyph::Zap => r#"<path d="M13 2L3 14h9l-1 8 10-12h-9l1-8z"/>"#,
        Glyph::Clock => r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#,
        Glyph::CheckCircle => r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="M22 4L12 14.01l-3-3"/>"#,
        Glyph::Terminal => r#"<path d="M4 17l6-6-6-6"/><path d="M12 19h8"/>"#,
        Glyph::Mail => r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="M22 7l-10 6L2 7"/>"#,
        Glyph::Phone => r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
        Glyph::MapPin => r#"<path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"/><circle cx="12" cy="10" r="3"/>"#,
        Glyph::Globe => r#"<circle cx="12" cy="12" r="10"/><path d="M2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>"#,
        Glyph::Github => r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/>"#,
        Glyph::Linkedin => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/>"#,
        Glyph::ExternalLink => r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><path d="M15 3h6v6M10 14L21 3"/>"#,
        Glyph::Calendar => r#"<rect x="3" y="4" width="18" height="18" rx="2"/><path d="M16 2v4M8 2v4M3 10h18"/>"#,
        Glyph::Download => r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="M7 10l5 5 5-5M12 15V3"/>"#,
        Glyph::Menu => r#"<path d="M3 12h18M3 6h18M3 18h18"/>"#,
    }
}

/// Stroke glyph sized by `size` pixels, colored by the surrounding text.
pub fn glyph_svg(glyph: Glyph, size: u32) -> String {
    format!(
        r#"<svg class="glyph" width="{size}" height="{size}" viewBox="0 0 24 24" {STROKE_ATTRS} aria-hidden="true">{}</svg>"#,
        glyph_body(glyph)
    )
}

/// Brand-colored monogram badge for a registry icon.
///
/// [`IconRef::NONE`] and unregistered references render the terminal glyph.
pub fn tech_icon_svg(icon: IconRef, size: u32) -> String {
    let Some(entry) = icon.lookup() else {
        return glyph_svg(Glyph::Terminal, size);
    };
    let monogram = monogram(entry.title);
    let fill = if is_light(entry.hex) { "#111827" } else { "#ffffff" };
    let font_size = if monogram.chars().count() > 1 { 10 } else { 13 };
    format!(
        concat!(
            r#"<svg class="tech-icon" width="{size}" height="{size}" viewBox="0 0 24 24" role="img" aria-label="{title}">"#,
            r##"<rect width="24" height="24" rx="5" fill="#{hex}"/>"##,
            r#"<text x="12" y="16" text-anchor="middle" font-family="Arial, sans-serif" font-weight="700" font-size="{font_size}" fill="{fill}">{monogram}</text>"#,
            "</svg>"
        ),
        size = size,
        title = escape_xml(entry.title),
        hex = entry.hex,
        font_size = font_size,
        fill = fill,
        monogram = escape_xml(&monogram),
    )
}

/// First letters of up to two words, or the first two characters of a
/// single-word title.
fn monogram(title: &str) -> String {
    let words: Vec<&str> = title
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter(|w| !w.is_empty())
        .collect();
    match words.as_slice() {
        [] => "?".to_string(),
        [only] => only.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    }
}

fn is_light(hex: &str) -> bool {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .map(f32::from)
            .unwrap_or(0.0)
    };
    let luma = 0.299 * channel(0..2) + 0.587 * channel(2..4) + 0.114 * channel(4..6);
    luma > 160.0
}

pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_renders_terminal() {
        assert_eq!(tech_icon_svg(IconRef::NONE, 16), glyph_svg(Glyph::Terminal, 16));
    }

    #[test]
    fn test_tech_icon_uses_brand_color() {
        let svg = tech_icon_svg(IconRef::from_slug("docker"), 16);
        assert!(svg.contains("#2496ED"));
        assert!(svg.contains(r#"aria-label="Docker""#));
        assert!(svg.contains(">Do</text>"));
    }

    #[test]
    fn test_monogram() {
        assert_eq!(monogram("Node.js"), "Nj");
        assert_eq!(monogram("Tailwind CSS"), "TC");
        assert_eq!(monogram("C#"), "C#");
        assert_eq!(monogram(""), "?");
    }

    #[test]
    fn test_light_brand_gets_dark_text() {
        assert!(is_light("F7DF1E"));
        assert!(!is_light("000000"));
        let svg = tech_icon_svg(IconRef::from_slug("javascript"), 16);
        assert!(svg.contains(r##"fill="#111827""##));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
