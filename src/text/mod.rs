// src/text/mod.rs
//! Text sanitization helpers shared by the transforms and the renderer.
//!
//! WordPress hands back titles with HTML entities, excerpts wrapped in
//! markup, and article bodies whose headings carry no anchors. Everything
//! here is best-effort string surgery over rendered HTML; no attempt is
//! made to parse malformed markup.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static NAMED_ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&([a-zA-Z]+);").unwrap());
static DECIMAL_ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#(\d+);").unwrap());
static HEX_ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#x([0-9a-fA-F]+);").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static RESIDUAL_ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&[^;]+;").unwrap());

/// Named entities WordPress commonly emits in titles and excerpts.
fn named_entity(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "rsquo" | "lsquo" | "apos" => Some("'"),
        "rdquo" | "ldquo" | "quot" => Some("\""),
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "nbsp" => Some(" "),
        "mdash" => Some("—"),
        "ndash" => Some("–"),
        _ => None,
    }
}

/// Maps a numeric entity code point to its literal character.
///
/// Typographic quotes normalize to their ASCII counterparts; anything
/// else decodes via direct code-point conversion. Invalid code points
/// leave the entity untouched.
fn decode_code_point(code: u32) -> Option<String> {
    match code {
        0x2019 | 0x2018 | 0x27 => Some("'".to_string()),
        0x201C | 0x201D => Some("\"".to_string()),
        0xA0 => Some(" ".to_string()),
        _ => char::from_u32(code).map(|c| c.to_string()),
    }
}

/// Decodes HTML entities into literal characters.
///
/// Handles named entities (`&rsquo;`, `&amp;`, …), decimal numeric
/// entities (`&#8217;`) and hexadecimal numeric entities (`&#x2019;`).
/// Unrecognized named entities pass through unchanged. Decoding an
/// already-decoded string is a no-op.
pub fn decode_entities(text: &str) -> String {
    if text.is_empty() {
        return text.to_string();
    }

    let decoded = NAMED_ENTITY_RE.replace_all(text, |caps: &Captures| {
        named_entity(&caps[1])
            .map(str::to_string)
            .unwrap_or_else(|| caps[0].to_string())
    });

    let decoded = DECIMAL_ENTITY_RE.replace_all(&decoded, |caps: &Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(decode_code_point)
            .unwrap_or_else(|| caps[0].to_string())
    });

    let decoded = HEX_ENTITY_RE.replace_all(&decoded, |caps: &Captures| {
        u32::from_str_radix(&caps[1], 16)
            .ok()
            .and_then(decode_code_point)
            .unwrap_or_else(|| caps[0].to_string())
    });

    decoded.into_owned()
}

/// Removes all `<...>` tag spans from a string.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Derives plain summary text from a rendered excerpt: tags removed,
/// residual entities collapsed to spaces, surrounding whitespace trimmed.
pub fn plain_excerpt(html: &str) -> String {
    let stripped = strip_tags(html);
    RESIDUAL_ENTITY_RE
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Decodes entities then strips markup, yielding the visible text of an
/// HTML fragment. Used on heading contents before slugging.
pub fn visible_text(html: &str) -> String {
    if html.is_empty() {
        return html.to_string();
    }
    strip_tags(&decode_entities(html)).trim().to_string()
}

/// Derives a URL-safe anchor slug from heading text.
///
/// `&` becomes the word "and", the rest transliterates to lowercase
/// ASCII joined by single hyphens.
pub fn slugify(text: &str) -> String {
    slug::slugify(text.replace('&', " and "))
}

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(h[2-6])([^>]*?)>(.*?)</h[2-6]>").unwrap());
static ID_ATTR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)id\s*=\s*["'][^"']+["']"#).unwrap());

/// Injects `id` attributes into `<h2>`–`<h6>` headings that lack one,
/// enabling in-page anchor navigation over backend-rendered HTML.
///
/// The id is the slug of the heading's visible text; duplicate slugs
/// within one document get `-1`, `-2`, … suffixes in encounter order.
/// Headings that already carry an id, or whose text slugs to nothing,
/// are left untouched.
pub fn inject_heading_ids(html: &str) -> String {
    if html.is_empty() {
        return html.to_string();
    }

    let mut seen: HashMap<String, u32> = HashMap::new();

    HEADING_RE
        .replace_all(html, |caps: &Captures| {
            let tag = &caps[1];
            let attributes = &caps[2];
            let content = &caps[3];

            if ID_ATTR_RE.is_match(attributes) {
                return caps[0].to_string();
            }

            let text = visible_text(content);
            if text.is_empty() {
                return caps[0].to_string();
            }

            let mut anchor = slugify(&text);
            match seen.get_mut(&anchor) {
                Some(count) => {
                    *count += 1;
                    anchor = format!("{}-{}", anchor, count);
                }
                None => {
                    seen.insert(anchor.clone(), 0);
                }
            }

            let attributes = attributes.trim();
            if attributes.is_empty() {
                format!("<{} id=\"{}\">{}</{}>", tag, anchor, content, tag)
            } else {
                format!("<{} {} id=\"{}\">{}</{}>", tag, attributes, anchor, content, tag)
            }
        })
        .into_owned()
}
