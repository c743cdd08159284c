use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Elements dropped together with their body
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// A hyperlink found in post content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorLink {
    /// Full `<a ...>text</a>` markup as written in the content
    pub markup: String,

    /// Value of the `href` attribute
    pub href: String,

    /// Visible anchor text
    pub text: String,
}

fn anchor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"<a.*?href="(.*?)".*?>(.*?)</a>"#).expect("anchor pattern is valid")
    })
}

/// Extract every hyperlink of `html`, in document order.
///
/// Other markup is stripped first so anchor text never carries nested tags.
/// Anchors spanning several lines or missing their closing tag are not matched.
pub fn extract_links(html: &str) -> Vec<AnchorLink> {
    let with_links = strip_tags(html, &["a"]);
    anchor_pattern()
        .captures_iter(&with_links)
        .map(|caps| AnchorLink {
            markup: caps[0].to_string(),
            href: caps[1].to_string(),
            text: caps[2].to_string(),
        })
        .collect()
}

/// Remove every tag of `html` and trim the result
pub fn strip_all_tags(html: &str) -> String {
    strip_tags(html, &[]).trim().to_string()
}

/// Remove tags from `html`, keeping those whose name is listed in `allowed`.
///
/// Comments are dropped, and `<script>`/`<style>` elements lose their body
/// too unless allowed. A `<` that does not open a tag is kept as text; an
/// unterminated tag swallows the rest of the input.
pub fn strip_tags(html: &str, allowed: &[&str]) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some(offset) = html[pos..].find('<') {
        let start = pos + offset;
        out.push_str(&html[pos..start]);
        let rest = &html[start..];

        if rest.starts_with("<!--") {
            pos = rest
                .find("-->")
                .map_or(html.len(), |end| start + end + "-->".len());
            continue;
        }

        if !opens_tag(rest) {
            out.push('<');
            pos = start + 1;
            continue;
        }

        let Some(close) = tag_end(rest) else {
            pos = html.len();
            break;
        };
        let tag = &rest[..=close];
        let (name, closing) = tag_name(tag);
        pos = start + close + 1;

        if allowed.iter().any(|a| a.eq_ignore_ascii_case(&name)) {
            out.push_str(tag);
        } else if !closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            pos = skip_element_body(html, pos, &name);
        }
    }

    out.push_str(&html[pos..]);
    out
}

/// Offset of the `>` closing the tag at the start of `rest`.
///
/// A `>` inside a quoted attribute value does not close the tag.
fn tag_end(rest: &str) -> Option<usize> {
    let mut quote = None;
    for (idx, ch) in rest.char_indices().skip(1) {
        match (quote, ch) {
            (Some(open), _) if ch == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '>') => return Some(idx),
            (None, _) => {}
        }
    }
    None
}

fn opens_tag(rest: &str) -> bool {
    rest[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?')
}

/// Lowercased element name of `tag` and whether it is a closing tag
fn tag_name(tag: &str) -> (String, bool) {
    let inner = tag.trim_start_matches('<');
    let closing = inner.starts_with('/');
    let name = inner
        .trim_start_matches('/')
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();
    (name, closing)
}

/// Position right after the `</name>` closing `name`, or the end of `html`
fn skip_element_body(html: &str, from: usize, name: &str) -> usize {
    let needle = format!("</{name}");
    let haystack = html[from..].to_ascii_lowercase();
    let Some(offset) = haystack.find(&needle) else {
        return html.len();
    };
    let close_start = from + offset;
    html[close_start..]
        .find('>')
        .map_or(html.len(), |end| close_start + end + 1)
}
