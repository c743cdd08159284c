use crate::error::{ExcerptError, Result};
use crate::markup::{extract_links, strip_all_tags, AnchorLink};
use crate::wrap::first_line;
use serde::{Deserialize, Serialize};

/// Appended to every truncated excerpt
pub const ELLIPSIS: &str = " […]";

/// Posts shorter than this many characters are "small", whatever the budget
pub const SMALL_POST_THRESHOLD: usize = 300;

/// Character budget used when none is configured
pub const DEFAULT_BUDGET: usize = 300;

/// A rendered excerpt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptResult {
    /// Excerpt text, with surviving hyperlinks restored
    pub text: String,

    /// The full post is short enough that a "read more" link adds nothing
    pub is_small: bool,

    /// The text was cut and ends with [`ELLIPSIS`]
    pub truncated: bool,
}

impl ExcerptResult {
    /// Wrap an excerpt written by hand (or generated by the host) for `content`.
    ///
    /// The post counts as small when the excerpt already shows all of it.
    pub fn from_manual(excerpt: &str, content: &str) -> Self {
        let shown = strip_all_tags(excerpt).chars().count();
        let total = strip_all_tags(content).chars().count();
        Self {
            text: excerpt.to_string(),
            is_small: shown == total,
            truncated: shown < total,
        }
    }
}

/// Builds excerpts cut at a character budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcerptBuilder {
    budget: usize,
}

impl Default for ExcerptBuilder {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
        }
    }
}

impl ExcerptBuilder {
    /// Create a builder cutting at `budget` characters
    pub fn new(budget: usize) -> Result<Self> {
        if budget == 0 {
            log::warn!("Rejected excerpt budget of 0 characters");
            return Err(ExcerptError::invalid_argument("budget must be > 0"));
        }
        Ok(Self { budget })
    }

    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Build the excerpt of `content` (post HTML).
    ///
    /// The visible text is cut on a word boundary at the budget, then the
    /// hyperlinks whose anchor text survived the cut are put back in place.
    pub fn build(&self, content: &str) -> ExcerptResult {
        let links = extract_links(content);
        let plain = strip_all_tags(content);
        let length = plain.chars().count();
        let is_small = length < SMALL_POST_THRESHOLD;

        let truncated = length > self.budget;
        let mut text = if truncated {
            first_line(&plain, self.budget).to_string()
        } else {
            plain
        };

        let restored = restore_links(&mut text, &links);
        if truncated {
            text.push_str(ELLIPSIS);
        }

        log::debug!(
            "Excerpt built: {length} chars, budget {}, truncated={truncated}, links {restored}/{}",
            self.budget,
            links.len()
        );

        ExcerptResult {
            text,
            is_small,
            truncated,
        }
    }
}

/// Put links back over their anchor text, in document order.
///
/// Each search starts after the previously restored link. The first anchor
/// text that cannot be found ends the pass: later links sit further into the
/// document and were cut as well. Returns the number of restored links.
fn restore_links(text: &mut String, links: &[AnchorLink]) -> usize {
    let mut cursor = 0;
    let mut restored = 0;

    for link in links {
        if link.text.is_empty() {
            continue;
        }
        let Some(offset) = text[cursor..].find(link.text.as_str()) else {
            log::debug!("Anchor text {:?} cut from excerpt", link.text);
            break;
        };
        let start = cursor + offset;
        text.replace_range(start..start + link.text.len(), &link.markup);
        cursor = start + link.markup.len();
        restored += 1;
    }

    restored
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filler(words: usize) -> String {
        vec!["lorem"; words].join(" ")
    }

    #[test]
    fn test_rejects_zero_budget() {
        assert!(matches!(
            ExcerptBuilder::new(0),
            Err(ExcerptError::InvalidArgument(_))
        ));
        assert_eq!(ExcerptBuilder::default().budget(), DEFAULT_BUDGET);
    }

    #[test]
    fn test_short_content_kept_whole() {
        let content = format!("<p>{}</p>", filler(40));
        let result = ExcerptBuilder::default().build(&content);

        assert_eq!(result.text, filler(40));
        assert!(result.is_small);
        assert!(!result.truncated);
    }

    #[test]
    fn test_long_content_cut_on_word_boundary() {
        // 100 words of 5 chars + 99 spaces = 599 chars
        let result = ExcerptBuilder::default().build(&filler(100));

        // 50 words fill 299 chars; the 51st would overrun
        assert_eq!(result.text, format!("{}{ELLIPSIS}", filler(50)));
        assert!(!result.is_small);
        assert!(result.truncated);
    }

    #[test]
    fn test_small_flag_ignores_budget() {
        let builder = ExcerptBuilder::new(20).unwrap();
        let result = builder.build(&filler(10));

        assert!(result.truncated);
        assert!(result.is_small);
        assert_eq!(result.text, format!("lorem lorem lorem{ELLIPSIS}"));
    }

    #[test]
    fn test_large_budget_keeps_large_post() {
        let builder = ExcerptBuilder::new(1000).unwrap();
        let result = builder.build(&filler(100));

        assert!(!result.truncated);
        assert!(!result.is_small);
    }

    #[test]
    fn test_restore_links_in_sequence() {
        let links = vec![
            AnchorLink {
                markup: r#"<a href="/1">docs</a>"#.to_string(),
                href: "/1".to_string(),
                text: "docs".to_string(),
            },
            AnchorLink {
                markup: r#"<a href="/2">docs</a>"#.to_string(),
                href: "/2".to_string(),
                text: "docs".to_string(),
            },
        ];
        let mut text = "read docs then more docs".to_string();
        assert_eq!(restore_links(&mut text, &links), 2);
        assert_eq!(
            text,
            r#"read <a href="/1">docs</a> then more <a href="/2">docs</a>"#
        );
    }

    #[test]
    fn test_restore_stops_at_first_missing_anchor() {
        let links = vec![
            AnchorLink {
                markup: r#"<a href="/gone">vanished</a>"#.to_string(),
                href: "/gone".to_string(),
                text: "vanished".to_string(),
            },
            AnchorLink {
                markup: r#"<a href="/here">present</a>"#.to_string(),
                href: "/here".to_string(),
                text: "present".to_string(),
            },
        ];
        let mut text = "present but unlinked".to_string();
        assert_eq!(restore_links(&mut text, &links), 0);
        assert_eq!(text, "present but unlinked");
    }

    #[test]
    fn test_restore_skips_link_without_text() {
        let links = vec![
            AnchorLink {
                markup: r#"<a href="/icon"></a>"#.to_string(),
                href: "/icon".to_string(),
                text: String::new(),
            },
            AnchorLink {
                markup: r#"<a href="/here">present</a>"#.to_string(),
                href: "/here".to_string(),
                text: "present".to_string(),
            },
        ];
        let mut text = "link present".to_string();
        assert_eq!(restore_links(&mut text, &links), 1);
        assert_eq!(text, r#"link <a href="/here">present</a>"#);
    }

    #[test]
    fn test_manual_excerpt() {
        let content = "<p>Short and complete.</p>";
        let whole = ExcerptResult::from_manual("Short and complete.", content);
        assert!(whole.is_small);
        assert!(!whole.truncated);

        let partial = ExcerptResult::from_manual("Short…", "<p>Short and much longer.</p>");
        assert!(!partial.is_small);
        assert!(partial.truncated);
        assert_eq!(partial.text, "Short…");
    }
}
