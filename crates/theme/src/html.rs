//! Small HTML helpers shared by the layouts.
//!
//! Titles, bodies and excerpts are HTML produced by the host and are written
//! as-is. Plain-text fields (names, dates) and attribute values are escaped.

use crate::model::Post;
use std::fmt::Write as _;

pub use folio_pagination::escape_html as escape;

/// `<a>` to the post wrapping `label` (HTML)
pub fn permalink(post: &Post, label: &str) -> String {
    format!(r#"<a href="{}">{label}</a>"#, escape(&post.permalink))
}

/// Category tags of a post
pub fn push_categories(html: &mut String, post: &Post) {
    html.push_str(r#"<span class="tags">"#);
    for name in &post.categories {
        let _ = write!(html, r#"<span class="tag">{}</span>"#, escape(name));
    }
    html.push_str("</span>");
}

/// Dated list entry used by promoted category boxes
pub fn push_list_item(html: &mut String, post: &Post) {
    let _ = write!(
        html,
        r#"<li><span class="tag">{}</span> - {}</li>"#,
        escape(&post.date),
        permalink(post, &post.title)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_permalink_keeps_label_markup() {
        let post = Post {
            permalink: "/a?b=1&c=2".to_string(),
            ..Default::default()
        };
        assert_eq!(
            permalink(&post, "<em>Hi</em>"),
            r#"<a href="/a?b=1&amp;c=2"><em>Hi</em></a>"#
        );
    }

    #[test]
    fn test_list_item() {
        let post = Post {
            title: "News".to_string(),
            permalink: "/news".to_string(),
            date: "01/02/2024".to_string(),
            ..Default::default()
        };
        let mut html = String::new();
        push_list_item(&mut html, &post);
        assert_eq!(
            html,
            r#"<li><span class="tag">01/02/2024</span> - <a href="/news">News</a></li>"#
        );
    }
}
