use crate::error::Result;
use crate::escape::escape_html;
use crate::window::{compute_window, PageLabel};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Turns a page number into a destination URL
pub trait PageLinker {
    fn page_url(&self, page: usize) -> String;
}

/// `?paged=N` links, the default permalink structure of the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLinker {
    base: String,
}

impl QueryLinker {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl PageLinker for QueryLinker {
    fn page_url(&self, page: usize) -> String {
        if page <= 1 {
            return self.base.clone();
        }
        let sep = if self.base.contains('?') { '&' } else { '?' };
        format!("{}{sep}paged={page}", self.base)
    }
}

/// `/page/N/` links, used with pretty permalinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyLinker {
    base: String,
}

impl PrettyLinker {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl PageLinker for PrettyLinker {
    fn page_url(&self, page: usize) -> String {
        if page <= 1 {
            format!("{}/", self.base)
        } else {
            format!("{}/page/{page}/", self.base)
        }
    }
}

/// Translatable texts of the navigation block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLabels {
    pub previous: String,
    pub next: String,
    /// Prefix of each page link's `aria-label`
    pub goto_page: String,
}

impl Default for NavLabels {
    fn default() -> Self {
        Self {
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            goto_page: "Goto page".to_string(),
        }
    }
}

/// Pagination state for one rendered listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub max_page: usize,
    pub labels: Vec<PageLabel>,
}

impl Pagination {
    /// Build the navigation state for a query result.
    ///
    /// Returns `Ok(None)` when there is nothing to paginate (`max_page <= 1`).
    pub fn for_query(current_page: usize, max_page: usize) -> Result<Option<Self>> {
        if max_page <= 1 {
            log::debug!("Pagination hidden: max_page={max_page}");
            return Ok(None);
        }
        let labels = compute_window(current_page, max_page)?;
        Ok(Some(Self {
            current_page,
            max_page,
            labels,
        }))
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.max_page
    }

    #[must_use]
    pub const fn previous_page(&self) -> Option<usize> {
        if self.has_previous() {
            Some(self.current_page - 1)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn next_page(&self) -> Option<usize> {
        if self.has_next() {
            Some(self.current_page + 1)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_current(&self, label: PageLabel) -> bool {
        matches!(label, PageLabel::Page(page) if page == self.current_page)
    }
}

/// Render the Bulma `nav.pagination` card for `pagination`
pub fn render_nav(pagination: &Pagination, linker: &dyn PageLinker, labels: &NavLabels) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div id="pagination" class="card"><div class="card-content">"#);
    html.push_str(
        r#"<nav class="pagination is-centered" role="navigation" aria-label="pagination">"#,
    );

    push_step_link(
        &mut html,
        "pagination-previous",
        pagination.previous_page().map(|page| linker.page_url(page)),
        &labels.previous,
    );
    push_step_link(
        &mut html,
        "pagination-next",
        pagination.next_page().map(|page| linker.page_url(page)),
        &labels.next,
    );

    html.push_str(r#"<ul class="pagination-list">"#);
    for &label in &pagination.labels {
        html.push_str("<li>");
        match label {
            PageLabel::Ellipsis => {
                html.push_str(r#"<span class="pagination-ellipsis">&hellip;</span>"#);
            }
            PageLabel::Page(page) => {
                let goto = escape_html(&labels.goto_page);
                let href = escape_html(&linker.page_url(page));
                if pagination.is_current(label) {
                    let _ = write!(
                        html,
                        r#"<a class="pagination-link is-current" aria-label="{goto} {page}" aria-current="page" href="{href}">{page}</a>"#
                    );
                } else {
                    let _ = write!(
                        html,
                        r#"<a class="pagination-link" aria-label="{goto} {page}" href="{href}">{page}</a>"#
                    );
                }
            }
        }
        html.push_str("</li>");
    }
    html.push_str("</ul></nav></div></div>");
    html
}

fn push_step_link(html: &mut String, class: &str, url: Option<String>, text: &str) {
    match url {
        Some(url) => {
            let _ = write!(html, r#"<a class="{class}" href="{}">"#, escape_html(&url));
        }
        None => {
            let _ = write!(html, r#"<a class="{class}" disabled>"#);
        }
    }
    html.push_str(text);
    html.push_str("</a>");
}
