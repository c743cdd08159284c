use crate::error::Result;
use crate::settings::CategoryId;
use folio_pagination::PaginationError;
use serde::{Deserialize, Serialize};

/// A post or page as supplied by the host CMS
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: u64,

    /// Title HTML
    pub title: String,

    pub permalink: String,

    /// Author display name
    pub author: String,

    /// Publication date, already formatted for display
    pub date: String,

    /// Category names
    pub categories: Vec<String>,

    pub thumbnail_url: Option<String>,

    /// Body HTML
    pub content: String,

    /// Excerpt written by hand in the host, if any
    pub manual_excerpt: Option<String>,
}

/// One page of a host query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,

    /// 1-indexed
    pub current_page: usize,

    /// `0` or `1` when the query fits on a single page
    pub max_page: usize,
}

impl PostPage {
    /// Slice page `page` out of the full, already ordered result set
    pub fn paginate(mut all: Vec<Post>, per_page: usize, page: usize) -> Result<Self> {
        if per_page == 0 {
            return Err(PaginationError::invalid_argument("per_page must be > 0").into());
        }
        let max_page = all.len().div_ceil(per_page);
        if page == 0 || page > max_page.max(1) {
            return Err(PaginationError::invalid_argument(format!(
                "page {page} is outside 1..={}",
                max_page.max(1)
            ))
            .into());
        }

        all.drain(..(per_page * (page - 1)).min(all.len()));
        all.truncate(per_page);
        Ok(Self {
            posts: all,
            current_page: page,
            max_page,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Latest posts of a promoted category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListing {
    pub id: CategoryId,
    pub name: String,
    pub posts: Vec<Post>,
}
