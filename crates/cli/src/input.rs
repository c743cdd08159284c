use anyhow::{Context as AnyhowContext, Result};
use folio_theme::{CategoryListing, Post, PostPage};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Posts file: either one page of a query or the full ordered result set
#[derive(Deserialize)]
#[serde(untagged)]
enum PostsInput {
    Page(PostPage),
    All(Vec<Post>),
}

/// Load the page to render; full result sets are paginated here
pub(crate) fn load_page(path: &Path, per_page: usize, page: usize) -> Result<PostPage> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let input: PostsInput = serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is neither a post page nor a post list", path.display()))?;

    match input {
        PostsInput::Page(page) => Ok(page),
        PostsInput::All(posts) => {
            log::debug!("Paginating {} posts, {per_page} per page", posts.len());
            PostPage::paginate(posts, per_page, page).context("Failed to paginate posts")
        }
    }
}

pub(crate) fn load_promoted(path: &Path) -> Result<CategoryListing> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a category listing", path.display()))
}

/// Read a whole file, or stdin when no path is given
pub(crate) fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
