//! Listing layouts.
//!
//! ```text
//! DisplayMode
//!     ├─> Cards      one card per post, footer with author / read more / date
//!     ├─> Tiles      rows of three tiles; home page opens with a promoted box
//!     └─> Condensed  home only: slideshow + promoted category columns
//! ```

mod cards;
mod condensed;
pub(crate) mod single;
mod tiles;

use crate::context::RenderContext;
use crate::error::Result;
use crate::model::{CategoryListing, PostPage};
use crate::settings::CategoryId;
use folio_pagination::{render_nav, PageLinker, Pagination};
use serde::{Deserialize, Serialize};

/// How a listing is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Cards,
    Tiles,
    Condensed,
}

impl DisplayMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Tiles => "tiles",
            Self::Condensed => "condensed",
        }
    }

    /// Render `listing` with this layout
    pub fn render(self, listing: &Listing<'_>, ctx: &mut RenderContext<'_>) -> Result<Rendered> {
        log::debug!(
            "Rendering {} posts as {} (home={})",
            listing.page.posts.len(),
            self.as_str(),
            listing.home
        );
        match self {
            Self::Condensed => Ok(condensed::render(listing, ctx)),
            _ if listing.page.is_empty() => Ok(Rendered::default()),
            Self::Cards => cards::render(listing, ctx),
            Self::Tiles => tiles::render(listing, ctx),
        }
    }
}

/// Everything a layout needs to render one listing page
pub struct Listing<'a> {
    pub page: &'a PostPage,

    /// Promoted category contents available to the layout
    pub promoted: Vec<&'a CategoryListing>,

    pub linker: &'a dyn PageLinker,

    /// Home page rather than a category/archive/search listing
    pub home: bool,
}

impl<'a> Listing<'a> {
    pub fn new(page: &'a PostPage, linker: &'a dyn PageLinker) -> Self {
        Self {
            page,
            promoted: Vec::new(),
            linker,
            home: false,
        }
    }

    #[must_use]
    pub const fn home(mut self, home: bool) -> Self {
        self.home = home;
        self
    }

    #[must_use]
    pub fn promoted(mut self, listing: &'a CategoryListing) -> Self {
        self.promoted.push(listing);
        self
    }

    /// Promoted listing for a configured category, if the host supplied it
    #[must_use]
    pub fn promoted_by_id(&self, id: Option<CategoryId>) -> Option<&'a CategoryListing> {
        let id = id?;
        self.promoted.iter().copied().find(|listing| listing.id == id)
    }
}

/// Output of a layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,

    /// Posts of the page that made it into `html`
    pub posts_shown: usize,
}

/// Append the pagination card when the query spans several pages
fn push_pagination(html: &mut String, listing: &Listing<'_>, ctx: &RenderContext<'_>) -> Result<()> {
    let page = listing.page;
    if let Some(pagination) = Pagination::for_query(page.current_page, page.max_page)? {
        html.push_str(&render_nav(
            &pagination,
            listing.linker,
            &ctx.theme().labels().nav,
        ));
    }
    Ok(())
}
