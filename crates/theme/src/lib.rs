//! # Folio Theme
//!
//! Typed site settings and the Bulma layouts that turn a page of posts into
//! HTML.
//!
//! ## Architecture
//!
//! ```text
//! ThemeSettings (JSON / TOML)
//!     │
//!     └──> Theme::init ──> validated once at startup
//!              │
//!              └──> RenderContext (one per request)
//!                       ├─> assets injected at most once
//!                       ├─> render_listing(Listing) ──> DisplayMode::render
//!                       │        ├─> excerpts (folio-excerpt)
//!                       │        └─> navigation (folio-pagination)
//!                       └─> render_single(Post)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use folio_pagination::QueryLinker;
//! use folio_theme::{Listing, Post, PostPage, Theme, ThemeSettings};
//!
//! let theme = Theme::init(ThemeSettings::default()).unwrap();
//! let page = PostPage {
//!     posts: vec![Post {
//!         title: "Hello".to_string(),
//!         permalink: "/hello".to_string(),
//!         content: "<p>First post.</p>".to_string(),
//!         ..Default::default()
//!     }],
//!     current_page: 1,
//!     max_page: 1,
//! };
//! let linker = QueryLinker::new("/");
//!
//! let mut ctx = theme.context();
//! let rendered = ctx.render_listing(&Listing::new(&page, &linker)).unwrap();
//! assert_eq!(rendered.posts_shown, 1);
//! assert!(rendered.html.contains(r#"<a href="/hello">Hello</a>"#));
//! ```

mod context;
mod error;
pub mod html;
mod layout;
mod model;
mod settings;

pub use context::{RenderContext, Theme, ThemeLabels};
pub use error::{Result, ThemeError};
pub use layout::{DisplayMode, Listing, Rendered};
pub use model::{CategoryListing, Post, PostPage};
pub use settings::{CategoryId, PostDataLocation, ThemeSettings};
