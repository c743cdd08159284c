//! # Folio Excerpt
//!
//! Post previews cut at a character budget without losing their links.
//!
//! ## Pipeline
//!
//! ```text
//! Post HTML
//!     │
//!     ├──> Link extraction (tags other than <a> stripped, then matched)
//!     │
//!     ├──> Plain text (all markup stripped)
//!     │    └─> "small post" check against a fixed 300-character threshold
//!     │
//!     ├──> Word-boundary cut at the budget (only when the text is longer)
//!     │
//!     └──> Link restoration, in document order, until one anchor is missing
//!          └─> " […]" appended to cut excerpts
//! ```
//!
//! ## Example
//!
//! ```rust
//! use folio_excerpt::ExcerptBuilder;
//!
//! let builder = ExcerptBuilder::new(300).unwrap();
//! let result = builder.build(r#"<p>Read the <a href="/guide">guide</a> first.</p>"#);
//!
//! assert_eq!(result.text, r#"Read the <a href="/guide">guide</a> first."#);
//! assert!(result.is_small);
//! assert!(!result.truncated);
//! ```

mod builder;
mod error;
mod markup;
mod wrap;

pub use builder::{
    ExcerptBuilder, ExcerptResult, DEFAULT_BUDGET, ELLIPSIS, SMALL_POST_THRESHOLD,
};
pub use error::{ExcerptError, Result};
pub use markup::{extract_links, strip_all_tags, strip_tags, AnchorLink};
