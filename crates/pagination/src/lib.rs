//! # Folio Pagination
//!
//! Compact page-number windows for paged post listings.
//!
//! The window always keeps the first page, the last page and the immediate
//! neighbours of the current page reachable. Pages close to either edge are
//! listed one by one; longer runs collapse into an ellipsis.
//!
//! ## Example
//!
//! ```rust
//! use folio_pagination::{compute_window, PageLabel};
//!
//! let labels = compute_window(3, 10).unwrap();
//! assert_eq!(
//!     labels,
//!     vec![
//!         PageLabel::Page(1),
//!         PageLabel::Page(2),
//!         PageLabel::Page(3),
//!         PageLabel::Page(4),
//!         PageLabel::Ellipsis,
//!         PageLabel::Page(10),
//!     ]
//! );
//! ```
//!
//! Rendering the navigation block goes through [`Pagination`], which also
//! decides whether a listing needs navigation at all:
//!
//! ```rust
//! use folio_pagination::{render_nav, NavLabels, Pagination, QueryLinker};
//!
//! let linker = QueryLinker::new("https://example.org/");
//! if let Some(pagination) = Pagination::for_query(2, 5).unwrap() {
//!     let html = render_nav(&pagination, &linker, &NavLabels::default());
//!     assert!(html.contains("is-current"));
//! }
//! ```

mod error;
mod escape;
mod nav;
mod window;

pub use error::{PaginationError, Result};
pub use escape::escape_html;
pub use nav::{render_nav, NavLabels, PageLinker, Pagination, PrettyLinker, QueryLinker};
pub use window::{compute_window, PageLabel, NEAR_END, NEAR_START};
