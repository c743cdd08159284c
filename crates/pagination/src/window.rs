use crate::error::{PaginationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pages before the current one are listed densely while `current_page` is below this
pub const NEAR_START: usize = 5;

/// Pages after the current one are listed densely while `current_page + NEAR_END >= max_page`
pub const NEAR_END: usize = 3;

/// One entry of a pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLabel {
    /// A clickable page number (1-indexed)
    Page(usize),

    /// An omitted range of pages
    Ellipsis,
}

impl PageLabel {
    /// Page number, `None` for an ellipsis
    #[must_use]
    pub const fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    #[must_use]
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

/// Prints the page number, or an empty string for an ellipsis
impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => Ok(()),
        }
    }
}

/// Compute the labels shown around `current_page`.
///
/// The first page and the predecessor are always reachable, as are the
/// successor and the last page. Short distances to either edge are listed
/// densely instead of being collapsed into an ellipsis:
///
/// ```text
/// current=3,  max=10  ->  1 2 [3] 4 … 10
/// current=7,  max=8   ->  1 … 6 [7] 8
/// current=12, max=30  ->  1 … 11 [12] 13 … 30
/// ```
///
/// Callers hide the navigation entirely when `max_page <= 1`; this function
/// still answers `[1]` for `current_page == max_page == 1`.
pub fn compute_window(current_page: usize, max_page: usize) -> Result<Vec<PageLabel>> {
    if current_page == 0 {
        log::warn!("Rejected pagination window request for page 0");
        return Err(PaginationError::invalid_argument(
            "current_page must be >= 1",
        ));
    }
    if current_page > max_page {
        log::warn!("Rejected pagination window request for page {current_page} of {max_page}");
        return Err(PaginationError::invalid_argument(format!(
            "current_page ({current_page}) cannot exceed max_page ({max_page})"
        )));
    }

    let mut labels = Vec::with_capacity(7);

    if current_page > 1 {
        if current_page < NEAR_START {
            labels.extend((1..current_page).map(PageLabel::Page));
        } else {
            labels.push(PageLabel::Page(1));
            labels.push(PageLabel::Ellipsis);
            labels.push(PageLabel::Page(current_page - 1));
        }
    }

    labels.push(PageLabel::Page(current_page));

    if current_page < max_page {
        if current_page + NEAR_END >= max_page {
            labels.extend((current_page + 1..=max_page).map(PageLabel::Page));
        } else {
            labels.push(PageLabel::Page(current_page + 1));
            labels.push(PageLabel::Ellipsis);
            labels.push(PageLabel::Page(max_page));
        }
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use PageLabel::{Ellipsis, Page};

    #[test]
    fn test_dense_start_collapsed_end() {
        assert_eq!(
            compute_window(3, 10).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_collapsed_start_dense_end() {
        assert_eq!(
            compute_window(7, 8).unwrap(),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8)]
        );
    }

    #[test]
    fn test_both_sides_collapsed() {
        assert_eq!(
            compute_window(12, 30).unwrap(),
            vec![Page(1), Ellipsis, Page(11), Page(12), Page(13), Ellipsis, Page(30)]
        );
    }

    #[test]
    fn test_first_and_last_page() {
        assert_eq!(
            compute_window(1, 9).unwrap(),
            vec![Page(1), Page(2), Ellipsis, Page(9)]
        );
        assert_eq!(
            compute_window(9, 9).unwrap(),
            vec![Page(1), Ellipsis, Page(8), Page(9)]
        );
    }

    #[test]
    fn test_thresholds() {
        // current_page = 4 is the last dense start
        assert_eq!(
            compute_window(4, 4).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
        // current_page = 5 already collapses, even though only page 2..3 are hidden
        assert_eq!(
            compute_window(5, 5).unwrap(),
            vec![Page(1), Ellipsis, Page(4), Page(5)]
        );
        // three pages to the end are listed, four are not
        assert_eq!(
            compute_window(1, 4).unwrap(),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
        assert_eq!(
            compute_window(1, 5).unwrap(),
            vec![Page(1), Page(2), Ellipsis, Page(5)]
        );
    }

    #[test]
    fn test_single_page() {
        assert_eq!(compute_window(1, 1).unwrap(), vec![Page(1)]);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            compute_window(0, 3),
            Err(PaginationError::InvalidArgument(_))
        ));
        assert!(matches!(
            compute_window(4, 3),
            Err(PaginationError::InvalidArgument(_))
        ));
        assert!(compute_window(1, 0).is_err());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Page(12).to_string(), "12");
        assert_eq!(Ellipsis.to_string(), "");
    }

    #[test]
    fn test_label_serde() {
        assert_eq!(serde_json::to_string(&Page(3)).unwrap(), r#"{"page":3}"#);
        assert_eq!(serde_json::to_string(&Ellipsis).unwrap(), r#""ellipsis""#);
    }
}
