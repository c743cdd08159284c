use crate::error::{Result, ThemeError};
use crate::layout::DisplayMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identifier of a post category in the host CMS
pub type CategoryId = u64;

/// Where the author/date bar of a single post goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostDataLocation {
    Top,
    #[default]
    Bottom,
    #[serde(rename = "none")]
    Hidden,
}

/// Site-wide rendering options.
///
/// Every field has a default, so an empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    /// Posts per listing page
    pub posts_per_page: usize,

    /// Layout of category, archive and search listings
    pub show_lists_mode: DisplayMode,

    /// Layout of the home page
    pub show_home_mode: DisplayMode,

    /// Posts in the condensed home slideshow
    pub home_slideshow_count: usize,

    /// Use the featured image as tile background
    pub tiles_thumbnail_background: bool,

    pub promoted_category1: Option<CategoryId>,
    pub promoted_category2: Option<CategoryId>,
    pub promoted_category1_count: usize,
    pub promoted_category2_count: usize,

    pub show_categories: bool,
    pub show_author: bool,

    /// Hide "read more" under posts that are shown whole
    pub disable_read_more: bool,

    /// Cut excerpts at `excerpt_size` characters instead of using the host's
    pub use_custom_excerpt: bool,
    pub excerpt_size: usize,

    pub show_post_data: PostDataLocation,
    pub show_post_author: bool,
    pub show_post_date: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            posts_per_page: 20,
            show_lists_mode: DisplayMode::Cards,
            show_home_mode: DisplayMode::Cards,
            home_slideshow_count: 5,
            tiles_thumbnail_background: true,
            promoted_category1: None,
            promoted_category2: None,
            promoted_category1_count: 5,
            promoted_category2_count: 5,
            show_categories: true,
            show_author: true,
            disable_read_more: true,
            use_custom_excerpt: true,
            excerpt_size: folio_excerpt::DEFAULT_BUDGET,
            show_post_data: PostDataLocation::Bottom,
            show_post_author: true,
            show_post_date: true,
        }
    }
}

impl ThemeSettings {
    /// Parse settings from JSON, falling back to TOML
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: serde_json::Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(json_err) => {
                let utf8 = std::str::from_utf8(bytes)
                    .map_err(|err| ThemeError::parse(format!("{json_err}; {err}")))?;
                let toml_value: toml::Value = toml::from_str(utf8).map_err(|toml_err| {
                    ThemeError::parse(format!(
                        "settings are not valid JSON ({json_err}); TOML parse error: {toml_err}"
                    ))
                })?;
                serde_json::to_value(toml_value).map_err(|err| {
                    ThemeError::parse(format!("failed to convert TOML settings: {err}"))
                })?
            }
        };

        serde_json::from_value(value).map_err(|err| ThemeError::parse(err.to_string()))
    }

    /// Read and parse a settings file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        log::debug!("Loaded theme settings from {}", path.display());
        Self::from_slice(&bytes)
    }

    /// Layout for a listing
    #[must_use]
    pub const fn display_mode(&self, home: bool) -> DisplayMode {
        if home {
            self.show_home_mode
        } else {
            self.show_lists_mode
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.posts_per_page == 0 {
            return Err(ThemeError::invalid_settings("posts_per_page must be > 0"));
        }

        if self.excerpt_size == 0 {
            return Err(ThemeError::invalid_settings("excerpt_size must be > 0"));
        }

        if self.show_lists_mode == DisplayMode::Condensed {
            return Err(ThemeError::invalid_settings(
                "show_lists_mode cannot be condensed (home page only)",
            ));
        }

        if self.show_home_mode == DisplayMode::Condensed
            && self.promoted_category2.is_some()
            && self.promoted_category1.is_none()
        {
            return Err(ThemeError::invalid_settings(
                "promoted_category2 requires promoted_category1",
            ));
        }

        Ok(())
    }
}
