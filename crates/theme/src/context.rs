use crate::error::Result;
use crate::layout::{self, Listing, Rendered};
use crate::model::Post;
use crate::settings::ThemeSettings;
use folio_excerpt::{ExcerptBuilder, ExcerptResult};
use folio_pagination::NavLabels;
use serde::{Deserialize, Serialize};

/// Translatable texts used by the layouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLabels {
    pub read_more: String,
    pub nav: NavLabels,
}

impl Default for ThemeLabels {
    fn default() -> Self {
        Self {
            read_more: "Read more...".to_string(),
            nav: NavLabels::default(),
        }
    }
}

/// Validated theme configuration, created once at startup and shared by
/// every render.
#[derive(Debug, Clone)]
pub struct Theme {
    settings: ThemeSettings,
    excerpts: ExcerptBuilder,
    labels: ThemeLabels,
    asset_base: String,
}

impl Theme {
    /// Validate `settings` and prepare the shared render state
    pub fn init(settings: ThemeSettings) -> Result<Self> {
        settings.validate()?;
        let excerpts = ExcerptBuilder::new(settings.excerpt_size)?;
        log::info!(
            "Theme ready: home={:?}, lists={:?}, excerpt={} chars",
            settings.show_home_mode,
            settings.show_lists_mode,
            settings.excerpt_size
        );
        Ok(Self {
            settings,
            excerpts,
            labels: ThemeLabels::default(),
            asset_base: String::new(),
        })
    }

    #[must_use]
    pub fn with_labels(mut self, labels: ThemeLabels) -> Self {
        self.labels = labels;
        self
    }

    /// URL prefix of the theme's `js/` and `css/` directories
    #[must_use]
    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = base.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    #[must_use]
    pub const fn labels(&self) -> &ThemeLabels {
        &self.labels
    }

    /// Fresh per-request render context
    #[must_use]
    pub const fn context(&self) -> RenderContext<'_> {
        RenderContext {
            theme: self,
            assets_injected: false,
        }
    }

    /// Excerpt of `post` according to the excerpt settings.
    ///
    /// Without custom excerpts the host's excerpt is used; posts that have
    /// none fall back to the character budget.
    pub fn excerpt(&self, post: &Post) -> ExcerptResult {
        match (&post.manual_excerpt, self.settings.use_custom_excerpt) {
            (Some(manual), false) => ExcerptResult::from_manual(manual, &post.content),
            _ => self.excerpts.build(&post.content),
        }
    }
}

/// State threaded through one request's renders
#[derive(Debug)]
pub struct RenderContext<'a> {
    theme: &'a Theme,
    assets_injected: bool,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub const fn theme(&self) -> &'a Theme {
        self.theme
    }

    #[must_use]
    pub const fn settings(&self) -> &'a ThemeSettings {
        &self.theme.settings
    }

    #[must_use]
    pub const fn assets_injected(&self) -> bool {
        self.assets_injected
    }

    /// Slideshow script and stylesheet tags, the first time only
    pub fn inject_assets(&mut self) -> Option<String> {
        if self.assets_injected {
            return None;
        }
        self.assets_injected = true;
        let base = &self.theme.asset_base;
        Some(format!(
            r#"<script type="text/javascript" src="{base}/js/slideshow.js"></script><link rel="stylesheet" href="{base}/css/slideshow.css">"#
        ))
    }

    /// Render a listing with the layout configured for it
    pub fn render_listing(&mut self, listing: &Listing<'_>) -> Result<Rendered> {
        let mode = self.settings().display_mode(listing.home);
        mode.render(listing, self)
    }

    /// Render a single post or page
    #[must_use]
    pub fn render_single(&self, post: &Post) -> String {
        layout::single::render(post, self)
    }
}
