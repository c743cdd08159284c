use super::cards::push_card_content;
use super::{Listing, Rendered};
use crate::context::RenderContext;
use crate::html::{escape, push_list_item};
use crate::model::CategoryListing;
use std::fmt::Write as _;

/// Slideshow assets come first, even when the page has no posts
pub(super) fn render(listing: &Listing<'_>, ctx: &mut RenderContext<'_>) -> Rendered {
    let settings = ctx.settings();
    let mut html = String::with_capacity(4096);
    if let Some(assets) = ctx.inject_assets() {
        html.push_str(&assets);
    }
    if listing.page.is_empty() {
        return Rendered {
            html,
            posts_shown: 0,
        };
    }

    html.push_str(r#"<div id="condensed"><section class="hero slideshow">"#);
    let slides = listing
        .page
        .posts
        .iter()
        .take(settings.home_slideshow_count);
    let mut posts_shown = 0;
    for post in slides {
        html.push_str(r#"<div class="card">"#);
        push_card_content(&mut html, post, ctx);
        html.push_str("</div>");
        posts_shown += 1;
    }
    html.push_str("</section>");

    let columns = [
        (
            "promoted-category1",
            listing.promoted_by_id(settings.promoted_category1),
            settings.promoted_category1_count,
        ),
        (
            "promoted-category2",
            listing.promoted_by_id(settings.promoted_category2),
            settings.promoted_category2_count,
        ),
    ];
    if columns.iter().any(|(_, category, _)| category.is_some()) {
        html.push_str(r#"<div class="columns">"#);
        for (div_id, category, count) in columns {
            if let Some(category) = category {
                html.push_str(r#"<div class="column">"#);
                push_promoted(&mut html, div_id, category, count);
                html.push_str("</div>");
            }
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    Rendered { html, posts_shown }
}

fn push_promoted(html: &mut String, div_id: &str, category: &CategoryListing, count: usize) {
    let _ = write!(
        html,
        r#"<div id="{div_id}" class="promoted-category card"><div class="card-content"><p class="title">{}</p><div class="content"><ul>"#,
        escape(&category.name)
    );
    for post in category.posts.iter().take(count) {
        push_list_item(html, post);
    }
    html.push_str("</ul></div></div></div>");
}
