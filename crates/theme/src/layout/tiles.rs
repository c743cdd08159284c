use super::{push_pagination, Listing, Rendered};
use crate::context::RenderContext;
use crate::error::Result;
use crate::html::{escape, permalink, push_categories, push_list_item};
use crate::model::{CategoryListing, Post};
use std::fmt::Write as _;

const ROW: usize = 3;

/// Posts laid out two by two next to the promoted box on the home page
const HEAD: usize = 4;

pub(super) fn render(listing: &Listing<'_>, ctx: &mut RenderContext<'_>) -> Result<Rendered> {
    let posts = &listing.page.posts;
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div id="posts-tiles" class="tile is-ancestor is-vertical">"#);

    let promoted = if listing.home {
        listing.promoted_by_id(ctx.settings().promoted_category1)
    } else {
        None
    };

    match promoted {
        Some(category) => {
            let (head, rest) = posts.split_at(posts.len().min(HEAD));
            push_head(&mut html, head, category, ctx);
            push_rows(&mut html, rest, "tile is-horizontal", ctx);
        }
        None => push_rows(&mut html, posts, "tile is-horizontal is-12", ctx),
    }

    html.push_str("</div>");
    push_pagination(&mut html, listing, ctx)?;

    Ok(Rendered {
        html,
        posts_shown: posts.len(),
    })
}

/// First rows of the home page: up to four tiles in an 8-column block,
/// promoted category box on the right
fn push_head(html: &mut String, head: &[Post], category: &CategoryListing, ctx: &RenderContext<'_>) {
    html.push_str(r#"<div class="tile is-horizontal"><div class="tile is-vertical is-8">"#);
    for pair in head.chunks(2) {
        html.push_str(r#"<div class="tile is-horizontal">"#);
        for post in pair {
            push_tile(html, post, ctx);
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        r#"<div class="promoted-category tile is-parent"><article class="tile is-child box"><div class="content"><p class="title">{}</p><div class="content"><ul>"#,
        escape(&category.name)
    );
    for post in category
        .posts
        .iter()
        .take(ctx.settings().promoted_category1_count)
    {
        push_list_item(html, post);
    }
    html.push_str("</ul></div></div></article></div></div>");
}

fn push_rows(html: &mut String, posts: &[Post], class: &str, ctx: &RenderContext<'_>) {
    for row in posts.chunks(ROW) {
        let _ = write!(html, r#"<div class="{class}">"#);
        for post in row {
            push_tile(html, post, ctx);
        }
        html.push_str("</div>");
    }
}

fn push_tile(html: &mut String, post: &Post, ctx: &RenderContext<'_>) {
    let settings = ctx.settings();
    html.push_str(r#"<div class="tile is-parent"><article class="tile box is-child""#);
    if settings.tiles_thumbnail_background {
        if let Some(thumbnail) = post.thumbnail_url.as_deref().filter(|url| !url.is_empty()) {
            let _ = write!(
                html,
                r#" style="background: linear-gradient(#FFFFFFDD, #FFFFFFDD), url('{}');""#,
                escape(thumbnail)
            );
        }
    }
    let _ = write!(
        html,
        r#"><div class="title">{}</div><div class="content">"#,
        permalink(post, &post.title)
    );
    if settings.show_categories {
        push_categories(html, post);
    }
    let excerpt = ctx.theme().excerpt(post);
    let _ = write!(html, r#"<p>{}</p><p class="tile-footer">"#, excerpt.text);
    if settings.show_author {
        let _ = write!(html, "{} - ", escape(&post.author));
    }
    let _ = write!(html, "{}</p></div></article></div>", escape(&post.date));
}
