use super::{push_pagination, Listing, Rendered};
use crate::context::RenderContext;
use crate::error::Result;
use crate::html::{escape, permalink, push_categories};
use crate::model::Post;
use std::fmt::Write as _;

pub(super) fn render(listing: &Listing<'_>, ctx: &mut RenderContext<'_>) -> Result<Rendered> {
    let mut html = String::with_capacity(4096);
    html.push_str(r#"<div id="posts-list">"#);
    for post in &listing.page.posts {
        push_card(&mut html, post, ctx);
    }
    html.push_str("</div>");
    push_pagination(&mut html, listing, ctx)?;

    Ok(Rendered {
        html,
        posts_shown: listing.page.posts.len(),
    })
}

fn push_card(html: &mut String, post: &Post, ctx: &RenderContext<'_>) {
    let settings = ctx.settings();
    html.push_str(r#"<div class="card">"#);
    let is_small = push_card_content(html, post, ctx);

    html.push_str(r#"<footer class="card-footer"><p class="card-footer-item">"#);
    if settings.show_author {
        let _ = write!(html, "<span>{}</span>", escape(&post.author));
    }
    html.push_str(r#"</p><p class="card-footer-item">"#);
    if !(settings.disable_read_more && is_small) {
        let read_more = escape(&ctx.theme().labels().read_more);
        let _ = write!(html, "<span>{}</span>", permalink(post, &read_more));
    }
    let _ = write!(
        html,
        r#"</p><p class="card-footer-item"><span>{}</span></p></footer>"#,
        escape(&post.date)
    );
    html.push_str("</div>");
}

/// Card body: thumbnail media block or plain title, excerpt, categories.
///
/// Returns whether the post is small enough to be shown whole.
pub(super) fn push_card_content(html: &mut String, post: &Post, ctx: &RenderContext<'_>) -> bool {
    let excerpt = ctx.theme().excerpt(post);
    let title = permalink(post, &post.title);

    html.push_str(r#"<div class="card-content">"#);
    match &post.thumbnail_url {
        Some(thumbnail) => {
            let _ = write!(
                html,
                r#"<div class="media"><div class="media-left"><figure class="image is-128x128"><img src="{}" alt="{}"></figure></div><div class="media-content"><p class="title">{title}</p><div class="content"><p>{}</p></div></div></div>"#,
                escape(thumbnail),
                escape(&post.title),
                excerpt.text
            );
        }
        None => {
            let _ = write!(
                html,
                r#"<div class="title">{title}</div><div class="content"><p>{}</p></div>"#,
                excerpt.text
            );
        }
    }
    if ctx.settings().show_categories {
        push_categories(html, post);
    }
    html.push_str("</div>");

    excerpt.is_small
}
