use crate::context::RenderContext;
use crate::html::{escape, permalink, push_categories};
use crate::model::Post;
use crate::settings::PostDataLocation;
use std::fmt::Write as _;

/// Full post or page card
pub(crate) fn render(post: &Post, ctx: &RenderContext<'_>) -> String {
    let settings = ctx.settings();
    let mut html = String::with_capacity(post.content.len() + 512);
    let _ = write!(
        html,
        r#"<div class="card"><div class="card-content"><div class="title">{}</div><div class="content">"#,
        permalink(post, &post.title)
    );
    if settings.show_categories {
        push_categories(&mut html, post);
    }
    if settings.show_post_data == PostDataLocation::Top {
        push_post_data(&mut html, post, ctx);
    }
    html.push_str(&post.content);
    if settings.show_post_data == PostDataLocation::Bottom {
        push_post_data(&mut html, post, ctx);
    }
    html.push_str("</div></div></div>");
    html
}

/// Author and date bar
fn push_post_data(html: &mut String, post: &Post, ctx: &RenderContext<'_>) {
    let settings = ctx.settings();
    html.push_str(r#"<nav class="level"><div class="level-left">"#);
    if settings.show_post_author {
        let _ = write!(html, r#"<div class="level-item">{}</div>"#, escape(&post.author));
    }
    html.push_str("</div>");
    if settings.show_post_date {
        let _ = write!(
            html,
            r#"<div class="level-right"><div class="level-item">{}</div></div>"#,
            escape(&post.date)
        );
    }
    html.push_str("</nav>");
}
