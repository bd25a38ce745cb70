//! Index and anchor helpers shared by the Markdown and HTML renderers.

use crate::model::{Item, Link};

/// GitHub heading anchor slug.
///
/// Lowercases, keeps alphanumerics, spaces, hyphens and underscores, and
/// turns spaces into hyphens. SCSS names like `font-size` or `_private`
/// survive unchanged.
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

/// Anchor id for an item heading. Kind is part of the id so a function and
/// a mixin sharing a name do not collide.
pub fn item_anchor(item: &Item) -> String {
    github_slug(&format!("{} {}", item.kind, item.name))
}

/// Markdown index entry: `* [name](#anchor) (kind)`.
pub fn render_index_item(item: &Item) -> String {
    format!("* [{}](#{}) ({})", item.name, item_anchor(item), item.kind)
}

/// Markdown link for an `@link` entry; the URL doubles as the caption.
pub fn render_link(link: &Link) -> String {
    let caption = link.caption.as_deref().unwrap_or(&link.url);
    format!("[{}]({})", caption, link.url)
}
