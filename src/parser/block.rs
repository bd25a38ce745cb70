//! Comment block location and assembly.

use crate::model::Item;
use crate::parser::line::{parse_line, Tag};
use crate::syntax;

/// Collect the comment lines directly above the declaration at `index`.
///
/// Walks backward from `index - 1` and stops at the first non-comment line,
/// or at a blank line once at least one comment has been collected. The
/// result is in source order.
///
/// # Panics
///
/// Panics if `index` is past the end of `lines`.
pub fn find_comment_block<'a>(index: usize, lines: &[&'a str]) -> Vec<&'a str> {
    assert!(
        index < lines.len(),
        "declaration index {} out of range for {} lines",
        index,
        lines.len()
    );

    let mut comments = Vec::new();
    for &line in lines[..index].iter().rev() {
        if !comments.is_empty() && syntax::is_empty(line) {
            break;
        }
        if !syntax::is_comment(line) {
            break;
        }
        comments.push(line);
    }
    comments.reverse();

    tracing::trace!(index, lines = comments.len(), "located comment block");
    comments
}

/// Fold a comment block into a documentation record.
///
/// The returned item keeps its default kind and an empty name; the file
/// walker fills those in from the declaration.
pub fn parse_comment_block(comments: &[&str]) -> Item {
    let mut item = Item::default();

    for raw in comments {
        let Some(tag) = parse_line(&syntax::uncomment(raw)) else {
            continue;
        };
        apply(&mut item, tag);
    }

    // Drop the break carried by the first description line
    if item.description.starts_with('\n') {
        item.description.remove(0);
    }

    item
}

fn apply(item: &mut Item, tag: Tag) {
    match tag {
        Tag::Description(text) => item.description.push_str(&text),
        Tag::Return(returns) => item.returns = returns,
        Tag::Parameter(param) => item.parameters.push(param),
        Tag::Deprecated(deprecation) => item.deprecated = deprecation,
        Tag::Author(author) => item.author = Some(author),
        Tag::Access(access) => item.access = access,
        Tag::Throws(text) => item.throws.push(text),
        Tag::Todo(text) => item.todos.push(text),
        Tag::Alias(name) => item.alias.push(name),
        Tag::Link(link) => item.link.push(link),
    }
}
