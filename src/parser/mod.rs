//! File walker over function and mixin declarations.

pub mod block;
pub mod line;

use crate::model::Item;
use crate::syntax;

/// Parse SCSS source into one record per function or mixin, in file order.
pub fn parse_file(content: &str) -> Vec<Item> {
    let lines: Vec<&str> = content.lines().collect();
    let mut items = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some((kind, name)) = syntax::is_function_or_mixin(line) else {
            continue;
        };

        let mut item = block::parse_comment_block(&block::find_comment_block(index, &lines));
        item.kind = kind;
        item.name = name.to_string();

        tracing::debug!(kind = %kind, name, line = index + 1, "documented declaration");
        items.push(item);
    }

    items
}
