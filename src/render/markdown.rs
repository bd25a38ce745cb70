//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if !doc.source.is_empty() {
            output.push_str(&format!("# {}\n\n", doc.source));
        }

        if !doc.items.is_empty() {
            output.push_str("## Index\n\n");
            for item in &doc.items {
                output.push_str(&toc::render_index_item(item));
                output.push('\n');
            }
            output.push('\n');
        }

        for item in &doc.items {
            output.push_str(&render_item(item));
            output.push('\n');
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a single function or mixin.
fn render_item(item: &Item) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Explicit anchor so a function and a mixin sharing a name stay distinct
    lines.push(format!("<a id=\"{}\"></a>\n", toc::item_anchor(item)));
    lines.push(format!("### {}\n", item.name));
    lines.push(format!("_{}_", item.kind));
    lines.push(String::new());

    let notes = render_notes(item);
    if !notes.is_empty() {
        lines.push(notes);
        lines.push(String::new());
    }

    if !item.description.is_empty() {
        lines.push(item.description.clone());
        lines.push(String::new());
    }

    if !item.parameters.is_empty() {
        lines.push("#### Parameters\n".to_string());
        lines.push("| Name | Type | Default | Description |".to_string());
        lines.push("|------|------|---------|-------------|".to_string());
        for param in &item.parameters {
            let default = param
                .default
                .as_deref()
                .map(|d| format!("`{}`", d))
                .unwrap_or_else(|| "-".to_string());
            lines.push(format!(
                "| `{}` | `{}` | {} | {} |",
                param.name,
                table_escape(&param.ty),
                table_escape(&default),
                table_escape(&param.description)
            ));
        }
        lines.push(String::new());
    }

    if let Some(ref types) = item.returns.types {
        lines.push("#### Returns\n".to_string());
        let types = types
            .iter()
            .map(|t| format!("`{}`", t))
            .collect::<Vec<_>>()
            .join(" | ");
        match item.returns.description.as_deref() {
            Some(desc) if !desc.is_empty() => lines.push(format!("{}: {}", types, desc)),
            _ => lines.push(types),
        }
        lines.push(String::new());
    }

    render_list(&mut lines, "Throws", &item.throws);
    render_list(&mut lines, "Aliases", &item.alias);

    if !item.link.is_empty() {
        lines.push("#### See also\n".to_string());
        for link in &item.link {
            lines.push(format!("* {}", toc::render_link(link)));
        }
        lines.push(String::new());
    }

    render_list(&mut lines, "Todo", &item.todos);

    if let Some(ref author) = item.author {
        lines.push(format!("_Author: {}_", author));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Quote block with deprecation and non-public access notes.
fn render_notes(item: &Item) -> String {
    let mut notes: Vec<String> = Vec::new();

    match item.deprecated {
        Deprecation::Current => {}
        Deprecation::Deprecated => notes.push("> **Deprecated**".to_string()),
        Deprecation::Reason(ref reason) => notes.push(format!("> **Deprecated**: {}", reason)),
    }

    if item.access != "public" {
        notes.push(format!("> *`{}`*", item.access));
    }

    notes.join("\n>\n")
}

fn render_list(lines: &mut Vec<String>, title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    lines.push(format!("#### {}\n", title));
    for entry in entries {
        lines.push(format!("* {}", entry));
    }
    lines.push(String::new());
}

fn table_escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_file;

    fn render(input: &str) -> String {
        let doc = Document {
            source: "test".into(),
            items: parse_file(input),
        };
        MarkdownRenderer.render(&doc).unwrap()
    }

    #[test]
    fn renders_index_and_heading() {
        let out = render("// Converts px\n@function rem($px) {}\n");
        assert!(out.starts_with("# test\n\n## Index\n\n* [rem](#function-rem) (function)\n"));
        assert!(out.contains(
            "<a id=\"function-rem\"></a>\n\n### rem\n\n_function_\n\nConverts px\n"
        ));
    }

    #[test]
    fn renders_parameter_table() {
        let out = render("// @param {Number|List} $size (16px) - base size\n@mixin font($size) {}\n");
        assert!(out.contains("#### Parameters\n"));
        assert!(out.contains("| `$size` | `Number\\|List` | `16px` | base size |"));
    }

    #[test]
    fn parameter_names_keep_source_spelling() {
        let out = render("// @param {Number} a - first\nfunction add(a, b)\n");
        assert!(out.contains("| `a` | `Number` | - | first |"));
        assert!(!out.contains("`$a`"));
    }

    #[test]
    fn renders_returns() {
        let out = render("// @return {String|Null} the value\n@function f() {}\n");
        assert!(out.contains("#### Returns\n\n`String` | `Null`: the value\n"));
    }

    #[test]
    fn renders_notes() {
        let out = render("// @deprecated Use g\n// @access private\n@function f() {}\n");
        assert!(out.contains("> **Deprecated**: Use g\n>\n> *`private`*"));
    }

    #[test]
    fn renders_lists_and_author() {
        let out = render(
            "// @throws Bad\n// @alias g\n// @link https://x.dev X\n// @todo More\n// @author Jane\n@function f() {}\n",
        );
        assert!(out.contains("#### Throws\n\n* Bad\n"));
        assert!(out.contains("#### Aliases\n\n* g\n"));
        assert!(out.contains("#### See also\n\n* [X](https://x.dev)\n"));
        assert!(out.contains("#### Todo\n\n* More\n"));
        assert!(out.contains("_Author: Jane_"));
    }

    #[test]
    fn empty_document_has_no_index() {
        let out = render("$x: 1;\n");
        assert_eq!(out, "# test\n\n");
    }
}
