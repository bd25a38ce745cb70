//! HTML renderer — standalone HTML page with semantic markup.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;
use anyhow::Result;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        if !doc.source.is_empty() {
            out.push_str(&format!("<title>{}</title>\n", html_escape(&doc.source)));
        }
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("table { border-collapse: collapse; }\n");
        out.push_str("th, td { border: 1px solid #ddd; padding: 0.3em 0.6em; text-align: left; }\n");
        out.push_str(".tag { display: inline-block; font-size: 0.75em; padding: 0.1em 0.4em; border-radius: 3px; margin-left: 0.5em; }\n");
        out.push_str(".tag-function { background: #c6538c; color: white; }\n");
        out.push_str(".tag-mixin { background: #4a90d9; color: white; }\n");
        out.push_str(".deprecated { color: #a33; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        if !doc.source.is_empty() {
            out.push_str(&format!("<h1>{}</h1>\n", html_escape(&doc.source)));
        }

        // Index
        if !doc.items.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for item in &doc.items {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a> <span class=\"tag tag-{}\">{}</span></li>\n",
                    html_escape(&toc::item_anchor(item)),
                    html_escape(&item.name),
                    item.kind,
                    item.kind
                ));
            }
            out.push_str("</ul>\n");
        }

        for item in &doc.items {
            out.push_str(&render_item_html(item));
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_item_html(item: &Item) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<h3 id=\"{}\">{} <span class=\"tag tag-{}\">{}</span></h3>\n",
        html_escape(&toc::item_anchor(item)),
        html_escape(&item.name),
        item.kind,
        item.kind
    ));

    match item.deprecated {
        Deprecation::Current => {}
        Deprecation::Deprecated => {
            out.push_str("<p class=\"deprecated\"><strong>Deprecated</strong></p>\n")
        }
        Deprecation::Reason(ref reason) => out.push_str(&format!(
            "<p class=\"deprecated\"><strong>Deprecated:</strong> {}</p>\n",
            html_escape(reason)
        )),
    }

    if item.access != "public" {
        out.push_str(&format!("<p><em>{}</em></p>\n", html_escape(&item.access)));
    }

    if !item.description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", html_escape(&item.description)));
    }

    // Parameters
    if !item.parameters.is_empty() {
        out.push_str("<h4>Parameters</h4>\n<table>\n");
        out.push_str("  <tr><th>Name</th><th>Type</th><th>Default</th><th>Description</th></tr>\n");
        for param in &item.parameters {
            let default = param
                .default
                .as_deref()
                .map(|d| format!("<code>{}</code>", html_escape(d)))
                .unwrap_or_default();
            out.push_str(&format!(
                "  <tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&param.name),
                html_escape(&param.ty),
                default,
                html_escape(&param.description)
            ));
        }
        out.push_str("</table>\n");
    }

    // Returns
    if let Some(ref types) = item.returns.types {
        let types = types
            .iter()
            .map(|t| format!("<code>{}</code>", html_escape(t)))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str("<h4>Returns</h4>\n");
        match item.returns.description.as_deref() {
            Some(desc) if !desc.is_empty() => {
                out.push_str(&format!("<p>{}: {}</p>\n", types, html_escape(desc)))
            }
            _ => out.push_str(&format!("<p>{}</p>\n", types)),
        }
    }

    render_list_html(&mut out, "Throws", &item.throws);
    render_list_html(&mut out, "Aliases", &item.alias);

    // Links
    if !item.link.is_empty() {
        out.push_str("<h4>See also</h4>\n<ul>\n");
        for link in &item.link {
            let caption = link.caption.as_deref().unwrap_or(&link.url);
            out.push_str(&format!(
                "  <li><a href=\"{}\">{}</a></li>\n",
                html_escape(&link.url),
                html_escape(caption)
            ));
        }
        out.push_str("</ul>\n");
    }

    render_list_html(&mut out, "Todo", &item.todos);

    if let Some(ref author) = item.author {
        out.push_str(&format!("<p><small>Author: {}</small></p>\n", html_escape(author)));
    }

    out
}

fn render_list_html(out: &mut String, title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    out.push_str(&format!("<h4>{}</h4>\n<ul>\n", title));
    for entry in entries {
        out.push_str(&format!("  <li>{}</li>\n", html_escape(entry)));
    }
    out.push_str("</ul>\n");
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_file;

    #[test]
    fn renders_page_with_index() {
        let doc = Document {
            source: "grid".into(),
            items: parse_file("// Builds a row\n@mixin row {}\n"),
        };
        let out = HtmlRenderer.render(&doc).unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>grid</title>"));
        assert!(out.contains("<a href=\"#mixin-row\">row</a>"));
        assert!(out.contains("<h3 id=\"mixin-row\">row <span class=\"tag tag-mixin\">mixin</span></h3>"));
        assert!(out.contains("<p>Builds a row</p>"));
        assert!(out.ends_with("</html>\n"));
    }

    #[test]
    fn parameter_names_keep_source_spelling() {
        let doc = Document {
            source: "x".into(),
            items: parse_file("// @param {Number} a - first\nfunction add(a, b)\n"),
        };
        let out = HtmlRenderer.render(&doc).unwrap();
        assert!(out.contains("<tr><td><code>a</code></td>"));
        assert!(!out.contains("<code>$a</code>"));
    }

    #[test]
    fn escapes_text() {
        let doc = Document {
            source: "x".into(),
            items: parse_file("// Returns <b> & \"c\"\n@function f() {}\n"),
        };
        let out = HtmlRenderer.render(&doc).unwrap();
        assert!(out.contains("<p>Returns &lt;b&gt; &amp; &quot;c&quot;</p>"));
    }

    #[test]
    fn renders_parameters_and_returns() {
        let doc = Document {
            source: "x".into(),
            items: parse_file(
                "// @param {Number} $n (2) - count\n// @return {Number} doubled\n@function twice($n) {}\n",
            ),
        };
        let out = HtmlRenderer.render(&doc).unwrap();
        assert!(out.contains(
            "<tr><td><code>$n</code></td><td><code>Number</code></td><td><code>2</code></td><td>count</td></tr>"
        ));
        assert!(out.contains("<h4>Returns</h4>\n<p><code>Number</code>: doubled</p>"));
    }
}
