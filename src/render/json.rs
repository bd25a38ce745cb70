//! JSON renderer. Emits the record array as-is for tooling integration.

use crate::model::Document;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&doc.items)
            .with_context(|| format!("failed to serialize {}", doc.source))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_file;
    use serde_json::{json, Value};

    #[test]
    fn renders_record_shape() {
        let doc = Document {
            source: "math".into(),
            items: parse_file(
                "// Adds\n// @param {Number} $a (1) - first\n// @link https://x.dev\n@function add($a) {}\n",
            ),
        };
        let out = JsonRenderer.render(&doc).unwrap();
        assert!(out.ends_with("]\n"));

        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!([{
                "type": "function",
                "name": "add",
                "description": "Adds",
                "access": "public",
                "deprecated": false,
                "author": false,
                "return": { "type": null, "description": false },
                "parameters": [
                    { "type": "Number", "name": "$a", "default": "1", "description": "first" }
                ],
                "throws": [],
                "todos": [],
                "alias": [],
                "link": [{ "url": "https://x.dev", "caption": null }]
            }])
        );
    }

    #[test]
    fn empty_document_is_empty_array() {
        let out = JsonRenderer.render(&Document::default()).unwrap();
        assert_eq!(out, "[]\n");
    }
}
