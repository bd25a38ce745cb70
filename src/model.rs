//! Data model for parsed documentation — format-agnostic.

use serde::{Serialize, Serializer};
use std::fmt;

/// Parsed documentation of a single source file.
#[derive(Debug, Default)]
pub struct Document {
    /// Display name of the source, usually the file stem.
    pub source: String,
    pub items: Vec<Item>,
}

/// One documented function or mixin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub name: String,
    pub description: String,
    pub access: String,
    pub deprecated: Deprecation,
    #[serde(serialize_with = "string_or_false")]
    pub author: Option<String>,
    #[serde(rename = "return")]
    pub returns: Return,
    pub parameters: Vec<Parameter>,
    pub throws: Vec<String>,
    pub todos: Vec<String>,
    pub alias: Vec<String>,
    pub link: Vec<Link>,
}

impl Default for Item {
    fn default() -> Self {
        Item {
            kind: ItemKind::default(),
            name: String::new(),
            description: String::new(),
            access: "public".to_string(),
            deprecated: Deprecation::default(),
            author: None,
            returns: Return::default(),
            parameters: Vec::new(),
            throws: Vec::new(),
            todos: Vec::new(),
            alias: Vec::new(),
            link: Vec::new(),
        }
    }
}

impl Item {
    pub fn is_private(&self) -> bool {
        self.access == "private"
    }
}

/// Declaration keyword that introduced an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Function,
    Mixin,
}

impl ItemKind {
    /// Map a declaration keyword (`function` / `mixin`) to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "function" => Some(ItemKind::Function),
            "mixin" => Some(ItemKind::Mixin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Function => "function",
            ItemKind::Mixin => "mixin",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `@deprecated` state. Serializes as `false`, `true`, or the reason string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Deprecation {
    #[default]
    Current,
    Deprecated,
    Reason(String),
}

impl Serialize for Deprecation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Deprecation::Current => serializer.serialize_bool(false),
            Deprecation::Deprecated => serializer.serialize_bool(true),
            Deprecation::Reason(reason) => serializer.serialize_str(reason),
        }
    }
}

/// Parsed `@return` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Return {
    /// `|`-separated alternatives, in source order
    #[serde(rename = "type")]
    pub types: Option<Vec<String>>,
    #[serde(serialize_with = "string_or_false")]
    pub description: Option<String>,
}

/// Parsed `@param` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub default: Option<String>,
    pub description: String,
}

/// Parsed `@link` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
    pub caption: Option<String>,
}

fn string_or_false<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(text) => serializer.serialize_str(text),
        None => serializer.serialize_bool(false),
    }
}
