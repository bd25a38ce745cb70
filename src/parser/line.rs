//! Line classifier: maps one uncommented line to the tag it carries.
//!
//! Recognizers are tried in a fixed order and the first match wins. A line
//! no recognizer claims becomes description text.

use crate::model::{Deprecation, Link, Parameter, Return};
use crate::syntax;

/// A classified comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// Free-form text, stored with its leading line break.
    Description(String),
    Return(Return),
    Parameter(Parameter),
    Deprecated(Deprecation),
    Author(String),
    Access(String),
    Throws(String),
    Todo(String),
    Alias(String),
    Link(Link),
}

impl Tag {
    /// Name of the record field this tag feeds.
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Description(_) => "description",
            Tag::Return(_) => "return",
            Tag::Parameter(_) => "parameters",
            Tag::Deprecated(_) => "deprecated",
            Tag::Author(_) => "author",
            Tag::Access(_) => "access",
            Tag::Throws(_) => "throws",
            Tag::Todo(_) => "todos",
            Tag::Alias(_) => "alias",
            Tag::Link(_) => "link",
        }
    }

    /// Repeated occurrences accumulate instead of overwriting.
    pub fn is_multi_valued(&self) -> bool {
        matches!(
            self,
            Tag::Parameter(_) | Tag::Throws(_) | Tag::Todo(_) | Tag::Alias(_) | Tag::Link(_)
        )
    }
}

type Recognizer = fn(&str) -> Option<Tag>;

/// Tag recognizers in priority order.
const RECOGNIZERS: &[Recognizer] = &[
    return_tag,
    parameter_tag,
    deprecated_tag,
    author_tag,
    access_tag,
    throws_tag,
    todo_tag,
    alias_tag,
    link_tag,
];

/// Classify an uncommented line. `None` means the line contributes nothing.
pub fn parse_line(line: &str) -> Option<Tag> {
    if line.is_empty() || syntax::is_separator(line) || syntax::is_ignore(line) {
        return None;
    }

    let tag = RECOGNIZERS
        .iter()
        .find_map(|recognize| recognize(line))
        .unwrap_or_else(|| Tag::Description(format!("\n{}", line)));
    Some(tag)
}

// -- Recognizers --------------------------------------------------------------

fn return_tag(line: &str) -> Option<Tag> {
    let caps = syntax::is_returns(line)?;
    let types = caps[1].split('|').map(|t| t.trim().to_string()).collect();
    Some(Tag::Return(Return {
        types: Some(types),
        description: Some(caps[2].to_string()),
    }))
}

fn parameter_tag(line: &str) -> Option<Tag> {
    let caps = syntax::is_param(line)?;
    let default = caps
        .get(3)
        .map(|m| m.as_str().trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string);
    Some(Tag::Parameter(Parameter {
        ty: caps[1].trim().to_string(),
        name: caps[2].to_string(),
        default,
        description: caps[4].to_string(),
    }))
}

fn deprecated_tag(line: &str) -> Option<Tag> {
    let caps = syntax::is_deprecated(line)?;
    let deprecation = match caps.get(1).map(|m| m.as_str()) {
        Some(reason) if !reason.is_empty() => Deprecation::Reason(reason.to_string()),
        _ => Deprecation::Deprecated,
    };
    Some(Tag::Deprecated(deprecation))
}

fn author_tag(line: &str) -> Option<Tag> {
    syntax::is_author(line).map(|caps| Tag::Author(caps[1].to_string()))
}

fn access_tag(line: &str) -> Option<Tag> {
    syntax::is_access(line).map(|caps| Tag::Access(caps[1].to_string()))
}

fn throws_tag(line: &str) -> Option<Tag> {
    syntax::is_throws(line).map(|caps| Tag::Throws(caps[1].to_string()))
}

fn todo_tag(line: &str) -> Option<Tag> {
    syntax::is_todo(line).map(|caps| Tag::Todo(caps[1].to_string()))
}

fn alias_tag(line: &str) -> Option<Tag> {
    syntax::is_alias(line).map(|caps| Tag::Alias(caps[1].to_string()))
}

fn link_tag(line: &str) -> Option<Tag> {
    let caps = syntax::is_link(line)?;
    Some(Tag::Link(Link {
        url: caps[1].to_string(),
        caption: caps.get(2).map(|m| m.as_str().to_string()),
    }))
}
