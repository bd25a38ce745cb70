//! SCSS comment and annotation recognizers.
//!
//! Every recognizer is a pure function over a single line. Comment-level
//! predicates (`is_comment`, `is_empty`, `is_function_or_mixin`) take raw
//! source lines; tag recognizers take lines already passed through
//! [`uncomment`].

use crate::model::ItemKind;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// -- Raw line patterns --------------------------------------------------------

static RE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:space:]]*(?://|/\*|\*(?:[[:space:]]|/|$))").unwrap());

static RE_EMPTY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[[:space:]]*$").unwrap());

// `@function name(`, `@mixin name`, or a bare `function name(`
static RE_FUNCTION_OR_MIXIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:space:]]*@?(function|mixin)[[:space:]]+([a-zA-Z0-9_-]+)").unwrap()
});

static RE_COMMENT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:space:]]*(?:/{2,}|/\*+|\*+/?)?").unwrap());

static RE_COMMENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*+/[[:space:]]*$").unwrap());

// -- Uncommented line patterns ------------------------------------------------

static RE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:space:]]*(?:[-=*#~_/][[:space:]]*){3,}$").unwrap()
});

static RE_IGNORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@ignore\b").unwrap());

// Groups: 1=types, 2=description
static RE_RETURNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@returns?[[:space:]]+\{([^}]*)\}(?:[[:space:]]+-)?[[:space:]]*(.*)$").unwrap()
});

// Groups: 1=type, 2=name, 3=default, 4=description
// Defaults may nest one level of parentheses: `(rem(16px))`, `((gap: 1rem))`
static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^@param[[:space:]]+\{([^}]*)\}[[:space:]]+(\$?[a-zA-Z0-9_-]+)",
        r"(?:[[:space:]]+\(((?:[^()]|\([^()]*\))*)\))?",
        r"(?:[[:space:]]+-)?[[:space:]]*(.*)$"
    ))
    .unwrap()
});

static RE_DEPRECATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@deprecated(?:[[:space:]]+(.*))?$").unwrap());

static RE_AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@author[[:space:]]+(.+)$").unwrap());

static RE_ACCESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@access[[:space:]]+([^[:space:]]+)").unwrap());

static RE_THROWS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@throws?[[:space:]]+(.+)$").unwrap());

static RE_TODO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@todo[[:space:]]+(.+)$").unwrap());

static RE_ALIAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@alias[[:space:]]+([^[:space:]]+)").unwrap());

// Groups: 1=url, 2=caption
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@link[[:space:]]+([^[:space:]]+)(?:[[:space:]]+(.+))?$").unwrap()
});

// -- Raw line recognizers -----------------------------------------------------

/// True when the line is part of a `//` or `/* */` comment.
///
/// A leading `*` only counts as a block-comment continuation when followed
/// by whitespace, `/`, or nothing, so `*,` and `*zoom: 1;` stay code.
pub fn is_comment(line: &str) -> bool {
    RE_COMMENT.is_match(line)
}

/// True when the line holds nothing but whitespace.
pub fn is_empty(line: &str) -> bool {
    RE_EMPTY.is_match(line)
}

/// Match a function or mixin header, returning its kind and name.
pub fn is_function_or_mixin(line: &str) -> Option<(ItemKind, &str)> {
    let caps = RE_FUNCTION_OR_MIXIN.captures(line)?;
    let kind = ItemKind::from_keyword(caps.get(1)?.as_str())?;
    Some((kind, caps.get(2)?.as_str()))
}

/// Strip comment decoration from a raw line.
///
/// Removes indentation, the leading marker (`///`, `//`, `/**`, `/*`, `*`,
/// `*/`), a trailing `*/`, and surrounding whitespace.
pub fn uncomment(line: &str) -> String {
    let stripped = RE_COMMENT_PREFIX.replace(line, "");
    let stripped = RE_COMMENT_SUFFIX.replace(&stripped, "");
    stripped.trim().to_string()
}

// -- Tag recognizers ----------------------------------------------------------

/// Decorative rule such as `-----` or `=====`.
pub fn is_separator(line: &str) -> bool {
    RE_SEPARATOR.is_match(line)
}

pub fn is_ignore(line: &str) -> bool {
    RE_IGNORE.is_match(line)
}

pub fn is_returns(line: &str) -> Option<Captures<'_>> {
    RE_RETURNS.captures(line)
}

pub fn is_param(line: &str) -> Option<Captures<'_>> {
    RE_PARAM.captures(line)
}

pub fn is_deprecated(line: &str) -> Option<Captures<'_>> {
    RE_DEPRECATED.captures(line)
}

pub fn is_author(line: &str) -> Option<Captures<'_>> {
    RE_AUTHOR.captures(line)
}

pub fn is_access(line: &str) -> Option<Captures<'_>> {
    RE_ACCESS.captures(line)
}

pub fn is_throws(line: &str) -> Option<Captures<'_>> {
    RE_THROWS.captures(line)
}

pub fn is_todo(line: &str) -> Option<Captures<'_>> {
    RE_TODO.captures(line)
}

pub fn is_alias(line: &str) -> Option<Captures<'_>> {
    RE_ALIAS.captures(line)
}

pub fn is_link(line: &str) -> Option<Captures<'_>> {
    RE_LINK.captures(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_comments() {
        assert!(is_comment("// line comment"));
        assert!(is_comment("  /// doc comment"));
        assert!(is_comment("/**"));
        assert!(is_comment(" * inside block"));
        assert!(is_comment(" */"));
        assert!(is_comment(" *"));
        assert!(!is_comment("$var: 1;"));
        assert!(!is_comment("*,"));
        assert!(!is_comment("*::before {"));
        assert!(!is_comment("  *zoom: 1;"));
        assert!(!is_comment(""));
    }

    #[test]
    fn recognizes_empty() {
        assert!(is_empty(""));
        assert!(is_empty("  \t"));
        assert!(!is_empty("//"));
    }

    #[test]
    fn recognizes_declarations() {
        assert_eq!(
            is_function_or_mixin("@function rem($px) {"),
            Some((ItemKind::Function, "rem"))
        );
        assert_eq!(
            is_function_or_mixin("  @mixin clearfix {"),
            Some((ItemKind::Mixin, "clearfix"))
        );
        assert_eq!(
            is_function_or_mixin("function add(a, b)"),
            Some((ItemKind::Function, "add"))
        );
        assert_eq!(is_function_or_mixin("@include clearfix;"), None);
        assert_eq!(is_function_or_mixin("// @mixin commented"), None);
    }

    #[test]
    fn uncomments_line_styles() {
        assert_eq!(uncomment("// Adds two numbers"), "Adds two numbers");
        assert_eq!(uncomment("  /// @todo a"), "@todo a");
        assert_eq!(uncomment("/**"), "");
        assert_eq!(uncomment(" * @author Jane"), "@author Jane");
        assert_eq!(uncomment(" */"), "");
        assert_eq!(uncomment("/* one-liner */"), "one-liner");
    }

    #[test]
    fn recognizes_separators() {
        assert!(is_separator("-----"));
        assert!(is_separator("= = = = ="));
        assert!(is_separator("////////"));
        assert!(!is_separator("--"));
        assert!(!is_separator("--- heading ---"));
    }

    #[test]
    fn recognizes_ignore() {
        assert!(is_ignore("@ignore"));
        assert!(is_ignore("@ignore this line"));
        assert!(!is_ignore("@ignored"));
    }

    #[test]
    fn param_captures_all_groups() {
        let caps = is_param("@param {Number} $base (16) - root size").unwrap();
        assert_eq!(&caps[1], "Number");
        assert_eq!(&caps[2], "$base");
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("16"));
        assert_eq!(&caps[4], "root size");
    }

    #[test]
    fn param_default_with_nested_parens() {
        let caps = is_param("@param {Number} $base (rem(16px)) - base").unwrap();
        assert_eq!(&caps[3], "rem(16px)");
        assert_eq!(&caps[4], "base");
    }

    #[test]
    fn param_without_default() {
        let caps = is_param("@param {Number} a - first").unwrap();
        assert_eq!(&caps[2], "a");
        assert!(caps.get(3).is_none());
        assert_eq!(&caps[4], "first");
    }

    #[test]
    fn returns_with_and_without_dash() {
        let caps = is_returns("@return {Number} sum").unwrap();
        assert_eq!(&caps[1], "Number");
        assert_eq!(&caps[2], "sum");

        let caps = is_returns("@returns {String|Null} - the value").unwrap();
        assert_eq!(&caps[1], "String|Null");
        assert_eq!(&caps[2], "the value");
    }

    #[test]
    fn deprecated_reason_is_optional() {
        assert!(is_deprecated("@deprecated").unwrap().get(1).is_none());
        assert_eq!(&is_deprecated("@deprecated use bar").unwrap()[1], "use bar");
        assert!(is_deprecated("@deprecatedly").is_none());
    }

    #[test]
    fn link_caption_is_optional() {
        let caps = is_link("@link https://sass-lang.com Sass").unwrap();
        assert_eq!(&caps[1], "https://sass-lang.com");
        assert_eq!(&caps[2], "Sass");
        assert!(is_link("@link https://sass-lang.com").unwrap().get(2).is_none());
    }

    #[test]
    fn single_word_tags() {
        assert_eq!(&is_author("@author Jane Doe").unwrap()[1], "Jane Doe");
        assert_eq!(&is_access("@access private").unwrap()[1], "private");
        assert_eq!(&is_throws("@throws Invalid unit").unwrap()[1], "Invalid unit");
        assert_eq!(&is_todo("@todo support em").unwrap()[1], "support em");
        assert_eq!(&is_alias("@alias add").unwrap()[1], "add");
        assert!(is_author("@author").is_none());
    }
}
