//! Parser for code block annotation strings.
//!
//! Parses annotations like:
//! - `js`
//! - `js:title=hello-world.js`
//! - `js{1,4-6}{numberLines:true}:title=hello-world.js&clipboard=true`

use super::Annotation;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for splitting an annotation into language, options and directives.
    /// Options are brace groups with no nested braces, so a `:` inside a group
    /// never starts the directive list.
    static ref ANNOTATION_PATTERN: Regex = Regex::new(
        r"^(?P<language>[^{:]*)(?P<options>(?:\{[^}]*\})*)(?::(?P<directives>.*))?$"
    ).unwrap();
}

const TITLE_KEY: &str = "title=";

/// Parses a code block's `lang` and `meta` fields into an [`Annotation`].
///
/// Markdown parsers stop the language at the first space and put the rest
/// into `meta`. The two are glued back together with no separator before
/// parsing, so `js{numberLines: true}` reads the same as `js{numberLines:true}`.
///
/// ## Format
///
/// `language[{options}...][:directive(&directive)*]`
///
/// - `language` runs up to the first `{` or `:`
/// - each `{...}` group directly after the language is kept verbatim
/// - after the first `:` outside a group, directives are split on `&`
/// - a `title=<value>` directive with a non-empty value becomes the title;
///   if several appear the last one wins, and all of them are dropped
/// - any other token (including bare flags like `clipboard`) is kept as-is
///
/// Input that doesn't fit the format (an unclosed `{`, or text between a `}`
/// and the `:`) is passed through with no title and no directives.
///
/// ## Returns
///
/// `None` if `lang` is absent or empty, meaning the code block has no
/// annotation at all.
///
/// ## Examples
///
/// ```
/// use code_titles::parse_annotation;
///
/// let annotation = parse_annotation(Some("js:title=hello-world.js&clipboard=true"), None).unwrap();
/// assert_eq!(annotation.language, "js");
/// assert_eq!(annotation.title.as_deref(), Some("hello-world.js"));
/// assert_eq!(annotation.directives, vec!["clipboard=true"]);
///
/// // A space in the original annotation moved the tail into `meta`
/// let annotation = parse_annotation(
///     Some("js{1,4-6}{numberLines:"),
///     Some("true}:title=hello-world.js"),
/// )
/// .unwrap();
/// assert_eq!(annotation.options, "{1,4-6}{numberLines:true}");
/// assert_eq!(annotation.to_lang(), "js{1,4-6}{numberLines:true}");
///
/// assert!(parse_annotation(None, None).is_none());
/// ```
pub fn parse_annotation(lang: Option<&str>, meta: Option<&str>) -> Option<Annotation> {
    let lang = lang.filter(|l| !l.is_empty())?;

    let mut raw = String::with_capacity(lang.len() + meta.map_or(0, str::len));
    raw.push_str(lang);
    if let Some(meta) = meta {
        raw.push_str(meta);
    }

    let Some(captures) = ANNOTATION_PATTERN.captures(&raw) else {
        return Some(passthrough(&raw));
    };

    let mut annotation = Annotation {
        language: captures["language"].to_string(),
        options: captures["options"].to_string(),
        ..Default::default()
    };

    if let Some(directives) = captures.name("directives") {
        for token in directives.as_str().split('&').filter(|t| !t.is_empty()) {
            match token.strip_prefix(TITLE_KEY) {
                Some(value) if !value.is_empty() => {
                    annotation.title = Some(value.to_string());
                }
                _ => annotation.directives.push(token.to_string()),
            }
        }
    }

    Some(annotation)
}

/// Best-effort split for annotations that don't match the grammar.
fn passthrough(raw: &str) -> Annotation {
    let (language, options) = raw.split_at(raw.find('{').unwrap_or(raw.len()));
    Annotation {
        language: language.to_string(),
        options: options.to_string(),
        ..Default::default()
    }
}
