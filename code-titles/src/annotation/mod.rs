//! Code block annotation parsing and rewriting.
//!
//! An annotation is the text after the opening fence of a code block:
//!
//! ````markdown
//! ```js{1,4-6}{numberLines:true}:title=hello-world.js&clipboard=true
//! alert('hello world')
//! ```
//! ````
//!
//! It breaks down into three parts:
//!
//! - **language**: `js`
//! - **options**: `{1,4-6}{numberLines:true}`, zero or more brace groups kept verbatim
//! - **directives**: `title=hello-world.js&clipboard=true`, `&`-separated tokens after the first `:`
//!
//! The `title` directive is pulled out of the directive list; everything else
//! is written back untouched by [`Annotation::to_lang`].

mod parser;

pub use parser::parse_annotation;

use std::fmt;

use markdown::mdast::{Html, Node};

use crate::options::{CodeTitleOptions, label_html};

/// A parsed code block annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Language identifier (everything before the first `{` or `:`).
    pub language: String,
    /// Brace-delimited option groups, concatenated verbatim. Empty if none.
    pub options: String,
    /// Value of the `title=` directive, if one was present.
    pub title: Option<String>,
    /// Remaining directives in their original order.
    pub directives: Vec<String>,
}

impl Annotation {
    /// Serializes the annotation back into a single `lang` string.
    ///
    /// The title is never written back. A `:` is only emitted when at least
    /// one other directive remains.
    ///
    /// ## Examples
    ///
    /// ```
    /// use code_titles::parse_annotation;
    ///
    /// let annotation = parse_annotation(Some("js:title=a.js&clipboard=true"), None).unwrap();
    /// assert_eq!(annotation.to_lang(), "js:clipboard=true");
    ///
    /// let annotation = parse_annotation(Some("js:title=a.js"), None).unwrap();
    /// assert_eq!(annotation.to_lang(), "js");
    /// ```
    pub fn to_lang(&self) -> String {
        let mut lang = String::with_capacity(self.language.len() + self.options.len());
        lang.push_str(&self.language);
        lang.push_str(&self.options);
        if !self.directives.is_empty() {
            lang.push(':');
            lang.push_str(&self.directives.join("&"));
        }
        lang
    }

    /// Builds the HTML label node for this annotation's title.
    ///
    /// Returns `None` when there is no title.
    pub fn label(&self, options: &CodeTitleOptions) -> Option<Node> {
        self.title.as_deref().map(|title| {
            Node::Html(Html {
                value: label_html(title, &options.class_name),
                position: None,
            })
        })
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lang())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(language: &str, options: &str, directives: &[&str]) -> Annotation {
        Annotation {
            language: language.to_string(),
            options: options.to_string(),
            title: None,
            directives: directives.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_to_lang_language_only() {
        assert_eq!(annotation("js", "", &[]).to_lang(), "js");
    }

    #[test]
    fn test_to_lang_no_trailing_colon() {
        let mut a = annotation("js", "{1,3}", &[]);
        a.title = Some("ignored.js".to_string());
        assert_eq!(a.to_lang(), "js{1,3}");
    }

    #[test]
    fn test_to_lang_joins_directives_in_order() {
        let a = annotation("ts", "", &["clipboard=true", "wrap", "theme=dark"]);
        assert_eq!(a.to_lang(), "ts:clipboard=true&wrap&theme=dark");
    }

    #[test]
    fn test_to_lang_with_options_and_directives() {
        let a = annotation("js", "{1,4-6}{numberLines:true}", &["clipboard=true"]);
        assert_eq!(a.to_lang(), "js{1,4-6}{numberLines:true}:clipboard=true");
    }

    #[test]
    fn test_display_matches_to_lang() {
        let a = annotation("rust", "{2}", &["x=1"]);
        assert_eq!(a.to_string(), a.to_lang());
    }

    #[test]
    fn test_label_without_title() {
        assert!(annotation("js", "", &[]).label(&CodeTitleOptions::default()).is_none());
    }

    #[test]
    fn test_label_with_title() {
        let mut a = annotation("js", "", &[]);
        a.title = Some("hello-world.js".to_string());

        let Some(Node::Html(html)) = a.label(&CodeTitleOptions::default()) else {
            panic!("Expected Html node");
        };
        assert_eq!(html.value, r#"<div class="gatsby-code-title">hello-world.js</div>"#);
        assert!(html.position.is_none());
    }

    #[test]
    fn test_label_custom_class() {
        let mut a = annotation("js", "", &[]);
        a.title = Some("main.js".to_string());
        let options = CodeTitleOptions {
            class_name: "code-title".to_string(),
        };

        let Some(Node::Html(html)) = a.label(&options) else {
            panic!("Expected Html node");
        };
        assert_eq!(html.value, r#"<div class="code-title">main.js</div>"#);
    }
}
