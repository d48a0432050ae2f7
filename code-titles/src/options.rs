//! Configuration for the code title transform.
//!
//! Options arrive as loosely-typed data (typically JSON from a site
//! configuration). Only `className` is recognized; every other key is
//! ignored.
//!
//! ## Examples
//!
//! ```
//! use code_titles::CodeTitleOptions;
//! use serde_json::json;
//!
//! let options = CodeTitleOptions::from_value(&json!({ "className": "code-title" }));
//! assert_eq!(options.class_name, "code-title");
//!
//! // Anything unusable falls back to the defaults
//! let options = CodeTitleOptions::from_value(&json!(42));
//! assert_eq!(options.class_name, "gatsby-code-title");
//! ```

use serde::Deserialize;
use tracing::warn;

use crate::types::CodeTitleResult;

/// CSS class applied to the inserted title label unless overridden.
pub const DEFAULT_CLASS_NAME: &str = "gatsby-code-title";

/// Options controlling how title labels are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeTitleOptions {
    /// CSS class of the `<div>` wrapping the title.
    pub class_name: String,
}

impl Default for CodeTitleOptions {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl CodeTitleOptions {
    /// Reads options from an arbitrary JSON value without ever failing.
    ///
    /// `null` yields the defaults silently. Any other value that does not
    /// deserialize (a non-object, a non-string `className`) also yields the
    /// defaults, with a warning.
    pub fn from_value(value: &serde_json::Value) -> Self {
        match Self::try_from_value(value) {
            Ok(options) => options,
            Err(err) => {
                warn!(error = %err, "Ignoring unusable code title options");
                Self::default()
            }
        }
    }

    /// Reads options from a JSON value, reporting values that do not fit.
    ///
    /// ## Errors
    ///
    /// Returns `CodeTitleError::Options` if the value is neither `null` nor an
    /// object with a string `className`.
    pub fn try_from_value(value: &serde_json::Value) -> CodeTitleResult<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(Self::deserialize(value)?)
    }
}

/// Formats the HTML fragment for a title label.
///
/// The title is inserted verbatim. Escaping is left to whoever renders the
/// final document.
pub fn label_html(title: &str, class_name: &str) -> String {
    format!(r#"<div class="{}">{}</div>"#, class_name, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_class_name() {
        assert_eq!(CodeTitleOptions::default().class_name, "gatsby-code-title");
    }

    #[test]
    fn test_from_value_null() {
        assert_eq!(CodeTitleOptions::from_value(&json!(null)), CodeTitleOptions::default());
    }

    #[test]
    fn test_from_value_empty_object() {
        assert_eq!(CodeTitleOptions::from_value(&json!({})), CodeTitleOptions::default());
    }

    #[test]
    fn test_from_value_ignores_unknown_keys() {
        let options = CodeTitleOptions::from_value(&json!({
            "className": "custom",
            "theme": "dark",
            "nested": { "a": [1, 2, 3] }
        }));
        assert_eq!(options.class_name, "custom");
    }

    #[test]
    fn test_from_value_non_object() {
        assert_eq!(CodeTitleOptions::from_value(&json!("oops")), CodeTitleOptions::default());
        assert_eq!(CodeTitleOptions::from_value(&json!([1, 2])), CodeTitleOptions::default());
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_from_value_wrong_type_warns() {
        let options = CodeTitleOptions::from_value(&json!({ "className": 7 }));
        assert_eq!(options, CodeTitleOptions::default());
        assert!(logs_contain("Ignoring unusable code title options"));
    }

    #[test]
    fn test_try_from_value_rejects_wrong_type() {
        let result = CodeTitleOptions::try_from_value(&json!({ "className": false }));
        assert!(result.is_err());
    }

    #[test]
    fn test_label_html() {
        insta::assert_snapshot!(
            label_html("hello-world.js", DEFAULT_CLASS_NAME),
            @r#"<div class="gatsby-code-title">hello-world.js</div>"#
        );
    }

    #[test]
    fn test_label_html_is_not_escaped() {
        assert_eq!(label_html("<b>a&b</b>", "t"), r#"<div class="t"><b>a&b</b></div>"#);
    }
}
