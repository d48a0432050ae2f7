//! Inserts title labels in front of annotated code blocks in an MDAST.
//!
//! Every `Node::Code` in the tree is visited, however deeply it is nested
//! (list items, block quotes, footnotes, ...). When its annotation carries a
//! `title=` directive the code block's `lang` is rewritten without it and a
//! `Node::Html` label is inserted as its immediate previous sibling.
//!
//! ## Examples
//!
//! ```
//! use code_titles::{CodeTitleOptions, transform_markdown};
//! use markdown::mdast::Node;
//!
//! let tree = transform_markdown(
//!     "```js:title=hello-world.js\nalert('hello world')\n```",
//!     &CodeTitleOptions::default(),
//! )
//! .unwrap();
//!
//! let children = tree.children().unwrap();
//! assert!(matches!(&children[0], Node::Html(html) if html.value == r#"<div class="gatsby-code-title">hello-world.js</div>"#));
//! assert!(matches!(&children[1], Node::Code(code) if code.lang.as_deref() == Some("js")));
//! ```

use markdown::ParseOptions;
use markdown::mdast::{Code, Node};
use tracing::{debug, trace};

use crate::annotation::parse_annotation;
use crate::options::CodeTitleOptions;
use crate::types::{CodeTitleError, CodeTitleResult};

/// Adds title labels to every titled code block in `tree` and returns it.
///
/// The tree is mutated in place; clone it first if the original is still
/// needed.
pub fn transform(mut tree: Node, options: &CodeTitleOptions) -> Node {
    transform_in_place(&mut tree, options);
    tree
}

/// Adds title labels to every titled code block in `tree`.
///
/// Returns the number of labels inserted. A tree whose root is itself a code
/// block is left alone, since there is no parent to insert a label into.
pub fn transform_in_place(tree: &mut Node, options: &CodeTitleOptions) -> usize {
    let inserted = visit(tree, options);
    debug!(inserted, "Code title transform complete");
    inserted
}

/// Parses Markdown with GFM extensions and runs the transform on the result.
///
/// ## Errors
///
/// Returns `CodeTitleError::AstParse` if the content cannot be parsed into an AST.
pub fn transform_markdown(source: &str, options: &CodeTitleOptions) -> CodeTitleResult<Node> {
    let tree = markdown::to_mdast(source, &ParseOptions::gfm())
        .map_err(|e| CodeTitleError::AstParse(e.to_string()))?;
    Ok(transform(tree, options))
}

fn visit(node: &mut Node, options: &CodeTitleOptions) -> usize {
    let Some(children) = node.children_mut() else {
        return 0;
    };

    let mut inserted = 0;
    let mut index = 0;
    while index < children.len() {
        let label = match &mut children[index] {
            Node::Code(code) => retitle(code, options),
            child => {
                inserted += visit(child, options);
                None
            }
        };

        if let Some(label) = label {
            children.insert(index, label);
            inserted += 1;
            // step over the label so the code block isn't revisited
            index += 1;
        }
        index += 1;
    }
    inserted
}

/// Strips the title from a code block's annotation, returning its label.
fn retitle(code: &mut Code, options: &CodeTitleOptions) -> Option<Node> {
    let Some(annotation) = parse_annotation(code.lang.as_deref(), code.meta.as_deref()) else {
        trace!("Skipping code block without annotation");
        return None;
    };
    if annotation.title.is_none() {
        trace!(lang = ?code.lang, "Skipping code block without title");
        return None;
    }
    if annotation.language.is_empty() {
        trace!(lang = ?code.lang, "Skipping titled code block without language");
        return None;
    }

    let label = annotation.label(options);
    let lang = annotation.to_lang();
    debug!(
        title = annotation.title.as_deref(),
        language = %annotation.language,
        lang = %lang,
        "Adding code title"
    );
    code.lang = Some(lang);
    code.meta = None;
    label
}
