//! Code Titles - title labels for fenced code blocks
//!
//! Reads a `title=` directive out of a code block's annotation, removes it,
//! and inserts a rendered title label in front of the block in the Markdown
//! AST (`markdown::mdast`).
//!
//! ````markdown
//! ```js{1,3}:title=hello-world.js&clipboard=true
//! alert('hello world')
//! ```
//! ````
//!
//! becomes an HTML node `<div class="gatsby-code-title">hello-world.js</div>`
//! followed by the same code block annotated `js{1,3}:clipboard=true`.
//!
//! ## Modules
//!
//! - [`annotation`] - annotation grammar parser and serializer
//! - [`transform`] - the tree walk that rewrites code blocks and inserts labels
//! - [`options`] - label configuration

pub mod annotation;
pub mod options;
pub mod transform;
mod types;

pub use annotation::{Annotation, parse_annotation};
pub use options::{CodeTitleOptions, DEFAULT_CLASS_NAME, label_html};
pub use transform::{transform, transform_in_place, transform_markdown};
pub use types::{CodeTitleError, CodeTitleResult};
