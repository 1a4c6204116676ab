//! A line-oriented Markdown to HTML converter.
//!
//! Each line is scanned for marker spans (runs of characters that aren't
//! plain text), classified as a heading, list item, blockquote line or
//! paragraph text, and its inline emphasis, underline, links and images are
//! resolved. Markup that can't be resolved is never an error; it is kept as
//! plain paragraph text.
//!
//! ```
//! use linemark::{markdown_to_html, Options};
//!
//! let mut options = Options::default();
//! options.render.fragment = true;
//! assert_eq!(markdown_to_html("Hello, **world**!\n", &options),
//!            "<p>Hello, <b>world</b>!</p>\n");
//! ```
//!
//! Without `fragment`, the result is a complete document:
//!
//! ```
//! use linemark::{markdown_to_html, Options};
//!
//! let mut options = Options::default();
//! options.render.title = Some("Notes".to_string());
//! assert_eq!(markdown_to_html("- one\n- two\n", &options),
//!            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
//!             <title>Notes</title>\n</head>\n<body>\n\
//!             <ul>\n<li>one</li>\n<li>two</li>\n</ul>\n\
//!             </body>\n</html>\n");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod character_set;
mod error;
pub mod html;
pub mod loader;
mod parser;
mod pretty;
pub mod scanner;
mod strings;

pub use error::Error;
pub use html::format_document as format_html;
pub use loader::{load_all, Source};
pub use parser::options::{self, Parse, Render};
pub use parser::{Block, Options, Parser};
pub use pretty::prettify;

/// Render Markdown to HTML.
///
/// See the documentation of the crate root for an example.
pub fn markdown_to_html(md: &str, options: &Options) -> String {
    let mut s = String::with_capacity(md.len() * 2);
    format_html(md, options, &mut s).unwrap();
    s
}

/// Render Markdown to HTML and reformat it with [`prettify`].
pub fn markdown_to_pretty_html(md: &str, options: &Options) -> String {
    prettify(&markdown_to_html(md, options))
}
