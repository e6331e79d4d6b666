//! # hopin-markdown - Markdown to HTML for static sites
//!
//! Renders Markdown to HTML and reports which HTML constructs the document
//! used, so a page only has to ship the styles and scripts it needs.
//!
//! ## Quick Start
//!
//! ```rust
//! use hopin_markdown::{RenderOptions, Token, render_markdown};
//!
//! let result = render_markdown("# Hello World", &RenderOptions::default());
//!
//! assert_eq!(result.html, "<h1 id=\"hello-world\">Hello World</h1>");
//! assert_eq!(result.tokens, vec![Token::H1]);
//! ```
//!
//! ## Features
//!
//! - **Construct tokens**: every render returns the sorted, deduplicated set
//!   of [`Token`]s it emitted (`h1`, `pre`, `code-highlighted`, `img`, ...)
//! - **Syntax highlighting** for an allow-list of languages, with CSS classes
//!   that match [`SyntectHighlighter::stylesheet`]
//! - **Responsive images**: an image whose href names a directory of
//!   width-named files (`400.jpg`, `800.webp`, ...) under the static asset
//!   directory becomes a `<picture>` with `srcset`s
//! - **Graceful degradation**: highlighting or image problems never fail a
//!   render; they fall back to plain HTML and show up in
//!   [`RenderResult::warnings`]
//!
//! ## Configuration
//!
//! ```rust
//! use hopin_markdown::{AnimatedImagePolicy, MarkdownRenderer, RenderOptionsBuilder};
//!
//! let options = RenderOptionsBuilder::new()
//!   .static_asset_dir(Some("public"))
//!   .animated_images(AnimatedImagePolicy::Responsive)
//!   .image_paragraph_class(Some("image"))
//!   .build();
//!
//! let renderer = MarkdownRenderer::new(options);
//! let result = renderer.render("Some *text*");
//! assert_eq!(result.html, "<p>Some <em>text</em></p>");
//! ```

pub mod error;
pub mod processor;
pub mod render;
pub mod syntax;
mod types;
pub mod utils;

#[cfg(feature = "syntect")]
pub use crate::syntax::SyntectHighlighter;
pub use crate::{
  error::RenderError,
  processor::{
    AnimatedImagePolicy,
    DEFAULT_IMAGE_PARAGRAPH_CLASS,
    MarkdownRenderer,
    RenderOptions,
    RenderOptionsBuilder,
    render_markdown,
    render_markdown_value,
  },
  render::HtmlRenderer,
  syntax::{SyntaxError, SyntaxHighlighter},
  types::{RenderResult, Token},
};
