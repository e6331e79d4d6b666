//! Markdown rendering entry points.
//!
//! - [`core`]: the [`MarkdownRenderer`] pipeline (parse, walk, collect)
//! - [`types`]: configuration and the renderer struct
pub mod core;
pub mod types;

pub use types::{
  AnimatedImagePolicy,
  DEFAULT_IMAGE_PARAGRAPH_CLASS,
  MarkdownRenderer,
  RenderOptions,
  RenderOptionsBuilder,
};

use crate::{error::RenderError, types::RenderResult};

/// Render Markdown with a one-off [`MarkdownRenderer`].
///
/// Prefer keeping a renderer around when rendering many documents, so the
/// highlighter and static directory are only set up once.
#[must_use]
pub fn render_markdown(markdown: &str, options: &RenderOptions) -> RenderResult {
  MarkdownRenderer::new(options.clone()).render(markdown)
}

/// Render a dynamically typed input with a one-off [`MarkdownRenderer`].
///
/// # Errors
///
/// Returns [`RenderError::InvalidInput`] when `value` is not a string.
pub fn render_markdown_value(
  value: &serde_json::Value,
  options: &RenderOptions,
) -> Result<RenderResult, RenderError> {
  MarkdownRenderer::new(options.clone()).render_value(value)
}
