//! Core implementation of the Markdown renderer.
//!
//! One call to [`MarkdownRenderer::render`] is one parse and one traversal
//! with a fresh [`RenderSession`].
use std::{path::Path, sync::Arc};

use comrak::{Arena, options::Options, parse_document};
use log::{trace, warn};

use super::types::{MarkdownRenderer, RenderOptions};
use crate::{
  error::RenderError,
  render::{RenderSession, render_document},
  syntax::{SyntaxHighlighter, create_default_highlighter},
  types::RenderResult,
};

impl MarkdownRenderer {
  /// Create a new `MarkdownRenderer` with the given options.
  ///
  /// The static asset directory is made absolute here, once. If that fails
  /// the problem is logged and local images render without variants.
  #[must_use]
  pub fn new(options: RenderOptions) -> Self {
    let static_dir =
      options
        .static_asset_dir
        .as_deref()
        .and_then(|dir| match std::path::absolute(dir) {
          Ok(dir) => Some(dir),
          Err(e) => {
            warn!(
              "Failed to resolve static asset directory {}: {e}",
              dir.display()
            );
            None
          },
        });

    let highlighter = if options.highlight_code {
      match create_default_highlighter() {
        Ok(highlighter) => Some(highlighter),
        Err(e) => {
          warn!("Syntax highlighting unavailable: {e}");
          None
        },
      }
    } else {
      None
    };

    Self {
      options,
      static_dir,
      highlighter,
    }
  }

  /// Replace the syntax highlighter.
  #[must_use]
  pub fn with_highlighter(
    mut self,
    highlighter: Arc<dyn SyntaxHighlighter>,
  ) -> Self {
    self.highlighter = Some(highlighter);
    self
  }

  /// Access renderer options.
  #[must_use]
  pub const fn options(&self) -> &RenderOptions {
    &self.options
  }

  /// Absolute static asset directory, if one is configured and resolved.
  #[must_use]
  pub fn static_dir(&self) -> Option<&Path> {
    self.static_dir.as_deref()
  }

  /// Name of the highlighter in use, if any.
  #[must_use]
  pub fn highlighter_name(&self) -> Option<&'static str> {
    self.highlighter.as_ref().map(|highlighter| highlighter.name())
  }

  /// Render Markdown to HTML and collect the tokens it produced.
  ///
  /// Never fails: features that cannot be applied degrade to plain HTML and
  /// are listed in [`RenderResult::warnings`].
  #[must_use]
  pub fn render(&self, markdown: &str) -> RenderResult {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, markdown, &options);

    let mut session = RenderSession::new(
      &self.options,
      self.static_dir(),
      self.highlighter.as_deref(),
    );
    let html = render_document(root, &mut session);
    let (tokens, warnings) = session.finish();

    trace!(
      "Rendered {} bytes of Markdown into {} bytes of HTML with {} tokens",
      markdown.len(),
      html.len(),
      tokens.len()
    );

    RenderResult {
      html: html.trim().to_string(),
      tokens,
      warnings,
    }
  }

  /// Render a dynamically typed input, which must be a JSON string.
  ///
  /// # Errors
  ///
  /// Returns [`RenderError::InvalidInput`] when `value` is not a string.
  pub fn render_value(
    &self,
    value: &serde_json::Value,
  ) -> Result<RenderResult, RenderError> {
    let Some(markdown) = value.as_str() else {
      return Err(RenderError::invalid_input(value));
    };
    Ok(self.render(markdown))
  }

  /// Build comrak options from the renderer options.
  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    if self.options.gfm {
      options.extension.table = true;
      options.extension.strikethrough = true;
      options.extension.autolink = true;
    }
    options
  }
}
