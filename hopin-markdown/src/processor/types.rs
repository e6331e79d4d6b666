//! Type definitions for the Markdown renderer.
//!
//! Contains the configuration (`RenderOptions` and its builder) and the
//! renderer struct itself.
//!
//! # Examples
//!
//! ```
//! use hopin_markdown::{MarkdownRenderer, RenderOptions};
//!
//! let options = RenderOptions {
//!   static_asset_dir: Some("public".into()),
//!   ..Default::default()
//! };
//!
//! let renderer = MarkdownRenderer::new(options);
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use serde::Deserialize;

use crate::syntax::SyntaxHighlighter;

/// Options for configuring the renderer.
///
/// Deserializes from JSON with every field optional, so a configuration file
/// only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct RenderOptions {
  /// Directory that image hrefs are resolved against. Relative paths are
  /// made absolute against the working directory. `None` disables
  /// responsive images.
  pub static_asset_dir: Option<PathBuf>,

  /// Enable syntax highlighting for allow-listed code block languages.
  pub highlight_code: bool,

  /// Enable GitHub Flavored Markdown tables, strikethrough and bare URL
  /// autolinks.
  pub gfm: bool,

  /// What to do with images that have an animated extension.
  pub animated_images: AnimatedImagePolicy,

  /// Extensions treated as animated, compared case-insensitively.
  pub animated_extensions: Vec<String>,

  /// Optional: class for paragraphs that hold a single image and nothing
  /// else. Defaults to [`DEFAULT_IMAGE_PARAGRAPH_CLASS`]; `None` (or `null`
  /// in JSON) leaves those paragraphs unstyled.
  pub image_paragraph_class: Option<String>,

  /// `sizes` attribute of responsive image sources.
  pub picture_sizes: String,

  /// Take the language of an untagged code block from its first line when
  /// that line is an allow-listed language name.
  pub detect_first_line_language: bool,
}

/// Utility class put on image-only paragraphs unless configured otherwise.
pub const DEFAULT_IMAGE_PARAGRAPH_CLASS: &str = "__hopin__u-img";

/// Handling of animated images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimatedImagePolicy {
  /// Emit `data-src` instead of `src` and leave loading to a script.
  #[default]
  LazyLoad,
  /// Treat animated images like any other image.
  Responsive,
}

impl RenderOptions {
  /// Enable all available features based on compile-time feature flags.
  #[must_use]
  pub fn with_all_features() -> Self {
    Self {
      highlight_code: cfg!(feature = "syntect"),
      detect_first_line_language: true,
      ..Self::default()
    }
  }

  /// Whether `href` points at an animated image.
  ///
  /// Query strings and fragments are ignored.
  #[must_use]
  pub fn is_animated(&self, href: &str) -> bool {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    Path::new(path)
      .extension()
      .and_then(|extension| extension.to_str())
      .is_some_and(|extension| {
        self
          .animated_extensions
          .iter()
          .any(|animated| animated.eq_ignore_ascii_case(extension))
      })
  }
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      static_asset_dir:           None,
      highlight_code:             true,
      gfm:                        true,
      animated_images:            AnimatedImagePolicy::default(),
      animated_extensions:        vec!["gif".to_string()],
      image_paragraph_class:      Some(
        DEFAULT_IMAGE_PARAGRAPH_CLASS.to_string(),
      ),
      picture_sizes:              "100vw".to_string(),
      detect_first_line_language: false,
    }
  }
}

/// Main Markdown renderer.
///
/// Can be cheaply cloned since the highlighter sits behind an `Arc`. Holds
/// no per-render state, so one renderer can serve any number of threads.
#[derive(Clone)]
pub struct MarkdownRenderer {
  pub(crate) options:     RenderOptions,
  pub(crate) static_dir:  Option<PathBuf>,
  pub(crate) highlighter: Option<Arc<dyn SyntaxHighlighter>>,
}

impl std::fmt::Debug for MarkdownRenderer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MarkdownRenderer")
      .field("options", &self.options)
      .field("static_dir", &self.static_dir)
      .field(
        "highlighter",
        &self.highlighter.as_ref().map(|highlighter| highlighter.name()),
      )
      .finish()
  }
}

/// Builder for constructing `RenderOptions` with method chaining.
#[derive(Debug, Clone, Default)]
pub struct RenderOptionsBuilder {
  options: RenderOptions,
}

impl RenderOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the directory image hrefs are resolved against.
  #[must_use]
  pub fn static_asset_dir<P: Into<PathBuf>>(mut self, dir: Option<P>) -> Self {
    self.options.static_asset_dir = dir.map(Into::into);
    self
  }

  /// Enable or disable syntax highlighting.
  #[must_use]
  pub const fn highlight_code(mut self, enabled: bool) -> Self {
    self.options.highlight_code = enabled;
    self
  }

  /// Enable or disable GitHub Flavored Markdown.
  #[must_use]
  pub const fn gfm(mut self, enabled: bool) -> Self {
    self.options.gfm = enabled;
    self
  }

  /// Set how animated images are rendered.
  #[must_use]
  pub const fn animated_images(mut self, policy: AnimatedImagePolicy) -> Self {
    self.options.animated_images = policy;
    self
  }

  /// Set the extensions treated as animated.
  #[must_use]
  pub fn animated_extensions<I, S>(mut self, extensions: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.options.animated_extensions =
      extensions.into_iter().map(Into::into).collect();
    self
  }

  /// Set the class for image-only paragraphs.
  #[must_use]
  pub fn image_paragraph_class<S: Into<String>>(
    mut self,
    class: Option<S>,
  ) -> Self {
    self.options.image_paragraph_class = class.map(Into::into);
    self
  }

  /// Set the `sizes` attribute of responsive image sources.
  #[must_use]
  pub fn picture_sizes<S: Into<String>>(mut self, sizes: S) -> Self {
    self.options.picture_sizes = sizes.into();
    self
  }

  /// Enable or disable first-line language detection.
  #[must_use]
  pub const fn detect_first_line_language(mut self, enabled: bool) -> Self {
    self.options.detect_first_line_language = enabled;
    self
  }

  /// Build the final `RenderOptions`.
  #[must_use]
  pub fn build(self) -> RenderOptions {
    self.options
  }
}
