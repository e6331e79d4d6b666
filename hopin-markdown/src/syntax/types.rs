//! Core types and traits for syntax highlighting.

use super::error::SyntaxResult;

/// Languages that code blocks may be highlighted as.
///
/// This list is deliberately narrower than what a backend can recognize: a
/// fence tagged with anything else is rendered as plain code, even when the
/// backend happens to ship a grammar for it.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
  "javascript",
  "python",
  "css",
  "css-extras",
  "bash",
  "java",
  "go",
  "typescript",
  "php",
  "sass",
  "html",
  "xml",
];

/// Check a fence language against [`SUPPORTED_LANGUAGES`].
///
/// The match is exact and case-sensitive, `JavaScript` is not `javascript`.
#[must_use]
pub fn is_supported_language(language: &str) -> bool {
  SUPPORTED_LANGUAGES.contains(&language)
}

/// Trait for syntax highlighting backends.
///
/// A backend turns source text into HTML that is already escaped and can be
/// placed inside `<code>` verbatim. Backends report failure through
/// [`SyntaxError`](super::SyntaxError) and never fall back to plain text on
/// their own; deciding what to render instead is the caller's job.
pub trait SyntaxHighlighter: Send + Sync {
  /// Get the name of this highlighter backend
  fn name(&self) -> &'static str;

  /// Get a list of languages the backend has grammars for
  fn supported_languages(&self) -> Vec<String>;

  /// Check if the backend has a grammar for a language
  fn supports_language(&self, language: &str) -> bool {
    self
      .supported_languages()
      .iter()
      .any(|lang| lang.eq_ignore_ascii_case(language))
  }

  /// Highlight code with the specified language.
  ///
  /// # Arguments
  ///
  /// * `code` - The source code to highlight
  /// * `language` - The language identifier, as written in the code fence
  ///
  /// # Returns
  ///
  /// Escaped, highlighted HTML on success
  ///
  /// # Errors
  ///
  /// Returns an error if the language has no grammar or the grammar fails on
  /// the input.
  fn highlight(&self, code: &str, language: &str) -> SyntaxResult<String>;
}
