//! Highlighting errors.

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Why a code block or stylesheet could not be highlighted.
///
/// None of these reach a render caller; the renderer falls back to plain
/// code and records the message as a warning.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
  /// The backend has no grammar for the fence language.
  #[error("No grammar for language '{0}'")]
  UnsupportedLanguage(String),
  /// [`stylesheet`](super::SyntectHighlighter::stylesheet) was asked for an
  /// unknown theme.
  #[error("No stylesheet theme named '{0}'")]
  ThemeNotFound(String),
  /// The grammar or the CSS generator gave up on its input.
  #[error("Syntax highlighting failed: {0}")]
  HighlightingFailed(String),
  #[error("Built without a highlighting backend, enable the 'syntect' feature")]
  NoBackendAvailable,
}
