//! Syntect-based syntax highlighting backend enhanced with two-face.
//!
//! Grammars come from Sublime Text syntax definitions (TextMate grammars),
//! extended by the two-face crate with the definitions syntect does not ship
//! itself (TypeScript among them). Output is class based, so the colours live
//! in a stylesheet produced by [`SyntectHighlighter::stylesheet`] rather than
//! inline in every page.

use std::sync::OnceLock;

use syntect::{
  highlighting::ThemeSet,
  html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style},
  parsing::{SyntaxReference, SyntaxSet},
  util::LinesWithEndings,
};

use super::{
  error::{SyntaxError, SyntaxResult},
  types::SyntaxHighlighter,
};

/// Fence languages whose grammar goes by another token.
const GRAMMAR_ALIASES: &[(&str, &str)] = &[("css-extras", "css")];

/// Syntect-based syntax highlighter
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntectHighlighter;

impl SyntectHighlighter {
  /// Create a new Syntect highlighter.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }

  /// Get the syntect `SyntaxSet`.
  fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(two_face::syntax::extra_newlines)
  }

  /// Get the syntect `ThemeSet` used for stylesheets.
  fn theme_set() -> &'static ThemeSet {
    static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    THEME_SET.get_or_init(ThemeSet::load_defaults)
  }

  fn find_syntax(language: &str) -> Option<&'static SyntaxReference> {
    let token = GRAMMAR_ALIASES
      .iter()
      .find(|(alias, _)| *alias == language)
      .map_or(language, |(_, grammar)| *grammar);
    Self::syntax_set().find_syntax_by_token(token)
  }

  /// Names of the themes [`stylesheet`](Self::stylesheet) accepts, sorted.
  #[must_use]
  pub fn available_themes(&self) -> Vec<String> {
    let mut themes: Vec<String> =
      Self::theme_set().themes.keys().cloned().collect();
    themes.sort();
    themes
  }

  /// Generate the CSS matching the classes emitted by [`highlight`].
  ///
  /// [`highlight`]: SyntaxHighlighter::highlight
  ///
  /// # Errors
  ///
  /// Returns [`SyntaxError::ThemeNotFound`] for an unknown theme, or
  /// [`SyntaxError::HighlightingFailed`] if syntect cannot produce the CSS.
  pub fn stylesheet(&self, theme: &str) -> SyntaxResult<String> {
    let theme = Self::theme_set()
      .themes
      .get(theme)
      .ok_or_else(|| SyntaxError::ThemeNotFound(theme.to_string()))?;

    css_for_theme_with_class_style(theme, ClassStyle::Spaced)
      .map_err(|e| SyntaxError::HighlightingFailed(e.to_string()))
  }
}

impl SyntaxHighlighter for SyntectHighlighter {
  fn name(&self) -> &'static str {
    "Syntect"
  }

  fn supported_languages(&self) -> Vec<String> {
    Self::syntax_set()
      .syntaxes()
      .iter()
      .flat_map(|syntax| {
        std::iter::once(syntax.name.to_lowercase())
          .chain(syntax.file_extensions.iter().map(|ext| ext.to_lowercase()))
      })
      .collect()
  }

  fn supports_language(&self, language: &str) -> bool {
    Self::find_syntax(language).is_some()
  }

  fn highlight(&self, code: &str, language: &str) -> SyntaxResult<String> {
    let syntax = Self::find_syntax(language)
      .ok_or_else(|| SyntaxError::UnsupportedLanguage(language.to_string()))?;

    let mut generator = ClassedHTMLGenerator::new_with_class_style(
      syntax,
      Self::syntax_set(),
      ClassStyle::Spaced,
    );

    for line in LinesWithEndings::from(code) {
      generator
        .parse_html_for_line_which_includes_newline(line)
        .map_err(|e| SyntaxError::HighlightingFailed(e.to_string()))?;
    }

    Ok(generator.finalize())
  }
}
