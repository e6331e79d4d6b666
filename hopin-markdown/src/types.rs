//! Types for the hopin-markdown public API.
use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

/// Family of HTML elements the renderer emitted.
///
/// A render reports the distinct tokens it produced so callers can load the
/// styles and scripts for those features only. Tokens order by their
/// [name](Self::as_str), which is also how they serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
  #[serde(rename = "h1")]
  H1,
  #[serde(rename = "h2")]
  H2,
  #[serde(rename = "h3")]
  H3,
  #[serde(rename = "h4")]
  H4,
  #[serde(rename = "h5")]
  H5,
  #[serde(rename = "h6")]
  H6,
  #[serde(rename = "pre")]
  Pre,
  #[serde(rename = "code")]
  Code,
  #[serde(rename = "code-highlighted")]
  CodeHighlighted,
  #[serde(rename = "img")]
  Img,
  #[serde(rename = "async-img")]
  AsyncImg,
  #[serde(rename = "blockquote")]
  Blockquote,
  #[serde(rename = "rawhtml")]
  RawHtml,
  #[serde(rename = "hr")]
  Hr,
  #[serde(rename = "ol")]
  Ol,
  #[serde(rename = "ul")]
  Ul,
  #[serde(rename = "li")]
  Li,
  #[serde(rename = "p")]
  P,
  #[serde(rename = "strong")]
  Strong,
  #[serde(rename = "em")]
  Em,
  #[serde(rename = "br")]
  Br,
  #[serde(rename = "del")]
  Del,
  #[serde(rename = "a")]
  A,
  #[serde(rename = "table")]
  Table,
  #[serde(rename = "thead")]
  Thead,
  #[serde(rename = "tbody")]
  Tbody,
  #[serde(rename = "tr")]
  Tr,
  #[serde(rename = "td")]
  Td,
  #[serde(rename = "th")]
  Th,
}

impl Token {
  /// Heading tokens, indexed by `level - 1`.
  pub const HEADINGS: [Self; 6] =
    [Self::H1, Self::H2, Self::H3, Self::H4, Self::H5, Self::H6];

  /// Name of the token as reported to callers.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::H1 => "h1",
      Self::H2 => "h2",
      Self::H3 => "h3",
      Self::H4 => "h4",
      Self::H5 => "h5",
      Self::H6 => "h6",
      Self::Pre => "pre",
      Self::Code => "code",
      Self::CodeHighlighted => "code-highlighted",
      Self::Img => "img",
      Self::AsyncImg => "async-img",
      Self::Blockquote => "blockquote",
      Self::RawHtml => "rawhtml",
      Self::Hr => "hr",
      Self::Ol => "ol",
      Self::Ul => "ul",
      Self::Li => "li",
      Self::P => "p",
      Self::Strong => "strong",
      Self::Em => "em",
      Self::Br => "br",
      Self::Del => "del",
      Self::A => "a",
      Self::Table => "table",
      Self::Thead => "thead",
      Self::Tbody => "tbody",
      Self::Tr => "tr",
      Self::Td => "td",
      Self::Th => "th",
    }
  }

  /// Token for a heading of the given level.
  ///
  /// # Panics
  ///
  /// Panics if `level` is not within `1..=6`. Parsers only produce levels in
  /// that range, so anything else is a bug upstream.
  #[must_use]
  pub const fn heading(level: u8) -> Self {
    Self::HEADINGS[level as usize - 1]
  }
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl PartialOrd for Token {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Token {
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_str().cmp(other.as_str())
  }
}

/// Result of rendering a Markdown document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderResult {
  /// Rendered HTML output, with surrounding whitespace trimmed.
  pub html: String,

  /// Distinct tokens emitted while rendering, sorted by name.
  pub tokens: Vec<Token>,

  /// Features that degraded to plain rendering (unknown highlight language,
  /// unreadable image directory and so on). Each is also logged.
  #[serde(default)]
  pub warnings: Vec<String>,
}

impl RenderResult {
  /// Token names, in the same order as [`tokens`](Self::tokens).
  #[must_use]
  pub fn token_names(&self) -> Vec<&'static str> {
    self.tokens.iter().map(|token| token.as_str()).collect()
  }

  /// Whether the document produced the given token.
  #[must_use]
  pub fn has_token(&self, token: Token) -> bool {
    self.tokens.binary_search(&token).is_ok()
  }
}
