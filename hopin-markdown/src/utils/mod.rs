use std::{borrow::Cow, collections::HashMap, sync::OnceLock};

use comrak::nodes::{AstNode, NodeValue};
use regex::Regex;

/// Escape text for use as HTML element content.
///
/// Quotes are escaped too, single quotes as `&#39;`, so output matches
/// marked byte for byte.
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
  let escaped = html_escape::encode_double_quoted_attribute(text);
  if escaped.contains('\'') {
    Cow::Owned(escaped.replace('\'', "&#39;"))
  } else {
    escaped
  }
}

/// Escape text for use inside a double-quoted HTML attribute.
#[must_use]
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
  html_escape::encode_double_quoted_attribute(text)
}

/// Generates heading anchor IDs, keeping them unique within one document.
///
/// The first heading titled "Intro" gets `intro`, the next `intro-1`, then
/// `intro-2` and so on.
#[derive(Debug, Default)]
pub struct Slugger {
  seen: HashMap<String, usize>,
}

impl Slugger {
  /// Create a slugger with no IDs handed out yet.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Slug for `text`, suffixed if it was already handed out.
  pub fn slug(&mut self, text: &str) -> String {
    let base = slugify(text);
    let mut slug = base.clone();

    if let Some(count) = self.seen.get(&base).copied() {
      let mut count = count;
      loop {
        count += 1;
        slug = format!("{base}-{count}");
        if !self.seen.contains_key(&slug) {
          break;
        }
      }
      self.seen.insert(base, count);
    }

    self.seen.insert(slug.clone(), 0);
    slug
  }
}

/// Slugify a string for use as an anchor ID.
///
/// Lowercases, drops HTML tags and punctuation, and turns each whitespace
/// character into a dash. Non-ASCII letters are kept.
#[must_use]
pub fn slugify(text: &str) -> String {
  static TAG_RE: OnceLock<Regex> = OnceLock::new();
  static PUNCTUATION_RE: OnceLock<Regex> = OnceLock::new();

  let tag_re = TAG_RE.get_or_init(|| {
    Regex::new(r"(?i)<[!/a-z].*?>").unwrap_or_else(|e| {
      log::error!("Failed to compile TAG_RE regex: {e}");
      never_matching_regex()
    })
  });
  let punctuation_re = PUNCTUATION_RE.get_or_init(|| {
    Regex::new(
      r##"[\u{2000}-\u{206F}\u{2E00}-\u{2E7F}\\'!"#$%&()*+,./:;<=>?@\[\]^`{|}~]"##,
    )
    .unwrap_or_else(|e| {
      log::error!("Failed to compile PUNCTUATION_RE regex: {e}");
      never_matching_regex()
    })
  });

  let lowered = text.to_lowercase();
  let without_tags = tag_re.replace_all(lowered.trim(), "");
  let without_punctuation = punctuation_re.replace_all(&without_tags, "");
  without_punctuation
    .chars()
    .map(|c| if c.is_whitespace() { '-' } else { c })
    .collect()
}

/// Extract the plain text of an inline container (heading, image alt text).
///
/// Markup is dropped, raw HTML is skipped and line breaks become spaces.
pub fn extract_inline_text<'a>(node: &'a AstNode<'a>) -> String {
  let mut text = String::new();
  for child in node.children() {
    match &child.data.borrow().value {
      NodeValue::Text(t) => text.push_str(t),
      NodeValue::Code(t) => text.push_str(&t.literal),
      NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
      NodeValue::HtmlInline(_) => {},
      _ => text.push_str(&extract_inline_text(child)),
    }
  }
  text
}

/// Create a regex that never matches anything.
///
/// Used as a fallback pattern when a regex fails to compile.
#[must_use]
pub fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "This pattern is guaranteed to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}
