//! The hooks used for a real render: token bookkeeping, highlighting and
//! responsive images on top of the baseline HTML.

use std::{fmt::Write, path::Path};

use log::{debug, warn};

use super::{HtmlRenderer, TableCellFlags, TokenSet, baseline, image};
use crate::{
  processor::types::{AnimatedImagePolicy, RenderOptions},
  syntax::{SyntaxHighlighter, is_supported_language},
  types::Token,
  utils::{Slugger, escape_attribute},
};

/// State of one render call.
///
/// A session is created for a single document, records every construct the
/// walk passes through and is consumed by [`finish`](Self::finish). Nothing
/// in it outlives the call, so concurrent renders never share tokens or
/// warnings.
///
/// None of the hooks fail. Problems with highlighting or image lookups fall
/// back to the baseline HTML and are recorded as warnings.
pub struct RenderSession<'r> {
  options:     &'r RenderOptions,
  static_dir:  Option<&'r Path>,
  highlighter: Option<&'r dyn SyntaxHighlighter>,
  tokens:      TokenSet,
  /// Markup of every image rendered so far, to spot image-only paragraphs.
  images:      Vec<String>,
  warnings:    Vec<String>,
}

impl<'r> RenderSession<'r> {
  /// Start a session.
  ///
  /// `static_dir` should already be absolute; `None` turns off local image
  /// lookups. Without a `highlighter`, allow-listed code blocks degrade to
  /// plain code with a warning.
  #[must_use]
  pub fn new(
    options: &'r RenderOptions,
    static_dir: Option<&'r Path>,
    highlighter: Option<&'r dyn SyntaxHighlighter>,
  ) -> Self {
    Self {
      options,
      static_dir,
      highlighter,
      tokens: TokenSet::new(),
      images: Vec::new(),
      warnings: Vec::new(),
    }
  }

  /// Tokens recorded so far.
  #[must_use]
  pub const fn tokens(&self) -> &TokenSet {
    &self.tokens
  }

  /// Warnings recorded so far.
  #[must_use]
  pub fn warnings(&self) -> &[String] {
    &self.warnings
  }

  /// End the session, returning the sorted tokens and the warnings.
  #[must_use]
  pub fn finish(self) -> (Vec<Token>, Vec<String>) {
    (self.tokens.into_sorted(), self.warnings)
  }

  fn record(&mut self, token: Token) {
    self.tokens.insert(token);
  }

  fn warn(&mut self, message: String) {
    warn!("{message}");
    self.warnings.push(message);
  }

  /// Highlighted markup for `code`, or `None` to render it plain.
  fn highlight(&mut self, code: &str, language: &str) -> Option<String> {
    let Some(highlighter) = self.highlighter else {
      self.warn(format!(
        "No syntax highlighting backend available, rendering {language} code \
         as plain text"
      ));
      return None;
    };

    match highlighter.highlight(code, language) {
      Ok(html) => Some(html),
      Err(e) => {
        self.warn(format!(
          "An error occurred while highlighting {language} code with {}: {e}",
          highlighter.name()
        ));
        None
      },
    }
  }

  fn render_image(
    &mut self,
    href: &str,
    title: Option<&str>,
    text: &str,
  ) -> String {
    if self.options.animated_images == AnimatedImagePolicy::LazyLoad
      && self.options.is_animated(href)
    {
      self.record(Token::AsyncImg);
      return lazy_image(href, title, text);
    }

    if href.starts_with("http") {
      return baseline::image(href, title, text);
    }
    let Some(static_dir) = self.static_dir else {
      return baseline::image(href, title, text);
    };

    match image::resolve_variants(static_dir, href) {
      Ok(Some(set)) => {
        for skipped in &set.skipped {
          self.warn(format!("Skipping image variant: {skipped}"));
        }
        if let Some(html) = set.to_picture(text, &self.options.picture_sizes)
        {
          html
        } else {
          self.warn(format!(
            "Image directory for '{href}' holds no usable variants"
          ));
          baseline::image(href, title, text)
        }
      },
      Ok(None) => baseline::image(href, title, text),
      Err(e) => {
        self.warn(format!("Failed to read image variants for '{href}': {e}"));
        baseline::image(href, title, text)
      },
    }
  }
}

impl HtmlRenderer for RenderSession<'_> {
  fn heading(
    &mut self,
    text: &str,
    level: u8,
    raw: &str,
    slugger: &mut Slugger,
  ) -> String {
    self.record(Token::heading(level));
    baseline::heading(text, level, &slugger.slug(raw))
  }

  fn code(
    &mut self,
    code: &str,
    language: Option<&str>,
    escaped: bool,
  ) -> String {
    self.record(Token::Pre);
    self.record(Token::Code);

    let (code, language) = match language {
      Some(language) => (code, Some(language)),
      None if self.options.detect_first_line_language => {
        detect_language(code)
      },
      None => (code, None),
    };

    let Some(language) = language else {
      return baseline::code(code, None, escaped);
    };
    if !self.options.highlight_code {
      return baseline::code(code, None, escaped);
    }
    if !is_supported_language(language) {
      self.warn(format!(
        "Language '{language}' was not identified for syntax highlighting"
      ));
      return baseline::code(code, None, escaped);
    }

    match self.highlight(code, language) {
      Some(html) => {
        self.record(Token::CodeHighlighted);
        baseline::code(&html, Some(language), true)
      },
      None => baseline::code(code, None, escaped),
    }
  }

  fn codespan(&mut self, code: &str) -> String {
    self.record(Token::Code);
    baseline::codespan(code)
  }

  fn image(&mut self, href: &str, title: Option<&str>, text: &str) -> String {
    self.record(Token::Img);
    let html = self.render_image(href, title, text);
    if self.options.image_paragraph_class.is_some() {
      self.images.push(html.clone());
    }
    html
  }

  fn html(&mut self, html: &str) -> String {
    self.record(Token::RawHtml);
    baseline::html(html)
  }

  fn hr(&mut self) -> String {
    self.record(Token::Hr);
    baseline::hr()
  }

  fn blockquote(&mut self, quote: &str) -> String {
    self.record(Token::Blockquote);
    baseline::blockquote(quote)
  }

  fn list(&mut self, body: &str, ordered: bool, start: usize) -> String {
    self.record(if ordered { Token::Ol } else { Token::Ul });
    baseline::list(body, ordered, start)
  }

  fn listitem(&mut self, text: &str) -> String {
    self.record(Token::Li);
    baseline::listitem(text)
  }

  fn paragraph(&mut self, text: &str) -> String {
    self.record(Token::P);
    if let Some(class) = &self.options.image_paragraph_class
      && self.images.iter().any(|image| image == text)
    {
      return format!("<p class=\"{}\">{text}</p>\n", escape_attribute(class));
    }
    baseline::paragraph(text)
  }

  fn table(&mut self, header: &str, body: &str) -> String {
    self.record(Token::Table);
    self.record(Token::Thead);
    if !body.is_empty() {
      self.record(Token::Tbody);
    }
    baseline::table(header, body)
  }

  fn tablerow(&mut self, content: &str) -> String {
    self.record(Token::Tr);
    baseline::tablerow(content)
  }

  fn tablecell(&mut self, content: &str, flags: TableCellFlags) -> String {
    self.record(if flags.header { Token::Th } else { Token::Td });
    baseline::tablecell(content, flags)
  }

  fn strong(&mut self, text: &str) -> String {
    self.record(Token::Strong);
    baseline::strong(text)
  }

  fn em(&mut self, text: &str) -> String {
    self.record(Token::Em);
    baseline::em(text)
  }

  fn br(&mut self) -> String {
    self.record(Token::Br);
    baseline::br()
  }

  fn del(&mut self, text: &str) -> String {
    self.record(Token::Del);
    baseline::del(text)
  }

  fn link(&mut self, href: &str, title: Option<&str>, text: &str) -> String {
    self.record(Token::A);
    baseline::link(href, title, text)
  }
}

/// Take the language from the first line of an untagged code block.
///
/// Returns the remaining code and the language when the first line is an
/// allow-listed language name, the code untouched otherwise.
fn detect_language(code: &str) -> (&str, Option<&str>) {
  let (first_line, rest) = code.split_once('\n').unwrap_or((code, ""));
  let candidate = first_line.trim();

  if is_supported_language(candidate) {
    debug!("Detected language '{candidate}' on the first line of a code block");
    (rest, Some(candidate))
  } else {
    debug!("No language detected in: {candidate}");
    (code, None)
  }
}

/// Image whose loading is left to a script reading `data-src`.
fn lazy_image(href: &str, title: Option<&str>, text: &str) -> String {
  let mut html = format!(
    "<img data-src=\"{}\" alt=\"{}\"",
    escape_attribute(href),
    escape_attribute(text)
  );
  if let Some(title) = title {
    let _ = write!(html, " title=\"{}\"", escape_attribute(title));
  }
  html.push('>');
  html
}
