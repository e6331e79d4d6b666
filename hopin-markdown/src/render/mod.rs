//! Construct-by-construct HTML rendering.
//!
//! Rendering is split between two sides:
//!
//! - [`walk`] drives a single depth-first pass over the comrak AST. Children
//!   are rendered first and their HTML is handed to the hook of the enclosing
//!   construct, so every hook runs exactly once per construct, in document
//!   order.
//! - [`HtmlRenderer`] is the set of hooks, one per construct. Every method
//!   defaults to the [`baseline`] formatting, so an implementation only
//!   overrides the constructs it cares about.
//!
//! [`RenderSession`] is the implementation used by
//! [`MarkdownRenderer`](crate::MarkdownRenderer): it records
//! [`Token`](crate::Token)s, highlights code and resolves responsive images.

pub mod baseline;
pub mod image;
pub mod session;
pub mod tokens;
pub mod walk;

pub use image::{ImageError, ImageVariant, ImageVariantSet};
pub use session::RenderSession;
pub use tokens::TokenSet;
pub use walk::render_document;

use crate::utils::Slugger;

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
  Left,
  Center,
  Right,
}

/// What a table cell hook needs to know about the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCellFlags {
  /// Whether the cell sits in the header row.
  pub header: bool,
  /// Column alignment, if the delimiter row set one.
  pub align:  Option<Alignment>,
}

/// Hooks called by [`render_document`], one per Markdown construct.
///
/// Arguments called `text`, `body`, `content`, `header` or `quote` carry the
/// already rendered HTML of the construct's children. Each method returns the
/// HTML for the whole construct.
pub trait HtmlRenderer {
  /// Heading of `level` 1 to 6. `raw` is its plain text, for anchor IDs.
  fn heading(
    &mut self,
    text: &str,
    level: u8,
    raw: &str,
    slugger: &mut Slugger,
  ) -> String {
    baseline::heading(text, level, &slugger.slug(raw))
  }

  /// Fenced or indented code block. `code` is the raw source unless
  /// `escaped` is set.
  fn code(
    &mut self,
    code: &str,
    language: Option<&str>,
    escaped: bool,
  ) -> String {
    baseline::code(code, language, escaped)
  }

  /// Inline code span; `code` is already escaped.
  fn codespan(&mut self, code: &str) -> String {
    baseline::codespan(code)
  }

  /// Image with its plain alt `text`.
  fn image(&mut self, href: &str, title: Option<&str>, text: &str) -> String {
    baseline::image(href, title, text)
  }

  /// Raw HTML, either a block or an inline tag.
  fn html(&mut self, html: &str) -> String {
    baseline::html(html)
  }

  fn hr(&mut self) -> String {
    baseline::hr()
  }

  fn blockquote(&mut self, quote: &str) -> String {
    baseline::blockquote(quote)
  }

  fn list(&mut self, body: &str, ordered: bool, start: usize) -> String {
    baseline::list(body, ordered, start)
  }

  fn listitem(&mut self, text: &str) -> String {
    baseline::listitem(text)
  }

  fn paragraph(&mut self, text: &str) -> String {
    baseline::paragraph(text)
  }

  /// Table, given its rendered header rows and body rows.
  fn table(&mut self, header: &str, body: &str) -> String {
    baseline::table(header, body)
  }

  fn tablerow(&mut self, content: &str) -> String {
    baseline::tablerow(content)
  }

  fn tablecell(&mut self, content: &str, flags: TableCellFlags) -> String {
    baseline::tablecell(content, flags)
  }

  fn strong(&mut self, text: &str) -> String {
    baseline::strong(text)
  }

  fn em(&mut self, text: &str) -> String {
    baseline::em(text)
  }

  fn br(&mut self) -> String {
    baseline::br()
  }

  fn del(&mut self, text: &str) -> String {
    baseline::del(text)
  }

  fn link(&mut self, href: &str, title: Option<&str>, text: &str) -> String {
    baseline::link(href, title, text)
  }

  /// Plain text run; `text` is unescaped.
  fn text(&mut self, text: &str) -> String {
    baseline::text(text)
  }
}

/// Renderer with no overrides, producing the baseline HTML only.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaselineRenderer;

impl HtmlRenderer for BaselineRenderer {}
