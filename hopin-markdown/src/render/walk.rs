//! Single-pass traversal of the comrak AST that drives [`HtmlRenderer`]
//! hooks.

use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};

use super::{Alignment, HtmlRenderer, TableCellFlags};
use crate::utils::{Slugger, escape_text, extract_inline_text};

/// Render a parsed document through `renderer`.
///
/// Hooks are called synchronously, once per construct, children before their
/// parent. Heading IDs are unique within this call only.
pub fn render_document<'a, R>(
  root: &'a AstNode<'a>,
  renderer: &mut R,
) -> String
where
  R: HtmlRenderer + ?Sized,
{
  let mut walker = Walker {
    renderer,
    slugger: Slugger::new(),
    tight_lists: Vec::new(),
  };
  walker.render_node(root)
}

struct Walker<'r, R: ?Sized> {
  renderer:    &'r mut R,
  slugger:     Slugger,
  /// Tightness of the lists enclosing the current node, innermost last.
  tight_lists: Vec<bool>,
}

impl<R: HtmlRenderer + ?Sized> Walker<'_, R> {
  fn render_children<'a>(&mut self, node: &'a AstNode<'a>) -> String {
    node
      .children()
      .map(|child| self.render_node(child))
      .collect()
  }

  fn render_node<'a>(&mut self, node: &'a AstNode<'a>) -> String {
    // Cloned so no borrow is held while children render.
    let value = node.data.borrow().value.clone();

    match value {
      NodeValue::Paragraph => {
        let text = self.render_children(node);
        if self.in_tight_item(node) {
          text
        } else {
          self.renderer.paragraph(&text)
        }
      },
      NodeValue::Heading(heading) => {
        let text = self.render_children(node);
        let raw = extract_inline_text(node);
        self
          .renderer
          .heading(&text, heading.level, &raw, &mut self.slugger)
      },
      NodeValue::CodeBlock(block) => {
        let language = block.info.split_whitespace().next();
        let code = block
          .literal
          .strip_suffix('\n')
          .unwrap_or(&block.literal);
        self.renderer.code(code, language, false)
      },
      NodeValue::Code(code) => {
        self.renderer.codespan(&escape_text(&code.literal))
      },
      NodeValue::Image(link) => {
        let text = extract_inline_text(node);
        self
          .renderer
          .image(&link.url, non_empty(&link.title), &text)
      },
      NodeValue::Link(link) => {
        let text = self.render_children(node);
        self.renderer.link(&link.url, non_empty(&link.title), &text)
      },
      NodeValue::HtmlBlock(block) => self.renderer.html(&block.literal),
      NodeValue::HtmlInline(html) => self.renderer.html(&html),
      NodeValue::ThematicBreak => self.renderer.hr(),
      NodeValue::BlockQuote => {
        let quote = self.render_children(node);
        self.renderer.blockquote(&quote)
      },
      NodeValue::List(list) => {
        self.tight_lists.push(list.tight);
        let body = self.render_children(node);
        self.tight_lists.pop();

        let ordered = matches!(list.list_type, ListType::Ordered);
        self.renderer.list(&body, ordered, list.start)
      },
      NodeValue::Item(_) => {
        let text = self.render_children(node);
        self.renderer.listitem(&text)
      },
      NodeValue::Table(table) => {
        let alignments: Vec<Option<Alignment>> =
          table.alignments.iter().map(alignment).collect();
        self.render_table(node, &alignments)
      },
      NodeValue::Strong => {
        let text = self.render_children(node);
        self.renderer.strong(&text)
      },
      NodeValue::Emph => {
        let text = self.render_children(node);
        self.renderer.em(&text)
      },
      NodeValue::Strikethrough => {
        let text = self.render_children(node);
        self.renderer.del(&text)
      },
      NodeValue::LineBreak => self.renderer.br(),
      NodeValue::SoftBreak => "\n".to_string(),
      NodeValue::Text(text) => self.renderer.text(&text),
      _ => self.render_children(node),
    }
  }

  fn render_table<'a>(
    &mut self,
    table: &'a AstNode<'a>,
    alignments: &[Option<Alignment>],
  ) -> String {
    let mut header = String::new();
    let mut body = String::new();

    for row in table.children() {
      let is_header =
        matches!(row.data.borrow().value, NodeValue::TableRow(true));

      let mut cells = String::new();
      for (column, cell) in row.children().enumerate() {
        let content = self.render_children(cell);
        let flags = TableCellFlags {
          header: is_header,
          align:  alignments.get(column).copied().flatten(),
        };
        cells.push_str(&self.renderer.tablecell(&content, flags));
      }

      let html = self.renderer.tablerow(&cells);
      if is_header {
        header.push_str(&html);
      } else {
        body.push_str(&html);
      }
    }

    self.renderer.table(&header, &body)
  }

  /// Paragraphs directly inside an item of a tight list are not wrapped.
  fn in_tight_item<'a>(&self, node: &'a AstNode<'a>) -> bool {
    let parent_is_item = node.parent().is_some_and(|parent| {
      matches!(parent.data.borrow().value, NodeValue::Item(_))
    });
    parent_is_item && self.tight_lists.last().copied().unwrap_or(false)
  }
}

fn alignment(alignment: &TableAlignment) -> Option<Alignment> {
  match alignment {
    TableAlignment::None => None,
    TableAlignment::Left => Some(Alignment::Left),
    TableAlignment::Center => Some(Alignment::Center),
    TableAlignment::Right => Some(Alignment::Right),
  }
}

fn non_empty(text: &str) -> Option<&str> {
  (!text.is_empty()).then_some(text)
}
