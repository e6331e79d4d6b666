//! Baseline HTML for each Markdown construct.
//!
//! These are the formatting rules every hook falls back to: tag names,
//! attribute order and newlines are fixed here so that hooks which add
//! behaviour still produce output identical to the plain renderer wherever
//! their transform does not apply.
//!
//! Inputs named `text`, `body` or `content` are already-rendered HTML and are
//! inserted as is. URLs, titles and alt text are escaped here.

use std::fmt::Write;

use super::{Alignment, TableCellFlags};
use crate::utils::{escape_attribute, escape_text};

pub fn heading(text: &str, level: u8, id: &str) -> String {
  format!("<h{level} id=\"{}\">{text}</h{level}>\n", escape_attribute(id))
}

/// Code block. `escaped` says whether `code` is already HTML.
pub fn code(code: &str, language: Option<&str>, escaped: bool) -> String {
  let code = if escaped {
    code.into()
  } else {
    escape_text(code)
  };

  match language {
    Some(language) => {
      format!(
        "<pre><code class=\"language-{}\">{code}</code></pre>\n",
        escape_attribute(language)
      )
    },
    None => format!("<pre><code>{code}</code></pre>\n"),
  }
}

/// Inline code; `code` is already escaped.
pub fn codespan(code: &str) -> String {
  format!("<code>{code}</code>")
}

pub fn blockquote(body: &str) -> String {
  format!("<blockquote>\n{body}</blockquote>\n")
}

pub fn html(html: &str) -> String {
  html.to_string()
}

pub fn hr() -> String {
  "<hr>\n".to_string()
}

pub fn list(body: &str, ordered: bool, start: usize) -> String {
  if !ordered {
    return format!("<ul>\n{body}</ul>\n");
  }
  if start == 1 {
    format!("<ol>\n{body}</ol>\n")
  } else {
    format!("<ol start=\"{start}\">\n{body}</ol>\n")
  }
}

pub fn listitem(text: &str) -> String {
  format!("<li>{text}</li>\n")
}

pub fn paragraph(text: &str) -> String {
  format!("<p>{text}</p>\n")
}

pub fn table(header: &str, body: &str) -> String {
  let mut html = format!("<table>\n<thead>\n{header}</thead>\n");
  if !body.is_empty() {
    let _ = write!(html, "<tbody>{body}</tbody>");
  }
  html.push_str("</table>\n");
  html
}

pub fn tablerow(content: &str) -> String {
  format!("<tr>\n{content}</tr>\n")
}

pub fn tablecell(content: &str, flags: TableCellFlags) -> String {
  let tag = if flags.header { "th" } else { "td" };
  match flags.align {
    Some(align) => {
      format!("<{tag} align=\"{}\">{content}</{tag}>\n", align.as_str())
    },
    None => format!("<{tag}>{content}</{tag}>\n"),
  }
}

pub fn strong(text: &str) -> String {
  format!("<strong>{text}</strong>")
}

pub fn em(text: &str) -> String {
  format!("<em>{text}</em>")
}

pub fn br() -> String {
  "<br>".to_string()
}

pub fn del(text: &str) -> String {
  format!("<del>{text}</del>")
}

pub fn link(href: &str, title: Option<&str>, text: &str) -> String {
  let mut html = format!("<a href=\"{}\"", escape_attribute(href));
  if let Some(title) = title {
    let _ = write!(html, " title=\"{}\"", escape_attribute(title));
  }
  let _ = write!(html, ">{text}</a>");
  html
}

/// Image; `text` is the plain alt text.
pub fn image(href: &str, title: Option<&str>, text: &str) -> String {
  let mut html = format!(
    "<img src=\"{}\" alt=\"{}\"",
    escape_attribute(href),
    escape_attribute(text)
  );
  if let Some(title) = title {
    let _ = write!(html, " title=\"{}\"", escape_attribute(title));
  }
  html.push('>');
  html
}

pub fn text(text: &str) -> String {
  escape_text(text).into_owned()
}

impl Alignment {
  pub(crate) const fn as_str(self) -> &'static str {
    match self {
      Self::Left => "left",
      Self::Center => "center",
      Self::Right => "right",
    }
  }
}
