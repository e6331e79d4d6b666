//! Render a Markdown file (or a built-in sample) and print the HTML, the
//! token manifest and any warnings.
//!
//! ```sh
//! cargo run --example render -- README.md public
//! ```

use std::{env, fs};

use hopin_markdown::{MarkdownRenderer, RenderOptionsBuilder};

const SAMPLE: &str = r#"# Hopin Markdown

Some **bold** text, a [link](https://example.com) and `inline code`.

```javascript
const greeting = "Hello, world!";
console.log(greeting);
```

```rust
// Not on the allow-list, rendered as plain code.
fn main() {}
```

![Sunset](/images/sunset)
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let mut args = env::args().skip(1);
  let markdown = match args.next() {
    Some(path) => fs::read_to_string(path)?,
    None => SAMPLE.to_string(),
  };
  let static_dir = args.next();

  let options = RenderOptionsBuilder::new()
    .static_asset_dir(static_dir)
    .image_paragraph_class(Some("image"))
    .build();
  let renderer = MarkdownRenderer::new(options);
  let result = renderer.render(&markdown);

  println!("=== HTML ===\n{}\n", result.html);
  println!("=== Tokens ===\n{}\n", result.token_names().join(", "));

  if !result.warnings.is_empty() {
    println!("=== Warnings ===");
    for warning in &result.warnings {
      println!("- {warning}");
    }
    println!();
  }

  #[cfg(feature = "syntect")]
  {
    let highlighter = hopin_markdown::SyntectHighlighter::new();
    let css = highlighter.stylesheet("InspiredGitHub")?;
    println!("=== Stylesheet ({} bytes) ===", css.len());
  }

  Ok(())
}
