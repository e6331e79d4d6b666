//! Integration tests for responsive and animated images.

use std::{fs, path::Path};

use hopin_markdown::{
  AnimatedImagePolicy,
  MarkdownRenderer,
  RenderOptionsBuilder,
  RenderResult,
};
use tempfile::TempDir;

/// Create empty image files under `root/dir`.
fn create_images(root: &Path, dir: &str, files: &[&str]) {
  let dir = root.join(dir);
  fs::create_dir_all(&dir).expect("Failed to create image directory");
  for file in files {
    fs::write(dir.join(file), b"").expect("Failed to write image");
  }
}

/// Render without the image paragraph class, to keep expectations short.
fn render_with_static_dir(static_dir: &Path, markdown: &str) -> RenderResult {
  let options = RenderOptionsBuilder::new()
    .static_asset_dir(Some(static_dir))
    .highlight_code(false)
    .image_paragraph_class(None::<String>)
    .build();
  MarkdownRenderer::new(options).render(markdown)
}

#[test]
fn test_variant_directory_becomes_picture() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "set/x", &[
    "1.jpg", "2.jpg", "1.webp", "2.webp",
  ]);

  let result = render_with_static_dir(temp_dir.path(), "![Alt](/set/x)");

  assert_eq!(
    result.html,
    "<p><picture><source srcset=\"/set/x/1.webp 1w, /set/x/2.webp 2w\" \
     sizes=\"100vw\" type=\"image/webp\"><source srcset=\"/set/x/1.jpg 1w, \
     /set/x/2.jpg 2w\" sizes=\"100vw\"><img src=\"/set/x/2.jpg\" \
     alt=\"Alt\"></picture></p>"
  );
  assert_eq!(result.token_names(), vec!["img", "p"]);
  assert!(result.warnings.is_empty());
}

#[test]
fn test_missing_directory_renders_plain_image() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");

  let result = render_with_static_dir(temp_dir.path(), "![Alt](/set/x)");

  assert_eq!(result.html, "<p><img src=\"/set/x\" alt=\"Alt\"></p>");
  assert_eq!(result.token_names(), vec!["img", "p"]);
  assert!(result.warnings.is_empty());
}

#[test]
fn test_image_file_renders_plain_image() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "set", &["photo.jpg"]);

  let result = render_with_static_dir(
    temp_dir.path(),
    "![Photo](/set/photo.jpg \"A photo\")",
  );

  assert_eq!(
    result.html,
    "<p><img src=\"/set/photo.jpg\" alt=\"Photo\" title=\"A photo\"></p>"
  );
}

#[test]
fn test_remote_image_is_not_resolved() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");

  let result =
    render_with_static_dir(temp_dir.path(), "![Remote](https://example.com/x)");

  assert_eq!(
    result.html,
    "<p><img src=\"https://example.com/x\" alt=\"Remote\"></p>"
  );
}

#[test]
fn test_parent_components_stay_inside_static_dir() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "secret", &["1.jpg"]);
  let static_dir = temp_dir.path().join("static");
  fs::create_dir_all(&static_dir).expect("Failed to create static dir");

  let result = render_with_static_dir(&static_dir, "![Up](/../secret)");

  assert_eq!(result.html, "<p><img src=\"/../secret\" alt=\"Up\"></p>");
}

#[test]
fn test_webp_only_directory() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "w", &["20.webp", "10.webp"]);

  let result = render_with_static_dir(temp_dir.path(), "![A](/w)");

  assert_eq!(
    result.html,
    "<p><picture><source srcset=\"/w/10.webp 10w, /w/20.webp 20w\" \
     sizes=\"100vw\" type=\"image/webp\"><img src=\"/w/20.webp\" \
     alt=\"A\"></picture></p>"
  );
}

#[test]
fn test_unusable_entries_are_skipped_with_warnings() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "mixed", &[
    ".DS_Store",
    "README",
    "hero.jpg",
    "2.5.jpg",
    "100.jpg",
  ]);

  let result = render_with_static_dir(temp_dir.path(), "![A](/mixed)");

  assert_eq!(
    result.html,
    "<p><picture><source srcset=\"/mixed/100.jpg 100w\" \
     sizes=\"100vw\"><img src=\"/mixed/100.jpg\" alt=\"A\"></picture></p>"
  );
  assert_eq!(result.warnings.len(), 2);
  assert!(result.warnings.iter().any(|w| w.contains("hero.jpg")));
  assert!(result.warnings.iter().any(|w| w.contains("2.5.jpg")));
}

#[test]
fn test_empty_directory_falls_back_with_warning() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "empty", &[]);

  let result = render_with_static_dir(temp_dir.path(), "![A](/empty)");

  assert_eq!(result.html, "<p><img src=\"/empty\" alt=\"A\"></p>");
  assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_animated_image_is_lazy_loaded_by_default() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "anim/spin.gif", &["100.gif"]);

  let result = render_with_static_dir(
    temp_dir.path(),
    "![Spinner](/anim/spin.gif)",
  );

  assert_eq!(
    result.html,
    "<p><img data-src=\"/anim/spin.gif\" alt=\"Spinner\"></p>"
  );
  assert_eq!(result.token_names(), vec!["async-img", "img", "p"]);
}

#[test]
fn test_animated_image_under_responsive_policy() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "anim/spin.gif", &["100.gif", "200.gif"]);

  let options = RenderOptionsBuilder::new()
    .static_asset_dir(Some(temp_dir.path()))
    .animated_images(AnimatedImagePolicy::Responsive)
    .build();
  let result =
    MarkdownRenderer::new(options).render("![Spinner](/anim/spin.gif)");

  assert_eq!(
    result.html,
    "<p class=\"__hopin__u-img\"><picture><source \
     srcset=\"/anim/spin.gif/100.gif 100w, \
     /anim/spin.gif/200.gif 200w\" sizes=\"100vw\"><img \
     src=\"/anim/spin.gif/200.gif\" alt=\"Spinner\"></picture></p>"
  );
  assert_eq!(result.token_names(), vec!["img", "p"]);
}

#[test]
fn test_image_paragraph_class_and_sizes() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "set/x", &["1.jpg"]);

  let options = RenderOptionsBuilder::new()
    .static_asset_dir(Some(temp_dir.path()))
    .image_paragraph_class(Some("image"))
    .picture_sizes("(min-width: 800px) 50vw, 100vw")
    .build();
  let renderer = MarkdownRenderer::new(options);

  let alone = renderer.render("![Alt](/set/x)");
  assert_eq!(
    alone.html,
    "<p class=\"image\"><picture><source srcset=\"/set/x/1.jpg 1w\" \
     sizes=\"(min-width: 800px) 50vw, 100vw\"><img src=\"/set/x/1.jpg\" \
     alt=\"Alt\"></picture></p>"
  );

  let with_text = renderer.render("Look: ![Alt](/plain.png)");
  assert_eq!(
    with_text.html,
    "<p>Look: <img src=\"/plain.png\" alt=\"Alt\"></p>"
  );
}

#[test]
fn test_image_paragraphs_get_utility_class_by_default() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  let options = RenderOptionsBuilder::new()
    .static_asset_dir(Some(temp_dir.path()))
    .build();
  let result = MarkdownRenderer::new(options)
    .render("![Alt Text](/picture-sets/non-directory-image.jpg)");

  assert_eq!(
    result.html,
    "<p class=\"__hopin__u-img\"><img \
     src=\"/picture-sets/non-directory-image.jpg\" alt=\"Alt Text\"></p>"
  );
}

#[cfg(unix)]
#[test]
fn test_symlinked_variants_are_used() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "build", &["hero-100.jpg"]);
  create_images(temp_dir.path(), "set/x", &[]);
  std::os::unix::fs::symlink(
    temp_dir.path().join("build/hero-100.jpg"),
    temp_dir.path().join("set/x/100.jpg"),
  )
  .expect("Failed to create symlink");

  let result = render_with_static_dir(temp_dir.path(), "![A](/set/x)");

  assert_eq!(
    result.html,
    "<p><picture><source srcset=\"/set/x/100.jpg 100w\" \
     sizes=\"100vw\"><img src=\"/set/x/100.jpg\" alt=\"A\"></picture></p>"
  );
  assert!(result.warnings.is_empty());
}

#[cfg(unix)]
#[test]
fn test_uninspectable_path_falls_back_with_warning() {
  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  // `set` is a file, so looking up `set/x` fails with something other than
  // "not found".
  create_images(temp_dir.path(), "", &["set"]);

  let result = render_with_static_dir(temp_dir.path(), "![A](/set/x)");

  assert_eq!(result.html, "<p><img src=\"/set/x\" alt=\"A\"></p>");
  assert_eq!(result.token_names(), vec!["img", "p"]);
  assert_eq!(result.warnings.len(), 1);
  assert!(result.warnings[0].contains("Failed to read image variants"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_falls_back_with_warning() {
  use std::os::unix::fs::PermissionsExt;

  let temp_dir = TempDir::new().expect("Failed to create temp dir");
  create_images(temp_dir.path(), "set/x", &["1.jpg"]);
  let dir = temp_dir.path().join("set/x");
  fs::set_permissions(&dir, fs::Permissions::from_mode(0o000))
    .expect("Failed to change permissions");

  // Privileged users read through the mode bits; nothing to check then.
  let readable = fs::read_dir(&dir).is_ok();
  let result = (!readable)
    .then(|| render_with_static_dir(temp_dir.path(), "![A](/set/x)"));

  fs::set_permissions(&dir, fs::Permissions::from_mode(0o755))
    .expect("Failed to restore permissions");

  if let Some(result) = result {
    assert_eq!(result.html, "<p><img src=\"/set/x\" alt=\"A\"></p>");
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("Failed to read image variants"));
  }
}
