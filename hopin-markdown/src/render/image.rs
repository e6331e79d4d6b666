//! Responsive image lookup.
//!
//! An image reference such as `/photos/cat.jpg` may name a *directory* under
//! the static asset root instead of a file. The directory then holds the same
//! picture pre-resized to several widths, each file named after its pixel
//! width:
//!
//! ```text
//! static/photos/cat.jpg/
//!   400.jpg  800.jpg  400.webp  800.webp
//! ```
//!
//! [`resolve_variants`] turns such a directory into an [`ImageVariantSet`],
//! which renders as a `<picture>` element with `srcset`s for the WebP and the
//! fallback format.

use std::{
  fmt::Write,
  io,
  path::{Component, Path, PathBuf},
};

use log::debug;
use walkdir::WalkDir;

use crate::utils::escape_attribute;

/// Extension of the next-generation format, offered in its own `<source>`.
pub const MODERN_FORMAT_EXTENSION: &str = "webp";

/// MIME type announced for [`MODERN_FORMAT_EXTENSION`] sources.
pub const MODERN_FORMAT_MIME: &str = "image/webp";

/// Errors reading an image variant directory.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
  #[error("Failed to read image path {path}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("Failed to list image directory: {0}")]
  Walk(#[from] walkdir::Error),
}

/// One pre-resized file of a responsive image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageVariant {
  /// URL of the file, the image reference joined with the file name.
  pub url:   String,
  /// Width in pixels, parsed from the file stem.
  pub width: u32,
}

/// Variants found in an image directory, in file name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageVariantSet {
  /// [`MODERN_FORMAT_EXTENSION`] files.
  pub modern:   Vec<ImageVariant>,
  /// Every other format.
  pub fallback: Vec<ImageVariant>,
  /// Problems with individual files that were left out of the set.
  pub skipped:  Vec<String>,
}

impl ImageVariantSet {
  /// Whether no usable variant was found.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.modern.is_empty() && self.fallback.is_empty()
  }

  /// The `src` for consumers that ignore `srcset`.
  ///
  /// This is the widest fallback-format variant, the first one listed on a
  /// tie. A directory holding only modern-format files uses the widest of
  /// those instead.
  #[must_use]
  pub fn fallback_src(&self) -> Option<&ImageVariant> {
    widest(&self.fallback).or_else(|| widest(&self.modern))
  }

  /// Render the set as a `<picture>` element, or `None` when it is empty.
  #[must_use]
  pub fn to_picture(&self, alt: &str, sizes: &str) -> Option<String> {
    let src = self.fallback_src()?;
    let sizes = escape_attribute(sizes);

    let mut html = String::from("<picture>");
    if !self.modern.is_empty() {
      let _ = write!(
        html,
        "<source srcset=\"{}\" sizes=\"{sizes}\" type=\"{MODERN_FORMAT_MIME}\">",
        srcset(&self.modern)
      );
    }
    if !self.fallback.is_empty() {
      let _ = write!(
        html,
        "<source srcset=\"{}\" sizes=\"{sizes}\">",
        srcset(&self.fallback)
      );
    }
    let _ = write!(
      html,
      "<img src=\"{}\" alt=\"{}\"></picture>",
      escape_attribute(&src.url),
      escape_attribute(alt)
    );
    Some(html)
  }

  fn push(&mut self, variant: ImageVariant, modern: bool) {
    let bucket = if modern {
      &mut self.modern
    } else {
      &mut self.fallback
    };

    if bucket.iter().any(|existing| existing.width == variant.width) {
      self.skipped.push(format!(
        "duplicate width {}w for {}, keeping the first file",
        variant.width, variant.url
      ));
      return;
    }
    bucket.push(variant);
  }
}

/// `srcset` value: `"<url> <width>w"` entries joined by `", "`, in order.
#[must_use]
pub fn srcset(variants: &[ImageVariant]) -> String {
  variants
    .iter()
    .map(|variant| {
      format!("{} {}w", escape_attribute(&variant.url), variant.width)
    })
    .collect::<Vec<_>>()
    .join(", ")
}

fn widest(variants: &[ImageVariant]) -> Option<&ImageVariant> {
  variants.iter().reduce(|widest, variant| {
    if variant.width > widest.width {
      variant
    } else {
      widest
    }
  })
}

/// Parse a file stem as a pixel width.
///
/// Only plain ASCII digits are accepted: `"800"` is a width, `"2.5"`, `"+8"`
/// and `"hero"` are not.
#[must_use]
pub fn parse_width(stem: &str) -> Option<u32> {
  if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  stem.parse().ok()
}

/// Directory on disk that `href` refers to under `static_dir`.
///
/// Leading slashes are dropped so the reference stays relative to the root.
/// References that climb out of the root with `..` yield `None`.
#[must_use]
pub fn local_path(static_dir: &Path, href: &str) -> Option<PathBuf> {
  let relative = Path::new(href.trim_start_matches('/'));
  let escapes = relative.components().any(|component| {
    matches!(
      component,
      Component::ParentDir | Component::RootDir | Component::Prefix(_)
    )
  });

  (!escapes).then(|| static_dir.join(relative))
}

/// Look up the responsive variants of `href` under `static_dir`.
///
/// Returns `Ok(None)` when `href` does not name a directory (a plain image
/// file, or nothing at all).
///
/// # Errors
///
/// Returns an error if the path exists but cannot be inspected or listed.
pub fn resolve_variants(
  static_dir: &Path,
  href: &str,
) -> Result<Option<ImageVariantSet>, ImageError> {
  let Some(dir) = local_path(static_dir, href) else {
    debug!("Image '{href}' points outside the static directory");
    return Ok(None);
  };

  let metadata = match std::fs::metadata(&dir) {
    Ok(metadata) => metadata,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      debug!("No image variants at {}", dir.display());
      return Ok(None);
    },
    Err(e) => return Err(ImageError::Io { path: dir, source: e }),
  };
  if !metadata.is_dir() {
    debug!("{} is not an image variant directory", dir.display());
    return Ok(None);
  }

  let base_url = href.trim_end_matches('/');
  let mut set = ImageVariantSet::default();

  for entry in WalkDir::new(&dir)
    .min_depth(1)
    .max_depth(1)
    .sort_by_file_name()
  {
    let entry = entry?;
    let path = entry.path();
    // Stat through symlinks; a dangling link is not a file.
    if !path.is_file() {
      continue;
    }

    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
      continue;
    };
    let (Some(stem), Some(extension)) = (
      path.file_stem().and_then(|s| s.to_str()),
      path.extension().and_then(|e| e.to_str()),
    ) else {
      continue;
    };
    if name.starts_with('.') {
      continue;
    }

    let url = format!("{base_url}/{name}");
    let Some(width) = parse_width(stem) else {
      set
        .skipped
        .push(format!("'{url}' is not named after a pixel width"));
      continue;
    };

    set.push(ImageVariant { url, width }, extension == MODERN_FORMAT_EXTENSION);
  }

  Ok(Some(set))
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  fn variant(url: &str, width: u32) -> ImageVariant {
    ImageVariant {
      url: url.to_string(),
      width,
    }
  }

  fn image_dir(files: &[&str]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let dir = temp.path().join("set/x");
    fs::create_dir_all(&dir).expect("Failed to create image dir");
    for file in files {
      fs::write(dir.join(file), b"").expect("Failed to write image");
    }
    temp
  }

  #[test]
  fn test_parse_width_is_strict() {
    assert_eq!(parse_width("800"), Some(800));
    assert_eq!(parse_width("0"), Some(0));
    assert_eq!(parse_width("2.5"), None);
    assert_eq!(parse_width("+8"), None);
    assert_eq!(parse_width("-8"), None);
    assert_eq!(parse_width("hero"), None);
    assert_eq!(parse_width(""), None);
    assert_eq!(parse_width("99999999999"), None);
  }

  #[test]
  fn test_fallback_src_prefers_first_widest() {
    let set = ImageVariantSet {
      fallback: vec![
        variant("/a/1.jpg", 1),
        variant("/a/3.png", 3),
        variant("/a/3.jpg", 3),
      ],
      ..Default::default()
    };
    assert_eq!(set.fallback_src(), Some(&variant("/a/3.png", 3)));
  }

  #[test]
  fn test_srcset_keeps_listing_order() {
    let variants = [variant("/a/10.jpg", 10), variant("/a/2.jpg", 2)];
    assert_eq!(srcset(&variants), "/a/10.jpg 10w, /a/2.jpg 2w");
  }

  #[test]
  fn test_local_path_stays_under_root() {
    let root = Path::new("/srv/static");
    assert_eq!(
      local_path(root, "/set/x"),
      Some(PathBuf::from("/srv/static/set/x"))
    );
    assert_eq!(local_path(root, "/set/../../etc"), None);
  }

  #[test]
  fn test_resolve_variants_partitions_formats() {
    let temp = image_dir(&["1.jpg", "2.jpg", "1.webp", "2.webp"]);
    let set = resolve_variants(temp.path(), "/set/x")
      .expect("directory is readable")
      .expect("directory has variants");

    assert_eq!(set.modern, vec![
      variant("/set/x/1.webp", 1),
      variant("/set/x/2.webp", 2)
    ]);
    assert_eq!(set.fallback, vec![
      variant("/set/x/1.jpg", 1),
      variant("/set/x/2.jpg", 2)
    ]);
    assert!(set.skipped.is_empty());
  }

  #[test]
  fn test_resolve_variants_skips_bad_entries() {
    let temp = image_dir(&["1.jpg", "large.jpg", ".DS_Store", "README", "1.png"]);
    let set = resolve_variants(temp.path(), "/set/x")
      .expect("directory is readable")
      .expect("directory has variants");

    assert_eq!(set.fallback, vec![variant("/set/x/1.jpg", 1)]);
    assert_eq!(set.skipped.len(), 2);
    assert!(set.skipped.iter().any(|s| s.contains("large.jpg")));
    assert!(set.skipped.iter().any(|s| s.contains("duplicate width 1w")));
  }

  #[test]
  fn test_resolve_variants_missing_or_file() {
    let temp = image_dir(&["1.jpg"]);
    assert!(
      resolve_variants(temp.path(), "/set/missing")
        .expect("missing is not an error")
        .is_none()
    );
    assert!(
      resolve_variants(temp.path(), "/set/x/1.jpg")
        .expect("a file is not an error")
        .is_none()
    );
  }

  #[cfg(unix)]
  #[test]
  fn test_resolve_variants_follows_symlinked_files() {
    let temp = image_dir(&[]);
    let source = temp.path().join("original.jpg");
    fs::write(&source, b"").expect("Failed to write image");
    let dir = temp.path().join("set/x");
    std::os::unix::fs::symlink(&source, dir.join("100.jpg"))
      .expect("Failed to create symlink");
    std::os::unix::fs::symlink(
      temp.path().join("gone.jpg"),
      dir.join("200.jpg"),
    )
    .expect("Failed to create symlink");

    let set = resolve_variants(temp.path(), "/set/x")
      .expect("directory is readable")
      .expect("directory has variants");

    assert_eq!(set.fallback, vec![variant("/set/x/100.jpg", 100)]);
    assert!(set.skipped.is_empty());
  }

  #[cfg(unix)]
  #[test]
  fn test_resolve_variants_reports_io_errors() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp.path().join("set"), b"").expect("Failed to write file");

    let error = resolve_variants(temp.path(), "/set/x")
      .expect_err("a file used as a directory is an error");
    assert!(matches!(error, ImageError::Io { .. }));
    assert!(error.to_string().contains("set/x"));
  }

  #[test]
  fn test_to_picture() {
    let set = ImageVariantSet {
      modern: vec![variant("/x/1.webp", 1)],
      fallback: vec![variant("/x/1.jpg", 1), variant("/x/2.jpg", 2)],
      skipped: Vec::new(),
    };
    assert_eq!(
      set.to_picture("A \"cat\"", "100vw").as_deref(),
      Some(
        "<picture><source srcset=\"/x/1.webp 1w\" sizes=\"100vw\" \
         type=\"image/webp\"><source srcset=\"/x/1.jpg 1w, /x/2.jpg 2w\" \
         sizes=\"100vw\"><img src=\"/x/2.jpg\" alt=\"A &quot;cat&quot;\"></picture>"
      )
    );
  }

  #[test]
  fn test_to_picture_modern_only_and_empty() {
    let set = ImageVariantSet {
      modern: vec![variant("/x/4.webp", 4), variant("/x/8.webp", 8)],
      ..Default::default()
    };
    let html = set.to_picture("", "100vw").expect("set is not empty");
    assert!(html.contains("<img src=\"/x/8.webp\""));
    assert_eq!(html.matches("<source").count(), 1);

    assert!(ImageVariantSet::default().to_picture("", "100vw").is_none());
  }
}
