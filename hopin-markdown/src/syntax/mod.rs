//! Syntax highlighting for fenced code blocks.
//!
//! Highlighting goes through the [`SyntaxHighlighter`] trait so the engine can
//! be swapped out (or replaced by a stub in tests). The bundled backend is
//! **Syntect**, using Sublime Text syntax definitions with two-face added for
//! extended syntax definitions.
//!
//! Which fences get highlighted at all is decided by the
//! [`SUPPORTED_LANGUAGES`] allow-list, not by the backend.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{SyntaxError, SyntaxResult};
pub use types::{SUPPORTED_LANGUAGES, SyntaxHighlighter, is_supported_language};

#[cfg(feature = "syntect")] mod syntect;
#[cfg(feature = "syntect")]
pub use self::syntect::SyntectHighlighter;

/// Create the default highlighter based on available features.
///
/// # Errors
///
/// Returns [`SyntaxError::NoBackendAvailable`] if the crate was built without
/// a highlighting backend.
pub fn create_default_highlighter()
-> SyntaxResult<std::sync::Arc<dyn SyntaxHighlighter>> {
  #[cfg(feature = "syntect")]
  {
    Ok(std::sync::Arc::new(SyntectHighlighter::new()))
  }

  #[cfg(not(feature = "syntect"))]
  {
    Err(SyntaxError::NoBackendAvailable)
  }
}
