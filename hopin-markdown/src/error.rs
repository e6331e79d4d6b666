//! Errors surfaced to callers of the renderer.

/// Errors that fail a whole render call.
///
/// Everything else that can go wrong while rendering (highlighting, image
/// lookups) degrades to plain output and is reported through
/// [`RenderResult::warnings`](crate::RenderResult::warnings) instead.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
  /// The Markdown input was not a string.
  #[error("You must provide a string to render_markdown(); got {received}")]
  InvalidInput {
    /// JSON rendering of the value that was received.
    received: String,
  },
}

impl RenderError {
  /// Build an [`InvalidInput`](Self::InvalidInput) error for a value.
  #[must_use]
  pub fn invalid_input(value: &serde_json::Value) -> Self {
    Self::InvalidInput {
      received: value.to_string(),
    }
  }
}
