//! Per-render set of emitted construct tokens.

use std::collections::BTreeSet;

use crate::types::Token;

/// Write-only accumulator of the tokens a render emitted.
///
/// Recording a token twice is a no-op; the final list comes out sorted by
/// token name no matter the order things were recorded in.
#[derive(Debug, Default, Clone)]
pub struct TokenSet {
  tokens: BTreeSet<Token>,
}

impl TokenSet {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, token: Token) {
    self.tokens.insert(token);
  }

  #[must_use]
  pub fn contains(&self, token: Token) -> bool {
    self.tokens.contains(&token)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  /// Consume the set, yielding each token once in name order.
  #[must_use]
  pub fn into_sorted(self) -> Vec<Token> {
    self.tokens.into_iter().collect()
  }
}

impl Extend<Token> for TokenSet {
  fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
    self.tokens.extend(iter);
  }
}
